mod personality;
mod routine;

pub use personality::{BehaviorKind, Personality};
pub use routine::Routine;

pub(crate) use routine::RoutineScheduler;
