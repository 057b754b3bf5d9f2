mod base;
mod entity;
mod objective;
mod player;
mod spawner;
mod squad;
mod support;
mod team;
mod trigger;
mod vehicle;

pub use entity::Entity;
pub use objective::{CapturePoint, Hq, Mcom, Sector};
pub use player::{AiPlayerRef, Player};
pub use spawner::{Spawner, VehicleSpawner};
pub use squad::Squad;
pub use support::{GenericEntity, Sfx, Vfx, WaypointPath, WorldIcon};
pub use team::Team;
pub use trigger::{AreaTrigger, InteractPoint};
pub use vehicle::Vehicle;
