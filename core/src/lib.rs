//! # Frontline Core
//! Host capability contracts, the entity identity map, and the event
//! channel machinery shared by the frontline SDK crates.
//!
//! Everything here assumes the host runtime's single-threaded callback
//! model: occurrences arrive synchronously and exclusively, so shared
//! state uses interior mutability instead of locks. A port to a host that
//! delivers callbacks concurrently must add synchronization around the
//! registry and channel state.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod channel;
mod host;
mod key_generator;
mod kind;
mod registry;
mod types;

pub use channel::{
    error::HandlerError,
    event_channel::{EventChannel, Handler, HandlerResult},
    subscription::{Subscription, SubscriptionId},
};
pub use host::{ErrorSink, Host};
pub use key_generator::KeyGenerator;
pub use kind::EntityKind;
pub use registry::EntityRegistry;
pub use types::{
    EntityId, HostHandle, InputRestriction, Rotation, ScoreboardColumn, SquadTag, TeamId, Vec3,
    WeaponSlot,
};
