//! # Frontline SDK
//! An object layer over a procedural game-host scripting runtime: every
//! host object resolves to a single canonical wrapper, gameplay
//! occurrences route to per-entity event channels, and state changes are
//! one method call on the entity of interest instead of a global function
//! fed an id.
//!
//! The host drives everything: it delivers each occurrence synchronously
//! through one [`Game`] entry point, which resolves the raw handles to
//! their wrappers and dispatches the matching channels. The SDK never
//! starts threads and never blocks inside an entry point.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod ai;
mod entity;
mod error;
mod events;
mod game;
mod loadout;
mod scoreboard;

pub use frontline_core::{
    EntityId, EntityKind, ErrorSink, EventChannel, Handler, HandlerError, HandlerResult, Host,
    HostHandle, InputRestriction, Rotation, ScoreboardColumn, SquadTag, Subscription, TeamId, Vec3,
    WeaponSlot,
};

pub use ai::{BehaviorKind, Personality, Routine};
pub use entity::{
    AiPlayerRef, AreaTrigger, CapturePoint, Entity, GenericEntity, Hq, InteractPoint, Mcom,
    Player, Sector, Spawner, Squad, Team, Vehicle, VehicleSpawner, Vfx, WaypointPath, WorldIcon,
    Sfx,
};
pub use error::ReadError;
pub use events::{
    CaptureEvent, DiedEvent, GoingEvent, InteractEvent, JoinEvent, LeaveEvent, McomEvent,
    RaycastHit, RaycastMiss, SpawnEvent, TeamJoinEvent, TickEvent, TriggerEvent,
    VehicleDestroyedEvent, VehicleEvent,
};
pub use game::{Game, GameConfig};
pub use loadout::{Inventory, Weapon, WeaponSpec};
pub use scoreboard::ScoreboardConfig;
