//! Occurrence payloads carried through the event channels.
//!
//! Entity fields are always the generic [`Entity`] handle rather than a
//! narrowed wrapper: the first resolution of an id fixes its wrapper kind
//! for that id's lifetime, so a handle the host presents as a player may
//! legitimately resolve to something else. Handlers narrow with the
//! `as_*` accessors.

use frontline_core::{TeamId, Vec3};

use crate::entity::Entity;

#[derive(Clone)]
pub struct GoingEvent {
    pub entity: Entity,
}

#[derive(Clone)]
pub struct JoinEvent {
    pub player: Entity,
}

#[derive(Clone)]
pub struct LeaveEvent {
    pub player: Entity,
}

#[derive(Clone)]
pub struct DiedEvent {
    pub victim: Entity,
    pub killer: Option<Entity>,
}

#[derive(Clone)]
pub struct SpawnEvent {
    pub spawned: Entity,
    pub spawner: Option<Entity>,
}

/// Shared by both sides of a vehicle occupancy change: the player's
/// entered/exited channel and the vehicle's counterpart receive the same
/// payload.
#[derive(Clone)]
pub struct VehicleEvent {
    pub player: Entity,
    pub vehicle: Entity,
}

#[derive(Clone)]
pub struct VehicleDestroyedEvent {
    pub vehicle: Entity,
}

#[derive(Clone)]
pub struct TriggerEvent {
    pub entity: Entity,
    pub trigger: Entity,
}

#[derive(Clone)]
pub struct InteractEvent {
    pub player: Entity,
    pub point: Entity,
}

#[derive(Clone)]
pub struct CaptureEvent {
    pub point: Entity,
    pub team: TeamId,
}

#[derive(Clone)]
pub struct McomEvent {
    pub mcom: Entity,
    pub player: Option<Entity>,
}

#[derive(Clone)]
pub struct TeamJoinEvent {
    pub player: Entity,
    pub team: Entity,
}

#[derive(Clone, Copy)]
pub struct TickEvent {
    pub dt: f32,
}

#[derive(Clone)]
pub struct RaycastHit {
    pub requester: Entity,
    pub point: Vec3,
    pub normal: Vec3,
    pub target: Option<Entity>,
}

#[derive(Clone)]
pub struct RaycastMiss {
    pub requester: Entity,
}
