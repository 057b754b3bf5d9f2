use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, Vec3};

use crate::events::{GoingEvent, SpawnEvent};

use super::base::EntityBase;

// Spawner

/// Soldier spawn point. A pending personality binding armed against this
/// spawner is consumed by the next confirmed spawn it produces.
pub struct Spawner {
    base: EntityBase,
    on_spawned_entity: EventChannel<SpawnEvent>,
}

impl Spawner {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Spawner, host),
            on_spawned_entity: EventChannel::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base.kind()
    }

    pub fn position(&self) -> Vec3 {
        self.base.position()
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.base
            .host()
            .set_spawner_enabled(self.base.handle(), enabled);
    }

    pub fn request_spawn(&self) {
        self.base.host().request_spawn(self.base.handle());
    }

    pub fn on_spawned_entity(&self) -> &EventChannel<SpawnEvent> {
        &self.on_spawned_entity
    }
}

// VehicleSpawner

pub struct VehicleSpawner {
    base: EntityBase,
    on_spawned_entity: EventChannel<SpawnEvent>,
}

impl VehicleSpawner {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::VehicleSpawner, host),
            on_spawned_entity: EventChannel::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base.kind()
    }

    pub fn position(&self) -> Vec3 {
        self.base.position()
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    /// Blueprint tag of the vehicle this spawner produces.
    pub fn blueprint(&self) -> String {
        self.base.host().vehicle_blueprint_of(self.base.handle())
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.base
            .host()
            .set_spawner_enabled(self.base.handle(), enabled);
    }

    pub fn request_spawn(&self) {
        self.base.host().request_spawn(self.base.handle());
    }

    pub fn on_spawned_entity(&self) -> &EventChannel<SpawnEvent> {
        &self.on_spawned_entity
    }
}
