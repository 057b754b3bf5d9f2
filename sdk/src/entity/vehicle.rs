use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, Rotation, Vec3};

use crate::events::{GoingEvent, VehicleDestroyedEvent, VehicleEvent};

use super::base::EntityBase;

pub struct Vehicle {
    base: EntityBase,
    on_player_entered: EventChannel<VehicleEvent>,
    on_player_exited: EventChannel<VehicleEvent>,
    on_destroyed: EventChannel<VehicleDestroyedEvent>,
}

impl Vehicle {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Vehicle, host),
            on_player_entered: EventChannel::new(),
            on_player_exited: EventChannel::new(),
            on_destroyed: EventChannel::new(),
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

    pub fn rotation(&self) -> Rotation {
        self.base.rotation()
    }

    pub fn teleport(&self, position: Vec3) {
        self.base.teleport(position);
    }

    pub fn destroy(&self) {
        self.base.destroy();
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn health(&self) -> f32 {
        self.base.host().vehicle_health_of(self.base.handle())
    }

    pub fn set_health(&self, health: f32) {
        self.base
            .host()
            .set_vehicle_health(self.base.handle(), health);
    }

    pub fn occupant_count(&self) -> u8 {
        self.base.host().occupant_count_of(self.base.handle())
    }

    pub fn on_player_entered(&self) -> &EventChannel<VehicleEvent> {
        &self.on_player_entered
    }

    pub fn on_player_exited(&self) -> &EventChannel<VehicleEvent> {
        &self.on_player_exited
    }

    pub fn on_destroyed(&self) -> &EventChannel<VehicleDestroyedEvent> {
        &self.on_destroyed
    }
}
