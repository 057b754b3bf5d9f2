use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, TeamId, Vec3};

use crate::events::{CaptureEvent, GoingEvent, McomEvent};

use super::base::EntityBase;

// CapturePoint

pub struct CapturePoint {
    base: EntityBase,
    on_capture_progress: EventChannel<CaptureEvent>,
    on_captured: EventChannel<CaptureEvent>,
    on_lost: EventChannel<CaptureEvent>,
}

impl CapturePoint {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::CapturePoint, host),
            on_capture_progress: EventChannel::new(),
            on_captured: EventChannel::new(),
            on_lost: EventChannel::new(),
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

    pub fn owner_team(&self) -> TeamId {
        self.base.host().owner_team_of(self.base.handle())
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.base
            .host()
            .set_objective_enabled(self.base.handle(), enabled);
    }

    pub fn neutralize(&self) {
        self.base.host().neutralize(self.base.handle());
    }

    pub fn on_capture_progress(&self) -> &EventChannel<CaptureEvent> {
        &self.on_capture_progress
    }

    pub fn on_captured(&self) -> &EventChannel<CaptureEvent> {
        &self.on_captured
    }

    pub fn on_lost(&self) -> &EventChannel<CaptureEvent> {
        &self.on_lost
    }
}

// Mcom

pub struct Mcom {
    base: EntityBase,
    on_armed: EventChannel<McomEvent>,
    on_disarmed: EventChannel<McomEvent>,
    on_destroyed: EventChannel<McomEvent>,
}

impl Mcom {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Mcom, host),
            on_armed: EventChannel::new(),
            on_disarmed: EventChannel::new(),
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

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn is_armed(&self) -> bool {
        self.base.host().is_armed(self.base.handle())
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.base
            .host()
            .set_objective_enabled(self.base.handle(), enabled);
    }

    pub fn on_armed(&self) -> &EventChannel<McomEvent> {
        &self.on_armed
    }

    pub fn on_disarmed(&self) -> &EventChannel<McomEvent> {
        &self.on_disarmed
    }

    pub fn on_destroyed(&self) -> &EventChannel<McomEvent> {
        &self.on_destroyed
    }
}

// Hq

pub struct Hq {
    base: EntityBase,
}

impl Hq {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Hq, host),
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

    pub fn owner_team(&self) -> TeamId {
        self.base.host().owner_team_of(self.base.handle())
    }

    pub fn set_spawning_enabled(&self, enabled: bool) {
        self.base
            .host()
            .set_objective_enabled(self.base.handle(), enabled);
    }
}

// Sector

pub struct Sector {
    base: EntityBase,
}

impl Sector {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Sector, host),
        }
    }

    pub fn id(&self) -> EntityId {
        self.base.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.base.kind()
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    /// Ids of the capture points grouped under this sector.
    pub fn capture_point_ids(&self) -> Vec<EntityId> {
        self.base.host().sector_points_of(self.base.handle())
    }

    pub fn set_locked(&self, locked: bool) {
        self.base.host().set_sector_locked(self.base.handle(), locked);
    }
}
