use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, Rotation, Vec3};

use crate::{error::ReadError, events::GoingEvent};

use super::base::EntityBase;

// WaypointPath

pub struct WaypointPath {
    base: EntityBase,
}

impl WaypointPath {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::WaypointPath, host),
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

    pub(crate) fn handle(&self) -> HostHandle {
        self.base.handle()
    }

    /// Ordered node positions of the path.
    pub fn nodes(&self) -> Vec<Vec3> {
        self.base.host().waypoint_nodes_of(self.base.handle())
    }
}

// WorldIcon

pub struct WorldIcon {
    base: EntityBase,
}

impl WorldIcon {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::WorldIcon, host),
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

    pub fn teleport(&self, position: Vec3) {
        self.base.teleport(position);
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn set_text(&self, text: &str) {
        self.base.host().set_icon_text(self.base.handle(), text);
    }

    /// The host has no getter for icon text; this always fails and
    /// retrying cannot change that.
    pub fn text(&self) -> Result<String, ReadError> {
        Err(ReadError::Unsupported { what: "icon text" })
    }

    pub fn set_image(&self, image: &str) {
        self.base.host().set_icon_image(self.base.handle(), image);
    }

    pub fn set_visible(&self, visible: bool) {
        self.base.host().set_icon_visible(self.base.handle(), visible);
    }
}

// Vfx

pub struct Vfx {
    base: EntityBase,
}

impl Vfx {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Vfx, host),
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

    pub fn teleport(&self, position: Vec3) {
        self.base.teleport(position);
    }

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }

    pub fn play(&self) {
        self.base.host().play_effect(self.base.handle());
    }

    pub fn stop(&self) {
        self.base.host().stop_effect(self.base.handle());
    }

    pub fn set_parameter(&self, name: &str, value: f32) {
        self.base
            .host()
            .set_effect_parameter(self.base.handle(), name, value);
    }
}

// Sfx

pub struct Sfx {
    base: EntityBase,
}

impl Sfx {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Sfx, host),
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

    pub fn play(&self) {
        self.base.host().play_effect(self.base.handle());
    }

    pub fn stop(&self) {
        self.base.host().stop_effect(self.base.handle());
    }

    pub fn set_parameter(&self, name: &str, value: f32) {
        self.base
            .host()
            .set_effect_parameter(self.base.handle(), name, value);
    }
}

// GenericEntity

/// Resolver fallback for handles matching no capability probe: identity
/// and transform only, so dispatch over unknown entity kinds never fails.
pub struct GenericEntity {
    base: EntityBase,
}

impl GenericEntity {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::Unknown, host),
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

    pub fn on_going(&self) -> &EventChannel<GoingEvent> {
        self.base.on_going()
    }

    pub(crate) fn base(&self) -> &EntityBase {
        &self.base
    }
}
