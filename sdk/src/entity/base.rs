use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, Rotation, Vec3};

use crate::events::GoingEvent;

/// State every wrapper kind shares: the host link, the identity pair, and
/// the periodic channel. Embedded by value in each concrete wrapper.
pub(crate) struct EntityBase {
    id: EntityId,
    handle: HostHandle,
    kind: EntityKind,
    host: Rc<dyn Host>,
    on_going: EventChannel<GoingEvent>,
}

impl EntityBase {
    pub(crate) fn new(id: EntityId, handle: HostHandle, kind: EntityKind, host: Rc<dyn Host>) -> Self {
        Self {
            id,
            handle,
            kind,
            host,
            on_going: EventChannel::new(),
        }
    }

    pub(crate) fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn handle(&self) -> HostHandle {
        self.handle
    }

    pub(crate) fn kind(&self) -> EntityKind {
        self.kind
    }

    pub(crate) fn host(&self) -> &Rc<dyn Host> {
        &self.host
    }

    pub(crate) fn on_going(&self) -> &EventChannel<GoingEvent> {
        &self.on_going
    }

    pub(crate) fn position(&self) -> Vec3 {
        self.host.position_of(self.handle)
    }

    pub(crate) fn rotation(&self) -> Rotation {
        self.host.rotation_of(self.handle)
    }

    pub(crate) fn teleport(&self, position: Vec3) {
        self.host.set_position(self.handle, position);
    }

    pub(crate) fn set_rotation(&self, rotation: Rotation) {
        self.host.set_rotation(self.handle, rotation);
    }

    pub(crate) fn destroy(&self) {
        self.host.destroy(self.handle);
    }
}
