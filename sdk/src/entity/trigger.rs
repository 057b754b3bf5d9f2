use std::rc::Rc;

use frontline_core::{EntityId, EntityKind, EventChannel, Host, HostHandle, Vec3};

use crate::events::{GoingEvent, InteractEvent, TriggerEvent};

use super::base::EntityBase;

// AreaTrigger

pub struct AreaTrigger {
    base: EntityBase,
    on_entered: EventChannel<TriggerEvent>,
    on_exited: EventChannel<TriggerEvent>,
}

impl AreaTrigger {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        Self {
            base: EntityBase::new(id, handle, EntityKind::AreaTrigger, host),
            on_entered: EventChannel::new(),
            on_exited: EventChannel::new(),
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
            .set_trigger_enabled(self.base.handle(), enabled);
    }

    pub fn on_entered(&self) -> &EventChannel<TriggerEvent> {
        &self.on_entered
    }

    pub fn on_exited(&self) -> &EventChannel<TriggerEvent> {
        &self.on_exited
    }
}

// InteractPoint

/// World interaction prompt. Its channel is bound to the host-side
/// interaction toggle: the first subscriber enables the prompt, the last
/// cancellation disables it again.
pub struct InteractPoint {
    base: EntityBase,
    on_interact: EventChannel<InteractEvent>,
}

impl InteractPoint {
    pub(crate) fn new(id: EntityId, handle: HostHandle, host: Rc<dyn Host>) -> Self {
        let toggle_host = host.clone();
        Self {
            base: EntityBase::new(id, handle, EntityKind::InteractPoint, host),
            on_interact: EventChannel::with_toggle(move |enabled| {
                toggle_host.set_interaction_enabled(handle, enabled);
            }),
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

    pub fn set_prompt(&self, text: &str) {
        self.base
            .host()
            .set_interaction_prompt(self.base.handle(), text);
    }

    pub fn on_interact(&self) -> &EventChannel<InteractEvent> {
        &self.on_interact
    }
}
