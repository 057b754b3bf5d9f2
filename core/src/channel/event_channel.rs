use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{host::ErrorSink, key_generator::KeyGenerator};

use super::{
    error::HandlerError,
    subscription::{SlotList, Subscription, SubscriptionId},
};

pub type HandlerResult = Result<(), HandlerError>;

/// Subscriber callback. Handlers are compared by `Rc` identity: subscribing
/// the same `Rc` twice occupies a single slot.
pub type Handler<T> = Rc<dyn Fn(&T) -> HandlerResult>;

struct Slot<T> {
    id: SubscriptionId,
    handler: Handler<T>,
}

struct ChannelState<T> {
    slots: RefCell<Vec<Slot<T>>>,
    keys: RefCell<KeyGenerator>,
    // Host-side feature hook for channels bound to a toggle (e.g. world
    // interaction). Tracked by the `enabled` flag rather than subscriber
    // count so redundant host calls are never issued.
    toggle: Option<Box<dyn Fn(bool)>>,
    enabled: Cell<bool>,
}

impl<T> ChannelState<T> {
    fn sync_toggle(&self) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let wants_enabled = !self.slots.borrow().is_empty();
        if wants_enabled != self.enabled.get() {
            self.enabled.set(wants_enabled);
            toggle(wants_enabled);
        }
    }
}

impl<T: 'static> SlotList for ChannelState<T> {
    fn remove_slot(&self, id: SubscriptionId) {
        self.slots.borrow_mut().retain(|slot| slot.id != id);
        self.sync_toggle();
    }
}

/// Ordered, cancellable multi-subscriber dispatch list for one occurrence
/// kind on one entity (or one game-global occurrence).
///
/// Dispatch invokes the subscriber sequence as it exists at dispatch time,
/// in subscription order. A handler may cancel itself or a sibling during
/// dispatch without skipping or double-invoking anyone; such changes take
/// effect on the next dispatch. A failing handler is reported to the host
/// error sink and never disturbs its siblings or the dispatch caller.
pub struct EventChannel<T> {
    state: Rc<ChannelState<T>>,
}

impl<T: 'static> EventChannel<T> {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A channel whose first subscriber enables a host-side feature and
    /// whose last cancellation disables it again.
    pub fn with_toggle(toggle: impl Fn(bool) + 'static) -> Self {
        Self::build(Some(Box::new(toggle)))
    }

    fn build(toggle: Option<Box<dyn Fn(bool)>>) -> Self {
        Self {
            state: Rc::new(ChannelState {
                slots: RefCell::new(Vec::new()),
                keys: RefCell::new(KeyGenerator::new()),
                toggle,
                enabled: Cell::new(false),
            }),
        }
    }

    /// Appends `handler` unless that same `Rc` is already subscribed, in
    /// which case the existing slot is kept and the returned handle simply
    /// addresses it.
    pub fn subscribe(&self, handler: Handler<T>) -> Subscription {
        let state: Rc<dyn SlotList> = self.state.clone();
        let slot_list: Weak<dyn SlotList> = Rc::downgrade(&state);

        let mut slots = self.state.slots.borrow_mut();
        if let Some(existing) = slots
            .iter()
            .find(|slot| Rc::ptr_eq(&slot.handler, &handler))
        {
            return Subscription::new(slot_list, existing.id);
        }

        let id = self.state.keys.borrow_mut().generate();
        slots.push(Slot { id, handler });
        drop(slots);

        self.state.sync_toggle();
        Subscription::new(slot_list, id)
    }

    /// Convenience wrapper for closure subscribers.
    pub fn subscribe_fn(&self, handler: impl Fn(&T) -> HandlerResult + 'static) -> Subscription {
        self.subscribe(Rc::new(handler))
    }

    /// Removes `handler`'s slot if present; no-op otherwise.
    pub fn unsubscribe(&self, handler: &Handler<T>) {
        self.state
            .slots
            .borrow_mut()
            .retain(|slot| !Rc::ptr_eq(&slot.handler, handler));
        self.state.sync_toggle();
    }

    /// Synchronously invokes every currently-subscribed handler in
    /// subscription order. Never raises past its own boundary.
    pub fn dispatch(&self, event: &T, sink: &dyn ErrorSink) {
        let snapshot: Vec<Handler<T>> = self
            .state
            .slots
            .borrow()
            .iter()
            .map(|slot| slot.handler.clone())
            .collect();

        for handler in snapshot {
            if let Err(fault) = handler.as_ref()(event) {
                sink.report_error(&format!("event handler failed: {fault}"));
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.slots.borrow().len()
    }

    pub fn has_subscribers(&self) -> bool {
        !self.state.slots.borrow().is_empty()
    }
}

impl<T: 'static> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}
