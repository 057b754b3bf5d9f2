use std::rc::Weak;

pub type SubscriptionId = u32;

/// Type-erased view of a channel's subscriber list, so a cancellation
/// handle does not need to know the channel's event payload type.
pub(crate) trait SlotList {
    fn remove_slot(&self, id: SubscriptionId);
}

/// Cancellation capability for one subscribed handler.
///
/// `cancel` removes that handler's slot and is idempotent; once the owning
/// channel is gone it degrades to a no-op. Dropping a `Subscription` does
/// NOT unsubscribe — the handler stays live until cancelled or removed.
pub struct Subscription {
    channel: Weak<dyn SlotList>,
    id: SubscriptionId,
}

impl Subscription {
    pub(crate) fn new(channel: Weak<dyn SlotList>, id: SubscriptionId) -> Self {
        Self { channel, id }
    }

    pub fn cancel(&self) {
        if let Some(channel) = self.channel.upgrade() {
            channel.remove_slot(self.id);
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}
