use tokio::sync::broadcast;

use crate::domain::events::PreferenceEvent;
use crate::domain::ports::EventPublisher;

/// In-process fan-out of preference change events over a bounded broadcast
/// channel. Session transports subscribe and filter on
/// [`PreferenceEvent::user_id`] so only the acting user's live sessions see
/// the event.
///
/// `publish` never blocks and never fails from the caller's point of view:
/// with no live subscribers the event is dropped and logged at debug level.
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<PreferenceEvent>,
}

impl BroadcastEventPublisher {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceEvent> {
        self.tx.subscribe()
    }
}

impl EventPublisher for BroadcastEventPublisher {
    fn publish(&self, event: &PreferenceEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::debug!(
                kind = event.kind(),
                user_id = event.user_id(),
                "Dropping preference event with no live subscribers"
            );
        }
    }
}
