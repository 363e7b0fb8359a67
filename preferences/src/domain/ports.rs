use async_trait::async_trait;
use preferences_sdk::models::Preference;

use crate::domain::events::PreferenceEvent;

/// Outbound change-notification port.
///
/// Publishing is fire-and-forget: implementations must not block the caller
/// and must swallow (at most log) delivery failures. The service never
/// observes a notification outcome.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: &PreferenceEvent);
}

/// Derived sidebar-state port. Recomputes and persists the channel groupings
/// implied by a preference batch; invoked only after the batch itself has been
/// persisted (or deleted).
#[async_trait]
pub trait SidebarSync: Send + Sync {
    async fn update_from_preferences(&self, preferences: &[Preference]) -> anyhow::Result<()>;

    async fn delete_from_preferences(&self, preferences: &[Preference]) -> anyhow::Result<()>;
}
