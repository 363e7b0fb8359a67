use async_trait::async_trait;
use preferences_sdk::models::Preference;

/// Durable preference store, keyed by `(user_id, category, name)`.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    async fn get_all(&self, user_id: &str) -> anyhow::Result<Vec<Preference>>;

    async fn get_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> anyhow::Result<Vec<Preference>>;

    async fn get(
        &self,
        user_id: &str,
        category: &str,
        name: &str,
    ) -> anyhow::Result<Option<Preference>>;

    /// Upsert every record in the batch. The backend applies the batch
    /// atomically or not at all.
    async fn save(&self, preferences: &[Preference]) -> anyhow::Result<()>;

    /// Remove a single record. Deleting an absent record is not an error.
    async fn delete(&self, user_id: &str, category: &str, name: &str) -> anyhow::Result<()>;
}
