use std::sync::Arc;

use preferences_sdk::models::{Preference, Preferences};

use super::error::DomainError;
use super::events::PreferenceEvent;
use super::ports::{EventPublisher, SidebarSync};
use super::repo::PreferencesRepository;
use crate::config::PreferencesConfig;

/// Preference orchestration: ownership validation, persistence, sidebar
/// projection maintenance and change notification, in that order.
///
/// Collaborator calls are sequential within the caller's task. Concurrent
/// invocations for the same user are not coordinated here; the last sidebar
/// sync wins.
pub struct Service {
    repo: Arc<dyn PreferencesRepository>,
    sidebar: Arc<dyn SidebarSync>,
    events: Arc<dyn EventPublisher>,
    config: PreferencesConfig,
}

impl Service {
    pub fn new(
        repo: Arc<dyn PreferencesRepository>,
        sidebar: Arc<dyn SidebarSync>,
        events: Arc<dyn EventPublisher>,
        config: PreferencesConfig,
    ) -> Self {
        Self {
            repo,
            sidebar,
            events,
            config,
        }
    }

    pub async fn get_preferences(&self, user_id: &str) -> Result<Preferences, DomainError> {
        tracing::debug!(user_id, "Getting all preferences");

        self.repo
            .get_all(user_id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))
    }

    pub async fn get_preferences_by_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> Result<Preferences, DomainError> {
        tracing::debug!(user_id, category, "Getting preferences by category");

        let preferences = self
            .repo
            .get_category(user_id, category)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        // An empty category is indistinguishable from a missing one and is
        // reported as not found, never as an empty success.
        if preferences.is_empty() {
            return Err(DomainError::category_not_found(category));
        }

        Ok(preferences)
    }

    pub async fn get_preference(
        &self,
        user_id: &str,
        category: &str,
        name: &str,
    ) -> Result<Preference, DomainError> {
        tracing::debug!(user_id, category, name, "Getting preference");

        self.repo
            .get(user_id, category, name)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::preference_not_found(category, name))
    }

    /// Upsert the batch, resync the sidebar projection and notify the user's
    /// live sessions.
    ///
    /// A sidebar-sync failure after a successful save is terminal: the batch
    /// stays persisted, the projection is stale and no notification is sent.
    /// Nothing here reconciles that window automatically.
    pub async fn update_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), DomainError> {
        tracing::debug!(user_id, count = preferences.len(), "Updating preferences");

        self.validate_ownership(user_id, &preferences)?;
        for preference in &preferences {
            self.validate_fields(preference)?;
        }

        self.repo
            .save(&preferences)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        if let Err(e) = self.sidebar.update_from_preferences(&preferences).await {
            tracing::error!(user_id, error = %e, "Sidebar sync failed after preference save");
            return Err(DomainError::sidebar_sync(e.to_string()));
        }

        self.notify(user_id, &preferences, false);
        Ok(())
    }

    /// Delete the batch record by record, then resync and notify.
    ///
    /// The per-record loop aborts on the first failure; records already
    /// deleted stay deleted. No compensating rollback.
    pub async fn delete_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), DomainError> {
        tracing::debug!(user_id, count = preferences.len(), "Deleting preferences");

        self.validate_ownership(user_id, &preferences)?;

        for preference in &preferences {
            self.repo
                .delete(user_id, &preference.category, &preference.name)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?;
        }

        if let Err(e) = self.sidebar.delete_from_preferences(&preferences).await {
            tracing::error!(user_id, error = %e, "Sidebar sync failed after preference delete");
            return Err(DomainError::sidebar_sync(e.to_string()));
        }

        self.notify(user_id, &preferences, true);
        Ok(())
    }

    fn validate_ownership(
        &self,
        user_id: &str,
        preferences: &[Preference],
    ) -> Result<(), DomainError> {
        for preference in preferences {
            if preference.user_id != user_id {
                return Err(DomainError::forbidden(user_id, preference.user_id.clone()));
            }
        }
        Ok(())
    }

    fn validate_fields(&self, preference: &Preference) -> Result<(), DomainError> {
        if preference.category.is_empty() {
            return Err(DomainError::validation("category", "must not be empty"));
        }
        if preference.category.len() > self.config.max_category_length {
            return Err(DomainError::validation(
                "category",
                format!(
                    "exceeds maximum length of {}",
                    self.config.max_category_length
                ),
            ));
        }
        if preference.name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        if preference.name.len() > self.config.max_name_length {
            return Err(DomainError::validation(
                "name",
                format!("exceeds maximum length of {}", self.config.max_name_length),
            ));
        }
        if preference.value.len() > self.config.max_value_length {
            return Err(DomainError::validation(
                "value",
                format!("exceeds maximum length of {}", self.config.max_value_length),
            ));
        }
        Ok(())
    }

    /// Coarse sidebar signal first, then the detailed batch event. Publishing
    /// is fire-and-forget; outcomes are never observed here.
    fn notify(&self, user_id: &str, preferences: &[Preference], deleted: bool) {
        self.events.publish(&PreferenceEvent::SidebarCategoriesUpdated {
            user_id: user_id.to_owned(),
        });

        let payload = serde_json::to_string(preferences).unwrap_or_default();
        let detailed = if deleted {
            PreferenceEvent::PreferencesDeleted {
                user_id: user_id.to_owned(),
                preferences: payload,
            }
        } else {
            PreferenceEvent::PreferencesChanged {
                user_id: user_id.to_owned(),
                preferences: payload,
            }
        };
        self.events.publish(&detailed);
    }
}
