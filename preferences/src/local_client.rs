use async_trait::async_trait;
use preferences_sdk::{Preference, Preferences, PreferencesApi, PreferencesError};
use std::sync::Arc;

use crate::domain::service::Service;

/// In-process adapter exposing the domain service through the SDK contract.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PreferencesApi for LocalClient {
    async fn get_preferences(&self, user_id: &str) -> Result<Preferences, PreferencesError> {
        self.service.get_preferences(user_id).await.map_err(Into::into)
    }

    async fn get_preferences_by_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> Result<Preferences, PreferencesError> {
        self.service
            .get_preferences_by_category(user_id, category)
            .await
            .map_err(Into::into)
    }

    async fn get_preference(
        &self,
        user_id: &str,
        category: &str,
        name: &str,
    ) -> Result<Preference, PreferencesError> {
        self.service
            .get_preference(user_id, category, name)
            .await
            .map_err(Into::into)
    }

    async fn update_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), PreferencesError> {
        self.service
            .update_preferences(user_id, preferences)
            .await
            .map_err(Into::into)
    }

    async fn delete_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), PreferencesError> {
        self.service
            .delete_preferences(user_id, preferences)
            .await
            .map_err(Into::into)
    }
}
