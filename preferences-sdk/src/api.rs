//! `PreferencesApi` trait definition.
//!
//! This trait defines the public API for the preferences module. All methods
//! take the acting user's id; mutations verify that every record in the batch
//! belongs to that user before touching storage.

use async_trait::async_trait;

use crate::errors::PreferencesError;
use crate::models::{Preference, Preferences};

/// Public API trait for the preferences module.
#[async_trait]
pub trait PreferencesApi: Send + Sync {
    /// Get every preference stored for the user.
    async fn get_preferences(&self, user_id: &str) -> Result<Preferences, PreferencesError>;

    /// Get the user's preferences in one category.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::NotFound`] when the category holds no
    /// records; an empty category is indistinguishable from a missing one.
    async fn get_preferences_by_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> Result<Preferences, PreferencesError>;

    /// Get a single preference by category and name.
    async fn get_preference(
        &self,
        user_id: &str,
        category: &str,
        name: &str,
    ) -> Result<Preference, PreferencesError>;

    /// Upsert the batch, resync the sidebar projection and notify the user's
    /// live sessions. All-or-nothing at the store; best-effort notification.
    async fn update_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), PreferencesError>;

    /// Delete the batch record by record, then resync and notify.
    ///
    /// # Errors
    ///
    /// A failure mid-batch aborts immediately; records deleted before the
    /// failing one stay deleted.
    async fn delete_preferences(
        &self,
        user_id: &str,
        preferences: Preferences,
    ) -> Result<(), PreferencesError>;
}
