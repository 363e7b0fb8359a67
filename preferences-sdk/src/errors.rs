//! Error types for the preferences SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PreferencesError {
    /// A record in the batch is owned by a different user than the caller.
    #[error("Preference batch contains records owned by another user")]
    Forbidden,

    /// The requested preference or category does not exist. An empty category
    /// is reported as not found, never as an empty success.
    #[error("Preferences not found")]
    NotFound,

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The preference store rejected or failed the operation. Addressable by
    /// the caller (bad request class), distinct from [`Self::Internal`].
    #[error("Preference storage failure: {message}")]
    Storage { message: String },

    /// Server-side inconsistency: preferences were persisted but the derived
    /// sidebar state could not be updated.
    #[error("Internal error")]
    Internal,
}

impl PreferencesError {
    #[must_use]
    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
