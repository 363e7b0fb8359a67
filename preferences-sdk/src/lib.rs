//! Preferences SDK
//!
//! This crate provides the public API for the preferences module:
//! - [`PreferencesApi`] trait for inter-module communication
//! - Model types ([`Preference`], [`Preferences`])
//! - Error type ([`PreferencesError`])
//!
//! Consumers obtain a client from the module and call it directly:
//! ```ignore
//! let prefs = client.get_preferences_by_category("u1", "display_settings").await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::PreferencesApi;
pub use errors::PreferencesError;
pub use models::{Preference, Preferences};
