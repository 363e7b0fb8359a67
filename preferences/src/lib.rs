//! Preferences Module Implementation
//!
//! The public API is defined in `preferences-sdk` and re-exported here.

pub use preferences_sdk::{Preference, Preferences, PreferencesApi, PreferencesError};

pub mod local_client;
pub use local_client::LocalClient;

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
