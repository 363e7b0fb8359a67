//! Public models for the preferences module.
//!
//! Transport-agnostic data structures that define the contract between the
//! preferences module and its consumers. The serde encoding of these types is
//! also the wire encoding of change-event payloads.

use serde::{Deserialize, Serialize};

/// Category for per-channel favorite markers; preference name is the channel
/// id, value is `"true"` or `"false"`.
pub const CATEGORY_FAVORITE_CHANNEL: &str = "favorite_channel";
/// Category for display options (theme, clock format, ...).
pub const CATEGORY_DISPLAY_SETTINGS: &str = "display_settings";
/// Category for sidebar layout options.
pub const CATEGORY_SIDEBAR_SETTINGS: &str = "sidebar_settings";
/// Category for onboarding progress markers.
pub const CATEGORY_TUTORIAL_STEP: &str = "tutorial_step";

/// A single user preference record.
///
/// Identified by the `(user_id, category, name)` triple; the value is an
/// opaque string whose meaning is owned by the consumer that wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    pub user_id: String,
    pub category: String,
    pub name: String,
    pub value: String,
}

/// An ordered batch of preference records submitted together for save or
/// delete. Every record in a batch must belong to the acting user.
pub type Preferences = Vec<Preference>;

impl Preference {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            category: category.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}
