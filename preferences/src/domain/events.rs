use serde::Serialize;

/// Transport-agnostic change event, broadcast to the owning user's live
/// sessions after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PreferenceEvent {
    /// Coarse signal that sidebar groupings may have changed. Carries no
    /// category detail.
    SidebarCategoriesUpdated { user_id: String },
    /// A preference batch was saved; `preferences` is the JSON-encoded batch.
    PreferencesChanged {
        user_id: String,
        preferences: String,
    },
    /// A preference batch was deleted; `preferences` is the JSON-encoded batch.
    PreferencesDeleted {
        user_id: String,
        preferences: String,
    },
}

impl PreferenceEvent {
    /// Wire name of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SidebarCategoriesUpdated { .. } => "sidebar_category_updated",
            Self::PreferencesChanged { .. } => "preferences_changed",
            Self::PreferencesDeleted { .. } => "preferences_deleted",
        }
    }

    /// The user whose sessions should receive the event.
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::SidebarCategoriesUpdated { user_id }
            | Self::PreferencesChanged { user_id, .. }
            | Self::PreferencesDeleted { user_id, .. } => user_id,
        }
    }
}
