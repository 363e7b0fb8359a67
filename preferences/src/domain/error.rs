use preferences_sdk::PreferencesError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Preference owned by '{owner}' submitted by acting user '{user_id}'")]
    Forbidden { user_id: String, owner: String },

    #[error("No preferences in category '{category}'")]
    CategoryNotFound { category: String },

    #[error("Preference '{category}/{name}' not found")]
    PreferenceNotFound { category: String, name: String },

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Preference storage failure: {message}")]
    Storage { message: String },

    #[error("Sidebar synchronization failed: {message}")]
    SidebarSync { message: String },
}

impl DomainError {
    pub fn forbidden(user_id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::Forbidden {
            user_id: user_id.into(),
            owner: owner.into(),
        }
    }

    pub fn category_not_found(category: impl Into<String>) -> Self {
        Self::CategoryNotFound {
            category: category.into(),
        }
    }

    pub fn preference_not_found(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self::PreferenceNotFound {
            category: category.into(),
            name: name.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn sidebar_sync(message: impl Into<String>) -> Self {
        Self::SidebarSync {
            message: message.into(),
        }
    }
}

impl From<DomainError> for PreferencesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Forbidden { .. } => Self::forbidden(),
            DomainError::CategoryNotFound { .. } | DomainError::PreferenceNotFound { .. } => {
                Self::not_found()
            }
            DomainError::Validation { field, message } => Self::validation(field, message),
            DomainError::Storage { message } => Self::storage(message),
            DomainError::SidebarSync { .. } => Self::internal(),
        }
    }
}
