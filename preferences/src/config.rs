use serde::Deserialize;

/// Field limits applied to preference records before persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_max_category_length")]
    pub max_category_length: usize,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            max_category_length: default_max_category_length(),
            max_name_length: default_max_name_length(),
            max_value_length: default_max_value_length(),
        }
    }
}

fn default_max_category_length() -> usize {
    32
}

fn default_max_name_length() -> usize {
    32
}

fn default_max_value_length() -> usize {
    2000
}
