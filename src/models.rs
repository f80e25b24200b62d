// src/models.rs
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
}

impl GenerationConfig {
    /// Shortest accepted password length.
    pub const MIN_LENGTH: usize = 12;
    /// Longest accepted password length.
    pub const MAX_LENGTH: usize = 32;

    /// True if at least one character class is enabled.
    pub fn any_class_enabled(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_special
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_special: true,
        }
    }
}

// A password the user chose to keep, as stored in the saved-passwords file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEntry {
    pub id: Uuid,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl SavedEntry {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_everything() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 16);
        assert!(config.any_class_enabled());
        assert!(config.include_uppercase);
        assert!(config.include_lowercase);
        assert!(config.include_numbers);
        assert!(config.include_special);
    }

    #[test]
    fn any_class_enabled_is_false_when_all_flags_off() {
        let config = GenerationConfig {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_special: false,
            ..GenerationConfig::default()
        };
        assert!(!config.any_class_enabled());
    }
}
