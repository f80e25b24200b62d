// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::GenerationConfig;

// Application configuration, environment-driven
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation defaults
    pub default_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_lowercase: bool,
    pub default_include_numbers: bool,
    pub default_include_special: bool,

    // Saved passwords
    pub saved_path: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_length: 16,
            default_include_uppercase: true,
            default_include_lowercase: true,
            default_include_numbers: true,
            default_include_special: true,
            saved_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(length) = env::var("PHRASEFORGE_LENGTH") {
            config.default_length = length
                .parse()
                .unwrap_or(config.default_length)
                .clamp(GenerationConfig::MIN_LENGTH, GenerationConfig::MAX_LENGTH);
        }

        if let Ok(v) = env::var("PHRASEFORGE_UPPERCASE") {
            config.default_include_uppercase = v.parse().unwrap_or(config.default_include_uppercase);
        }
        if let Ok(v) = env::var("PHRASEFORGE_LOWERCASE") {
            config.default_include_lowercase = v.parse().unwrap_or(config.default_include_lowercase);
        }
        if let Ok(v) = env::var("PHRASEFORGE_NUMBERS") {
            config.default_include_numbers = v.parse().unwrap_or(config.default_include_numbers);
        }
        if let Ok(v) = env::var("PHRASEFORGE_SPECIAL") {
            config.default_include_special = v.parse().unwrap_or(config.default_include_special);
        }

        if let Ok(path) = env::var("PHRASEFORGE_SAVED_PATH") {
            if !path.trim().is_empty() {
                config.saved_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(level) = env::var("PHRASEFORGE_LOG") {
            config.log_level = level.parse().unwrap_or(config.log_level);
        }

        config
    }

    /// Generation options seeded from the configured defaults.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_length,
            include_uppercase: self.default_include_uppercase,
            include_lowercase: self.default_include_lowercase,
            include_numbers: self.default_include_numbers,
            include_special: self.default_include_special,
        }
    }
}
