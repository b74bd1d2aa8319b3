//! Application configuration
//!
//! Loaded from TOML, then overridden from the environment:
//!
//! ```toml
//! log_level = "info"
//! initial_state = "fixtures/state.json"
//!
//! [tutorial]
//! skip_enabled = true
//! ```
//!
//! `SUMMIT_LOG` overrides `log_level`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

/// Environment variable overriding [`AppConfig::log_level`].
pub const LOG_ENV: &str = "SUMMIT_LOG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Tutorial presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TutorialConfig {
    /// Offer the skip button on non-final slides
    pub skip_enabled: bool,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self { skip_enabled: true }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Default log level for the subscriber
    pub log_level: String,
    /// JSON snapshot to start from instead of the empty state
    pub initial_state: Option<PathBuf>,
    /// Tutorial settings
    pub tutorial: TutorialConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            initial_state: None,
            tutorial: TutorialConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        let config: Self =
            toml::from_str(text).map_err(|e| AppError::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// Relative `initial_state` paths are resolved against the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(state), Some(dir)) = (config.initial_state.as_mut(), path.parent()) {
            if state.is_relative() {
                *state = dir.join(&*state);
            }
        }
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment overrides.
    pub fn merge_with_env(&mut self) -> Result<(), AppError> {
        self.merge_with(std::env::var(LOG_ENV).ok())
    }

    /// Apply an optional log level override, then re-validate.
    pub fn merge_with(&mut self, log_level: Option<String>) -> Result<(), AppError> {
        if let Some(level) = log_level {
            tracing::debug!(%level, "log level overridden");
            self.log_level = level;
        }
        self.validate()
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), AppError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::config(format!(
                "log_level must be one of {LOG_LEVELS:?} (got {:?})",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Build the first snapshot: the configured JSON file or the default state,
    /// with configuration applied on top.
    pub fn initial_state(&self) -> Result<AppState, AppError> {
        let mut state = match &self.initial_state {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
                AppState::from_json(&text)?
            }
            None => AppState::default(),
        };
        state.tutorial.skip_enabled = self.tutorial.skip_enabled;
        Ok(state)
    }
}
