// Session configuration - tolerances and policy windows, TOML-backed

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::rules;

/// Tunable session parameters. Defaults match the product constants: a
/// 0.3 second seek tolerance and a 3 minute quick-save window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Range adjustments closer than this to the playback position skip the
    /// seek
    pub seek_tolerance_secs: f64,
    /// Length of the fixed library-save window
    pub quick_save_window_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seek_tolerance_secs: rules::SEEK_TOLERANCE_SECS,
            quick_save_window_secs: rules::QUICK_SAVE_WINDOW_SECS,
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DomainError::BadConfig {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "session config loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> DomainResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| DomainError::BadConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> DomainResult<()> {
        if !self.seek_tolerance_secs.is_finite() || self.seek_tolerance_secs < 0.0 {
            return Err(DomainError::BadConfig {
                message: format!(
                    "seek_tolerance_secs must be a non-negative number, got {}",
                    self.seek_tolerance_secs
                ),
            });
        }
        if !self.quick_save_window_secs.is_finite() || self.quick_save_window_secs <= 0.0 {
            return Err(DomainError::BadConfig {
                message: format!(
                    "quick_save_window_secs must be a positive number, got {}",
                    self.quick_save_window_secs
                ),
            });
        }
        Ok(())
    }
}
