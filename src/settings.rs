//! Ambient settings with environment variable support and validation.
//!
//! These are host-level knobs (where result trees live, how logs are
//! formatted), distinct from the per-run [`crate::config::ExperimentConfig`].

use anyhow::{anyhow, Result};
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Ambient launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base directory under which `results/<agent>/<env>/<ts>` trees are derived.
    pub project_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from embedded defaults, an optional local
    /// `rl-launcher.toml`, and `RLX__`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name("rl-launcher").required(false))
            .add_source(
                Environment::with_prefix("RLX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.project_dir.as_os_str().is_empty() {
            return Err(anyhow!("project_dir cannot be empty"));
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => return Err(anyhow!("Unknown logging format '{}'", other)),
        }

        if self.logging.level.is_empty() {
            return Err(anyhow!("Logging level cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn empty_project_dir_is_rejected() {
        let mut settings = Settings::default();
        settings.project_dir = PathBuf::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn embedded_defaults_deserialize() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let settings: Settings = config.try_deserialize().unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.logging.level, "info");
    }
}
