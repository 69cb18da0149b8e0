//! Configuration loading and validation for the cipher service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any value is present but invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the JSON key file holding the PEM key pair.
    #[serde(default = "default_keys_file")]
    pub keys_file: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_keys_file() -> String {
    "keys.json".into()
}
fn default_port() -> u16 {
    8000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.keys_file.trim().is_empty() {
            anyhow::bail!("KEYS_FILE must not be empty");
        }
        if self.port == 0 {
            anyhow::bail!("PORT must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_keys_file(), "keys.json");
        assert_eq!(default_port(), 8000);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_keys_file() {
        let cfg = Config {
            keys_file: "  ".into(),
            port: default_port(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let cfg = Config {
            keys_file: default_keys_file(),
            port: 0,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            keys_file: default_keys_file(),
            port: default_port(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
