//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable overriding the simulated submission delay.
pub const SUBMIT_DELAY_ENV: &str = "ONBOARDING_SUBMIT_DELAY_MS";

/// Environment variable pointing at a JSON directory file.
pub const DIRECTORY_PATH_ENV: &str = "ONBOARDING_DIRECTORY_PATH";

/// Wizard session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// How long the simulated submission waits before acknowledging.
    pub submit_delay: Duration,
    /// Optional directory file. The built-in reference table is used when unset.
    pub directory_path: Option<PathBuf>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_secs(2),
            directory_path: None,
        }
    }
}

impl WizardConfig {
    /// Build a config from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let submit_delay = match lookup(SUBMIT_DELAY_ENV) {
            Some(raw) => {
                let millis: u64 =
                    raw.trim()
                        .parse()
                        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                            key: SUBMIT_DELAY_ENV.to_string(),
                            message: e.to_string(),
                        })?;
                Duration::from_millis(millis)
            }
            None => defaults.submit_delay,
        };

        let directory_path = lookup(DIRECTORY_PATH_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            submit_delay,
            directory_path,
        })
    }
}
