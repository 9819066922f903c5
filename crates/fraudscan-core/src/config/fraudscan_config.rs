//! Top-level fraudscan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, DetectionConfig, ObservabilityConfig};
use crate::category::Category;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FRAUDSCAN_*`)
/// 2. Explicit config file, or `fraudscan.toml` in the project root
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FraudScanConfig {
    pub detection: DetectionConfig,
    pub observability: ObservabilityConfig,
}

impl FraudScanConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` must exist when given. Without it, `root/fraudscan.toml` is
    /// used if present.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = root.join(defaults::DEFAULT_CONFIG_FILENAME);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(config: &mut FraudScanConfig) {
        if let Ok(val) = std::env::var(defaults::ENV_LOG_LEVEL) {
            config.observability.log_level = val.to_ascii_lowercase();
        }
        if let Ok(val) = std::env::var(defaults::ENV_ASCII_CASE_FOLD) {
            if let Ok(v) = val.parse::<bool>() {
                config.detection.ascii_case_fold = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &FraudScanConfig) -> Result<(), ConfigError> {
        for name in &config.detection.enabled_categories {
            if Category::from_str_name(name).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.enabled_categories".to_string(),
                    message: format!("unknown category '{name}'"),
                });
            }
        }
        if !defaults::LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}",
                    defaults::LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}
