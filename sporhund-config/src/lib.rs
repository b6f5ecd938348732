//! # Sporhund Configuration System
//!
//! Hierarchical configuration management for the Sporhund profiling
//! substrate.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth across all components
//! - **Validation**: Runtime validation of critical parameters on load
//! - **Environment Awareness**: File and environment-variable overlays

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod core;
mod error;
mod telemetry;
mod validation;

pub use core::CoreConfig;
pub use core::MemoryConfig;
pub use error::ConfigError;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all Sporhund components.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct SporhundConfig {
    /// Core substrate configuration (counter table, arena memory).
    #[validate(nested)]
    pub core: CoreConfig,

    /// Logging and metrics configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl SporhundConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/sporhund.yaml` - Base settings. If missing, defaults are used.
    /// 3. `config/<environment>.yaml` - Environment-specific overrides.
    /// 4. `SPORHUND_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Start with defaults.
        let mut figment = Figment::from(Serialized::defaults(SporhundConfig::default()));

        if Path::new("config/sporhund.yaml").exists() {
            figment = figment.merge(Yaml::file("config/sporhund.yaml"));
        }

        let env = std::env::var("SPORHUND_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        figment
            .merge(Env::prefixed("SPORHUND_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(SporhundConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("SPORHUND_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
