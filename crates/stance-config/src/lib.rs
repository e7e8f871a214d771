//! # stance-config
//!
//! Layered configuration loading for Stance using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STANCE_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.stance/config.toml`
//! 4. User-level `~/.config/stance/config.toml`
//! 5. Built-in defaults
//!
//! `STANCE_ANALYSIS__STRICT=true` maps to `analysis.strict`,
//! `STANCE_OUTPUT__FORMAT=table` to `output.format`.
//!
//! ```no_run
//! use stance_config::StanceConfig;
//!
//! let config = StanceConfig::load_with_dotenv(None).expect("config");
//! if let Some(path) = config.rules.document_path() {
//!     println!("rules from {}", path.display());
//! }
//! ```

mod analysis;
mod error;
mod output;
mod rules;

pub use analysis::AnalysisConfig;
pub use error::ConfigError;
pub use output::{OUTPUT_FORMATS, OutputConfig};
pub use rules::RulesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "STANCE_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StanceConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl StanceConfig {
    /// Load configuration from the default TOML files and environment.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load `.env` first, then as [`Self::load_from`].
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// As [`Self::load_from`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(explicit)
    }

    /// Load configuration with an optional explicit file layered above the
    /// project file and below the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileNotFound` if `explicit` does not exist,
    /// otherwise as [`Self::load`].
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.filter(|p| !p.exists()) {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The default provider chain, without an explicit file.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".stance/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.output.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stance").join("config.toml"))
    }
}
