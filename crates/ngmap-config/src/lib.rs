//! # ngmap-config
//!
//! Layered configuration loading for ngmap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NGMAP_*` prefix, `__` as separator)
//! 2. Project-level `.ngmap/config.toml`, or the file passed with `--config`
//! 3. User-level `~/.config/ngmap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NGMAP_SCAN__SKIP_TESTS` -> `scan.skip_tests`,
//! `NGMAP_EXTRACT__ROUTE_SCOPE` -> `extract.route_scope`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ngmap_config::NgmapConfig;
//!
//! let config = NgmapConfig::load().expect("config");
//! if config.batch.fail_fast {
//!     println!("stopping on the first unreadable file");
//! }
//! ```

mod batch;
mod error;
mod extract;
mod scan;

pub use batch::BatchConfig;
pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use scan::ScanConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".ngmap/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NgmapConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl NgmapConfig {
    /// Load configuration from all default sources.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, using `explicit` instead of `.ngmap/config.toml`
    /// when given.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] if `explicit` does not exist, and
    /// any parse or validation error otherwise.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config, or the explicit file
        let local_path = explicit.map_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("NGMAP_").split("__"))
    }

    /// Reject values extraction cannot work with.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extract.max_html_depth == 0 {
            return Err(invalid("extract.max_html_depth", "must be at least 1"));
        }
        if self.scan.source_extensions.is_empty() {
            return Err(invalid("scan.source_extensions", "must not be empty"));
        }
        if let Some(ext) = self
            .scan
            .source_extensions
            .iter()
            .chain(&self.scan.html_extensions)
            .find(|ext| ext.starts_with('.'))
        {
            return Err(invalid(
                "scan.extensions",
                &format!("'{ext}' must be given without the leading dot"),
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ngmap").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
