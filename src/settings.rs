//! Layered runtime settings.
//!
//! Values come from built-in defaults, then an optional config file, then
//! `HEALTHDASH_*` environment variables. Command-line flags are applied on
//! top by the binary.
//!
//! ```toml
//! default_window = "1 Week"
//! seed = 42
//!
//! [[devices]]
//! name = "Ring"
//! capabilities = ["sleep", "heartbeat"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::{Catalog, CatalogError, DeviceSpec, TimeWindow};

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "HEALTHDASH";

/// Dashboard settings after all layers are merged.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Window label for newly created charts.
    pub default_window: String,
    /// Seed for reproducible series.
    pub seed: Option<u64>,
    /// Event poll interval for the TUI loop, in milliseconds.
    pub refresh_ms: u64,
    /// Directory for log files. Logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// Replacement for the built-in device list.
    pub devices: Option<Vec<DeviceSpec>>,
}

impl Settings {
    /// Load settings from an optional file and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings with an explicit environment source.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("default_window", TimeWindow::default().label())?
            .set_default("refresh_ms", 100_i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(env.try_parsing(true))
            .build()
            .with_context(|| match path {
                Some(path) => format!("loading settings from {}", path.display()),
                None => "loading settings".to_string(),
            })?;

        Ok(config.try_deserialize()?)
    }

    /// Parsed default window.
    pub fn window(&self) -> Result<TimeWindow, CatalogError> {
        self.default_window.parse()
    }

    /// The configured device catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.devices {
            Some(specs) => Catalog::from_specs(specs.clone()),
            None => Ok(Catalog::builtin()),
        }
    }
}
