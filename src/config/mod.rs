//! Panel configuration.
//!
//! Project-level file: `.rover/config.yaml`, or whatever `--config` names.
//! Every field is optional; anything left out falls back to the defaults
//! (the stock readouts, a two-second toast, no log file).

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::panel::TelemetryReading;

pub use error::{ConfigError, ConfigResult};

/// Default project-level config location.
pub const DEFAULT_CONFIG_PATH: &str = ".rover/config.yaml";

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Initial readouts shown in the center region.
    pub telemetry: TelemetryReading,
    pub toast_duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// File this config was read from. `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            telemetry: TelemetryReading::default(),
            toast_duration_ms: DEFAULT_TOAST_MS,
            log_file: None,
            source: None,
        }
    }
}

impl PanelConfig {
    /// Load the config.
    ///
    /// An explicit path must exist. Without one, `.rover/config.yaml` is
    /// used if present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Parse a config file that must exist.
    pub fn load_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content, path)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(path)
    }

    fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        // An empty file deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
