// Configuration loaded from YAML, overridable from the command line

use crate::id::IdScheme;
use crate::screen::Screen;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "taskmanager";
const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Screen shown when the shell starts
    pub start_screen: Screen,
    /// Id generator for new tasks
    pub id_scheme: IdScheme,
    /// ANSI styling in rendered output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_screen: Screen::Login,
            id_scheme: IdScheme::Sequential,
            color: true,
        }
    }
}

impl Config {
    /// Default config location: `<config dir>/taskmanager/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from an explicit path, or the default path if `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(Self::default_path()),
        }
    }

    /// Load config from the default location
    ///
    /// A missing file yields defaults, and an unreadable one is logged and
    /// ignored.
    fn load_default(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = ?path, error = ?e, "Ignoring unreadable config file");
                Ok(Self::default())
            }
        }
    }

    /// Parse a YAML config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        Ok(config)
    }
}
