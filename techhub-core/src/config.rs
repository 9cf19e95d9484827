//! Global techhub configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};
use crate::user::DEFAULT_CATEGORY;

static DEFAULT_DATA_FILE: &str = "./data/TechEventsApp.json";
static ENV_PREFIX: &str = "TECHHUB";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Configuration at ~/.config/techhub/config.toml
///
/// Any key can also be set through a `TECHHUB_`-prefixed environment
/// variable, e.g. `TECHHUB_DATA_FILE`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HubConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Category for `register` when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        HubConfig {
            data_file: default_data_file(),
            default_category: default_category(),
        }
    }
}

impl HubConfig {
    pub fn config_path() -> HubResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HubError::Config("Could not determine config directory".into()))?
            .join("techhub");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// there is none.
    pub fn load() -> HubResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> HubResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// `path` overlaid with `env`.
    fn load_layered(path: &Path, env: Environment) -> HubResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to `path`.
    pub fn save_to(&self, path: &Path) -> HubResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| HubError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| HubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HubResult<()> {
        let contents = format!(
            "\
# techhub configuration

# Where events and users are saved:
# data_file = \"{}\"

# Category given to new users when none is specified:
# default_category = \"{}\"
",
            DEFAULT_DATA_FILE, DEFAULT_CATEGORY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HubError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HubError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
