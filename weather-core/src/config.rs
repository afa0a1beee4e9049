use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{WeatherError, model::ApiKey};

/// Environment variable checked first for the API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Per-user key file in the home directory; holds the raw key and nothing else.
pub const CONFIG_FILE_NAME: &str = ".weather_config";

/// Where the resolved key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    ConfigFile(PathBuf),
}

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    api_key: Option<(ApiKey, KeySource)>,
}

impl Config {
    /// Resolve the key from the process environment, then the home-directory file.
    pub fn load() -> Self {
        let env_value = std::env::var(API_KEY_ENV).ok();
        let path = match Self::config_file_path() {
            Ok(path) => Some(path),
            Err(err) => {
                warn!("{err:#}");
                None
            }
        };

        Self::load_from(env_value.as_deref(), path.as_deref())
    }

    /// Resolution with explicit inputs. The first non-blank value wins.
    pub fn load_from(env_value: Option<&str>, config_file: Option<&Path>) -> Self {
        if let Some(key) = env_value.and_then(ApiKey::parse) {
            debug!(source = API_KEY_ENV, "using API key from environment");
            return Self { api_key: Some((key, KeySource::Environment)) };
        }

        let Some(path) = config_file else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let api_key = ApiKey::parse(&contents)
                    .map(|key| (key, KeySource::ConfigFile(path.to_path_buf())));
                if api_key.is_some() {
                    debug!(path = %path.display(), "using API key from config file");
                }
                Self { api_key }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read config file, ignoring it");
                Self::default()
            }
        }
    }

    pub fn api_key(&self) -> Result<&ApiKey, WeatherError> {
        self.api_key.as_ref().map(|(key, _)| key).ok_or(WeatherError::MissingApiKey)
    }

    pub fn key_source(&self) -> Option<&KeySource> {
        self.api_key.as_ref().map(|(_, source)| source)
    }

    /// Write the key to the home-directory file, replacing any previous key.
    pub fn save_api_key(key: &ApiKey) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        Self::save_api_key_to(key, &path)?;
        Ok(path)
    }

    pub fn save_api_key_to(key: &ApiKey, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, format!("{}\n", key.as_str()))
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the key file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(dirs.home_dir().join(CONFIG_FILE_NAME))
    }
}
