use std::path::PathBuf;

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to create config directory: {0}")]
    CreateDirectory(std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

/// Colors for the four passage regions
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Theme {
    pub correct: Color,
    pub incorrect: Color,
    /// The character under the cursor. Also rendered underlined.
    pub current: Color,
    pub pending: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            correct: Color::Green,
            incorrect: Color::Red,
            current: Color::Yellow,
            pending: Color::Yellow,
        }
    }
}

impl Config {
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Grab default configuration
        let mut config = Figment::from(Serialized::defaults(Self::default()));

        // Check for toml file location
        let config_dir = override_path
            .or_else(|| {
                ProjectDirs::from("com", "Overtype", "Overtype")
                    .map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(ConfigError::NoDirectory)?;

        // Ensure path exists
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }

        let settings_toml = config_dir.join("settings.toml");

        if settings_toml.exists() {
            config = config.merge(Toml::file(settings_toml));
        }

        config
            .extract()
            .map_err(|error| ConfigError::Parse(Box::new(error)))
    }
}
