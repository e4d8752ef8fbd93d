use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{ENV_PREFIX, LOCAL_CONFIG_PATH};
use crate::utils::StatbotError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Conversation behaviour
    #[serde(default)]
    pub chat: ChatConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

/// Conversation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Append the pressed button's label as a user message
    pub echo_selections: bool,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIConfig {
    /// Color theme ("dark" or "light")
    pub theme: String,
    /// Show the chart pane when a chart is available
    pub show_charts: bool,
    /// Show button ids next to labels in the button bar
    pub show_button_ids: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            show_charts: true,
            show_button_ids: false,
        }
    }
}

impl Config {
    /// Reject values the UI cannot honor
    pub fn validate(&self) -> std::result::Result<(), StatbotError> {
        match self.ui.theme.as_str() {
            "dark" | "light" => Ok(()),
            other => Err(StatbotError::ConfigError(format!(
                "unknown theme '{}', expected 'dark' or 'light'",
                other
            ))),
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    // Get config directories
    let config_dir = get_config_dir()?;
    let global_config = config_dir.join("config.toml");
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);

    // Build figment configuration
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    // Add global config if it exists
    if global_config.exists() {
        figment = figment.merge(Toml::file(&global_config));
    }

    // Add local config if it exists
    if local_config.exists() {
        figment = figment.merge(Toml::file(&local_config));
    }

    // Add environment variables (STATBOT_ prefix, STATBOT_UI__THEME style nesting)
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment
        .extract()
        .context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

/// Load a single explicit config file on top of the defaults
pub fn load_config_file(path: &Path) -> Result<Config> {
    // figment treats a missing file as empty; an explicit path must exist
    if !path.exists() {
        return Err(StatbotError::ConfigError(format!(
            "config file not found: {}",
            path.display()
        ))
        .into());
    }

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "statbot") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("statbot");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<PathBuf> {
    let config_file = get_config_dir()?.join("config.toml");

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.clone()))?;
    }

    Ok(config_file)
}
