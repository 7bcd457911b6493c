//! Configuration management for the extensions dashlet
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_COMMAND_LATENCY_MS, MAX_COMMAND_LATENCY_MS,
    MAX_DISPLAY_ITEMS, MAX_NOTIFICATION_DISPLAY_MS, NOTIFICATION_DISPLAY_MS, NUM_DISPLAY_ITEMS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub host: HostConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Maximum number of new extensions listed in news mode
    pub num_display_items: usize,
    /// How long success notifications stay on screen, in milliseconds
    pub notification_display_ms: u64,
    /// Show the image URL line on each row
    pub show_image_urls: bool,
}

/// Local host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// JSON state snapshot to load. The bundled sample is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
    /// Simulated round trip of the install/endorse commands
    pub command_latency_ms: u64,
    /// Make every endorse command fail
    pub fail_endorse: bool,
    /// Make every install command fail
    pub fail_install: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            num_display_items: NUM_DISPLAY_ITEMS,
            notification_display_ms: NOTIFICATION_DISPLAY_MS,
            show_image_urls: true,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            command_latency_ms: DEFAULT_COMMAND_LATENCY_MS,
            fail_endorse: false,
            fail_install: false,
        }
    }
}

impl Config {
    /// Load the first config file found, or defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Places a config file is looked up, highest precedence first
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Ok(path) = Self::get_default_config_path() {
            paths.push(path);
        }
        paths
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::candidate_paths().into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.num_display_items == 0 || self.ui.num_display_items > MAX_DISPLAY_ITEMS {
            anyhow::bail!(
                "num_display_items must be between 1 and {}, got {}",
                MAX_DISPLAY_ITEMS,
                self.ui.num_display_items
            );
        }

        if self.ui.notification_display_ms > MAX_NOTIFICATION_DISPLAY_MS {
            anyhow::bail!(
                "notification_display_ms cannot exceed {} ms, got {}",
                MAX_NOTIFICATION_DISPLAY_MS,
                self.ui.notification_display_ms
            );
        }

        if self.host.command_latency_ms > MAX_COMMAND_LATENCY_MS {
            anyhow::bail!(
                "command_latency_ms cannot exceed {} ms, got {}",
                MAX_COMMAND_LATENCY_MS,
                self.host.command_latency_ms
            );
        }

        if let Some(state_file) = &self.host.state_file {
            if state_file.as_os_str().is_empty() {
                anyhow::bail!("state_file cannot be empty");
            }
        }

        Ok(())
    }

    /// Default configuration as TOML, with a header pointing at the optional keys
    pub fn default_config_toml() -> Result<String> {
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;

        Ok(format!(
            "# Extensions Dashlet Configuration File\n\
             # Generated on {}\n\
             #\n\
             # [host] state_file = \"/path/to/state.json\" loads a host state snapshot\n\
             # instead of the bundled sample.\n\n{}",
            chrono::Local::now().format("%Y-%m-%d"),
            body
        ))
    }

    /// Write the default configuration to `path`. An existing file is left alone.
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(path, Self::default_config_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
