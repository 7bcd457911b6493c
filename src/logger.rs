use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, MAX_LOG_LINES};
use anyhow::{Context, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Set once the `fern` file dispatcher has been installed for this process
static FILE_DISPATCH: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application.
///
/// Lines are kept in memory for the logs dialog and forwarded to the `log` facade,
/// which writes them to disk when file logging is enabled.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            enabled: false,
        }
    }

    /// Create a logger, installing the file dispatcher when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::init_file_dispatch()?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            enabled,
        })
    }

    fn init_file_dispatch() -> Result<()> {
        FILE_DISPATCH.get_or_try_init(|| -> Result<PathBuf> {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Info)
                .chain(
                    fern::log_file(&path)
                        .with_context(|| format!("Failed to open log file: {}", path.display()))?,
                )
                .apply()
                .context("Failed to install log dispatcher")?;

            Ok(path)
        })?;
        Ok(())
    }

    /// Path of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::config_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this process writes log lines to a file
    pub fn has_file_writer(&self) -> bool {
        self.enabled && FILE_DISPATCH.get().is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_LINES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
