//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Dashlet text
pub const DASHLET_TITLE: &str = "Extensions";
pub const ENDORSE_BANNER: &str = "Please endorse extensions you like";
pub const BUTTON_NOT_NOW: &str = "Not now";
pub const BUTTON_INSTALL: &str = "Install";
pub const BUTTON_ENDORSE: &str = "Endorse";
pub const BUTTON_ABSTAIN: &str = "Abstain";
pub const DEFAULT_EXTENSION_TYPE: &str = "extension";
pub const EMPTY_NEWS: &str = "No new extensions available";

// Success Messages
pub const SUCCESS_EXTENSION_INSTALLED: &str = "Extension installed, please restart Vortex to enable it";

// Error Messages
pub const ERROR_INSTALL_FAILED: &str = "❌ Failed to install extension";

// Dialog titles
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const APP_DIR_NAME: &str = "extensions-dashlet";
pub const CONFIG_FILE_NAME: &str = "extensions-dashlet.toml";
pub const CONFIG_ENV_VAR: &str = "EXT_DASHLET_CONFIG";
pub const LOG_FILE_NAME: &str = "dashlet.log";

/// How many new extensions the news feed shows at most
pub const NUM_DISPLAY_ITEMS: usize = 5;
/// Upper bound accepted for `ui.num_display_items`
pub const MAX_DISPLAY_ITEMS: usize = 50;

/// Auto-dismiss delay of the "installed" notification
pub const NOTIFICATION_DISPLAY_MS: u64 = 2000;
pub const MAX_NOTIFICATION_DISPLAY_MS: u64 = 60_000;

/// Simulated latency of the local host commands
pub const DEFAULT_COMMAND_LATENCY_MS: u64 = 300;
pub const MAX_COMMAND_LATENCY_MS: u64 = 30_000;

// Remote repository
pub const NEXUS_SITE_MODS_URL: &str = "https://www.nexusmods.com/site/mods";
/// Game domain extensions are published under
pub const ENDORSE_DOMAIN: &str = "site";

/// Endorsement label of an extension nobody has decided on yet
pub const ENDORSED_UNDECIDED: &str = "Undecided";

/// In-memory log lines kept for the logs dialog
pub const MAX_LOG_LINES: usize = 1000;
