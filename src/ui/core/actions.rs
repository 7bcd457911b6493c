use crate::dashlet::EndorseRequest;
use crate::model::ExtensionDescriptor;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextItem,
    PreviousItem,

    // Dashlet commands
    InstallExtension(Box<ExtensionDescriptor>),
    EndorseExtension(EndorseRequest),
    SkipEndorsing,

    // Store actions
    SetExtensionEndorsed {
        ext_id: String,
        endorsed: String,
    },

    // Command outcomes
    ExtensionInstalled(String),
    CommandFailed(String),

    // UI operations
    ShowNotification(Notification),
    DismissNotification,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Error(String),
    Help,
    Logs,
}

/// A transient message shown over the dashboard.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    /// Auto-dismiss delay
    pub display: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, display_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            display: Duration::from_millis(display_ms),
        }
    }
}
