//! Fixtures shared by the UI tests.

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use extensions_dashlet::host::{ExtensionHost, HostError};
use extensions_dashlet::model::{
    DashletInputs, EndorseDecision, ExtensionDescriptor, InstalledExtension, ModId,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Mutex;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn extension(mod_id: ModId, name: &str, author: &str, timestamp: i64) -> ExtensionDescriptor {
    ExtensionDescriptor {
        mod_id: Some(mod_id),
        name: name.to_string(),
        author: author.to_string(),
        timestamp: Some(timestamp),
        version: Some("1.0".to_string()),
        ..Default::default()
    }
}

/// One installed extension by bob waiting for alice's decision, plus two new ones
pub fn endorse_inputs() -> DashletInputs {
    DashletInputs {
        catalog: vec![
            extension(5, "Ext A", "bob", 100),
            extension(6, "Newest", "carol", 300),
            extension(7, "Older", "dave", 200),
        ],
        installed: [(
            "extA",
            InstalledExtension {
                mod_id: Some(5),
                version: "1.0".to_string(),
            },
        )]
        .into_iter()
        .collect(),
        user: Some("alice".to_string()),
        ..Default::default()
    }
}

/// Nothing to endorse, two new extensions
pub fn news_inputs() -> DashletInputs {
    DashletInputs {
        catalog: vec![extension(1, "Older", "bob", 100), extension(2, "Newer", "carol", 200)],
        user: Some("alice".to_string()),
        ..Default::default()
    }
}

/// Draw with `draw` on a test terminal and return the screen as lines
pub fn render_lines(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_lines(terminal.backend().buffer())
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

/// Host double answering with canned results and recording every command
pub struct MockHost {
    pub install_result: Result<(), HostError>,
    pub endorse_result: Result<Vec<String>, HostError>,
    pub calls: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn new(install_result: Result<(), HostError>, endorse_result: Result<Vec<String>, HostError>) -> Self {
        Self {
            install_result,
            endorse_result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExtensionHost for MockHost {
    async fn install_extension(&self, extension: ExtensionDescriptor) -> Result<(), HostError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("install-extension {:?}", extension.mod_id));
        self.install_result.clone()
    }

    async fn endorse_nexus_mod(
        &self,
        domain: &str,
        mod_id: ModId,
        version: &str,
        decision: EndorseDecision,
    ) -> Result<Vec<String>, HostError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("endorse-nexus-mod {} {} {} {}", domain, mod_id, version, decision));
        self.endorse_result.clone()
    }
}
