//! Modal dialogs: the shell's generic error surface, help and logs.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = "\
Navigation
  ↑/k          Previous extension
  ↓/j          Next extension

News mode
  Enter/i      Install the selected extension

Endorse mode
  e            Endorse the selected extension
  a            Abstain from endorsing it
  n            Not now, show new extensions instead

General
  G            Show logs
  ?            Toggle this help
  Esc          Close dialog / dismiss notification
  q, Ctrl+C    Quit";

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::default(),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    fn content(&self) -> Option<(String, String, Color)> {
        match self.dialog_type.as_ref()? {
            DialogType::Error(message) => Some(("❌ Error".to_string(), message.clone(), Color::Red)),
            DialogType::Help => Some((DIALOG_TITLE_HELP.to_string(), HELP_TEXT.to_string(), Color::Cyan)),
            DialogType::Logs => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                let body = if logs.is_empty() {
                    "No log entries yet".to_string()
                } else {
                    logs.join("\n")
                };
                Some((DIALOG_TITLE_LOGS.to_string(), body, Color::White))
            }
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.dialog_type.is_none() {
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => {
                Action::HideDialog
            }
            _ => match self.dialog_type {
                // Any other key dismisses an error
                Some(DialogType::Error(_)) => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::default();
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some((title, body, color)) = self.content() else {
            return;
        };

        let dialog_area = LayoutManager::dialog(70, 60, rect);
        f.render_widget(Clear, dialog_area);

        let lines: Vec<&str> = body.lines().collect();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(body.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, dialog_area);

        if lines.len() > visible_height {
            self.scrollbar_state = self
                .scrollbar_state
                .content_length(lines.len())
                .viewport_content_length(visible_height)
                .position(self.scroll_offset);

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .style(Style::default().fg(Color::Gray));
            f.render_stateful_widget(scrollbar, dialog_area, &mut self.scrollbar_state);
        }
    }
}
