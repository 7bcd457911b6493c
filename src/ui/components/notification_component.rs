//! Toast notifications shown over the dashboard.

use crate::ui::core::actions::Notification;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 4;

struct ActiveNotification {
    notification: Notification,
    shown_at: Instant,
}

/// Stack of notifications; the newest one is drawn.
#[derive(Default)]
pub struct NotificationComponent {
    active: Vec<ActiveNotification>,
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, shown_at: Instant) {
        self.active.push(ActiveNotification { notification, shown_at });
    }

    /// Drop notifications whose display time elapsed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active
            .retain(|active| now.saturating_duration_since(active.shown_at) < active.notification.display);
        before - self.active.len()
    }

    /// Dismiss the notification currently on screen
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.active.pop().map(|active| active.notification)
    }

    pub fn current(&self) -> Option<&Notification> {
        self.active.last().map(|active| &active.notification)
    }

    pub fn is_visible(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn render(&self, f: &mut Frame, rect: Rect) {
        let Some(notification) = self.current() else {
            return;
        };

        let area = LayoutManager::toast(TOAST_WIDTH, TOAST_HEIGHT, rect);
        f.render_widget(Clear, area);

        let paragraph = Paragraph::new(notification.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Success")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}
