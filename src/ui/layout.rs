//! Screen areas of the dashboard

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Dashboard split: the dashlet fills the screen above a one-line key hint footer
#[derive(Debug, Clone, Copy)]
pub struct ShellAreas {
    pub body: Rect,
    pub footer: Rect,
}

/// Inside of the dashlet frame. `banner` and `controls` are empty in news mode.
#[derive(Debug, Clone, Copy)]
pub struct DashletAreas {
    pub banner: Rect,
    pub list: Rect,
    pub controls: Rect,
}

pub struct LayoutManager;

impl LayoutManager {
    #[must_use]
    pub fn shell(area: Rect) -> ShellAreas {
        let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        ShellAreas { body, footer }
    }

    #[must_use]
    pub fn dashlet(area: Rect, endorse_mode: bool) -> DashletAreas {
        let extra = u16::from(endorse_mode);
        let [banner, list, controls] = Layout::vertical([
            Constraint::Length(extra),
            Constraint::Min(0),
            Constraint::Length(extra),
        ])
        .areas(area);

        DashletAreas { banner, list, controls }
    }

    /// Modal area centered on screen, sized in percent of `area`
    #[must_use]
    pub fn dialog(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
            .flex(Flex::Center)
            .areas(area);
        let [dialog] = Layout::horizontal([Constraint::Percentage(percent_x)])
            .flex(Flex::Center)
            .areas(row);
        dialog
    }

    /// Toast area in the top right corner, clipped to `area`
    #[must_use]
    pub fn toast(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(area.x + area.width - width, area.y, width, height)
    }
}
