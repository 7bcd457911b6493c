//! The extensions dashlet.
//!
//! Shows either the newest extensions not installed yet ("news mode") or the installed
//! extensions still waiting for an endorse/abstain decision ("endorse mode"). The only
//! state it owns is the "Not now" flag and the selection; everything else is read from
//! the [`DashletInputs`] the shell hands over before each render, and every command
//! leaves as an [`Action`].

use crate::constants::{BUTTON_NOT_NOW, DASHLET_TITLE, EMPTY_NEWS, ENDORSE_BANNER, NUM_DISPLAY_ITEMS};
use crate::dashlet::{endorse_request, install_request, DashletRow, DashletView, DisplayMode};
use crate::model::{DashletInputs, EndorseDecision};
use crate::ui::components::extension_item::{DashletListItemType, ListItem};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as RatatuiListItem, ListState, Paragraph},
    Frame,
};

pub struct DashletComponent {
    inputs: DashletInputs,
    skip_endorsing: bool,
    selected_index: usize,
    list_state: ListState,
    num_display_items: usize,
    show_image_urls: bool,
}

impl Default for DashletComponent {
    fn default() -> Self {
        Self::new(NUM_DISPLAY_ITEMS, true)
    }
}

impl DashletComponent {
    pub fn new(num_display_items: usize, show_image_urls: bool) -> Self {
        Self {
            inputs: DashletInputs::default(),
            skip_endorsing: false,
            selected_index: 0,
            list_state: ListState::default(),
            num_display_items,
            show_image_urls,
        }
    }

    /// Replace the read model used for the next render and key presses
    pub fn update_data(&mut self, inputs: DashletInputs) {
        self.inputs = inputs;
        self.clamp_selection();
    }

    pub fn skip_endorsing(&self) -> bool {
        self.skip_endorsing
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn view(&self) -> DashletView<'_> {
        DashletView::derive(&self.inputs, self.skip_endorsing, self.num_display_items)
    }

    pub fn mode(&self) -> DisplayMode {
        self.view().mode
    }

    /// Rows of the active list, owned so they outlive the view
    pub fn items(&self) -> Vec<DashletListItemType> {
        let view = self.view();
        view.rows(&self.inputs).iter().map(DashletListItemType::from_row).collect()
    }

    fn clamp_selection(&mut self) {
        let len = self.items().len();
        if len == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn selected_row_action(&self, decision: Option<EndorseDecision>) -> Action {
        let view = self.view();
        let rows = view.rows(&self.inputs);

        match (rows.get(self.selected_index), decision) {
            (Some(DashletRow::Available(ext)), None) => {
                // The row is tagged with its mod id; resolve it against the current catalog
                let Some(mod_id) = ext.mod_id else {
                    return Action::None;
                };
                match install_request(&self.inputs, mod_id) {
                    Some(extension) => Action::InstallExtension(Box::new(extension)),
                    None => Action::None,
                }
            }
            (Some(DashletRow::Endorse { ext_id, .. }), Some(decision)) => {
                match endorse_request(&self.inputs, ext_id, decision) {
                    Some(request) => Action::EndorseExtension(request),
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    /// Key hints for the footer, depending on the active mode
    pub fn key_hints(&self) -> &'static str {
        match self.mode() {
            DisplayMode::News => "↑↓: select • Enter/i: install • G: logs • ?: help • q: quit",
            DisplayMode::Endorse => "↑↓: select • e: endorse • a: abstain • n: not now • ?: help • q: quit",
        }
    }

    fn render_banner(f: &mut Frame, area: Rect) {
        let banner = Paragraph::new(Line::from(Span::styled(
            ENDORSE_BANNER,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(banner, area);
    }

    fn render_not_now(f: &mut Frame, area: Rect) {
        let control = Paragraph::new(Line::from(vec![
            Span::styled(format!("[ {} ]", BUTTON_NOT_NOW), Style::default().fg(Color::Yellow)),
            Span::styled(" (n)", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(control, area);
    }
}

impl Component for DashletComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let mode = self.mode();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Enter | KeyCode::Char('i') if mode == DisplayMode::News => self.selected_row_action(None),
            KeyCode::Char('e') if mode == DisplayMode::Endorse => {
                self.selected_row_action(Some(EndorseDecision::Endorse))
            }
            KeyCode::Char('a') if mode == DisplayMode::Endorse => {
                self.selected_row_action(Some(EndorseDecision::Abstain))
            }
            KeyCode::Char('n') if mode == DisplayMode::Endorse => Action::SkipEndorsing,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                let len = self.items().len();
                if len > 0 {
                    self.selected_index = (self.selected_index + 1) % len;
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            Action::PreviousItem => {
                let len = self.items().len();
                if len > 0 {
                    self.selected_index = if self.selected_index == 0 {
                        len - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            Action::SkipEndorsing => {
                // Never reset; a new component starts over with the flag cleared
                self.skip_endorsing = true;
                self.selected_index = 0;
                self.clamp_selection();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let endorse_mode = self.mode() == DisplayMode::Endorse;
        let items = self.items();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", DASHLET_TITLE))
            .title_alignment(Alignment::Center);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let areas = LayoutManager::dashlet(inner, endorse_mode);

        if endorse_mode {
            Self::render_banner(f, areas.banner);
        }

        // An endorse list whose rows all fail to resolve just stays blank
        if items.is_empty() && !endorse_mode {
            let empty = Paragraph::new(EMPTY_NEWS)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, areas.list);
        } else if !items.is_empty() {
            let list_items: Vec<RatatuiListItem> = items
                .iter()
                .enumerate()
                .map(|(i, item)| item.render(i == self.selected_index, self.show_image_urls))
                .collect();

            let list = List::new(list_items).highlight_symbol("→ ");
            let mut list_state = self.list_state.clone();
            f.render_stateful_widget(list, areas.list, &mut list_state);
            self.list_state = list_state;
        }

        if endorse_mode {
            Self::render_not_now(f, areas.controls);
        }
    }
}
