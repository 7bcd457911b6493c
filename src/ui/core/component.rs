use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the dashboard that reacts to keys and actions and draws itself.
///
/// Keys are translated into an [`Action`] without touching any shared state; the
/// shell then routes the action through [`Component::update`] of every component
/// before acting on whatever comes out the other end.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns and hand back the rest
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
