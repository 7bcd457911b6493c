use crate::support::{char_key, key, render_lines, screen_contains};
use crossterm::event::KeyCode;
use extensions_dashlet::logger::Logger;
use extensions_dashlet::ui::components::DialogComponent;
use extensions_dashlet::ui::core::{Action, Component, DialogType};

#[test]
fn test_dialog_hidden_by_default() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert!(matches!(dialog.handle_key_events(char_key('x')), Action::None));
}

#[test]
fn test_error_dialog_any_key_closes() {
    let mut dialog = DialogComponent::default();
    let action = dialog.update(Action::ShowDialog(DialogType::Error("install failed".to_string())));
    assert!(matches!(action, Action::None));
    assert!(dialog.is_visible());

    let lines = render_lines(80, 24, |f| dialog.render(f, f.area()));
    assert!(screen_contains(&lines, "install failed"));

    let action = dialog.handle_key_events(char_key('x'));
    assert!(matches!(action, Action::HideDialog));
    dialog.update(action);
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_dialog_scrolls_and_closes() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Down)), Action::None));
    assert_eq!(dialog.scroll_offset, 1);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Home)), Action::None));
    assert_eq!(dialog.scroll_offset, 0);

    // Unrelated keys keep the help open
    assert!(matches!(dialog.handle_key_events(char_key('x')), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_logs_dialog_shows_logger_lines() {
    let logger = Logger::new();
    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger.clone());
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let lines = render_lines(100, 30, |f| dialog.render(f, f.area()));
    assert!(screen_contains(&lines, "No log entries yet"));

    logger.log("Store: setExtensionEndorsed".to_string());
    let lines = render_lines(100, 30, |f| dialog.render(f, f.area()));
    assert!(screen_contains(&lines, "setExtensionEndorsed"));
}
