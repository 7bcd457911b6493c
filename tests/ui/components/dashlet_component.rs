use crate::support::{char_key, endorse_inputs, key, news_inputs, render_lines, screen_contains};
use crossterm::event::KeyCode;
use extensions_dashlet::dashlet::DisplayMode;
use extensions_dashlet::model::{DashletInputs, EndorseDecision, InstalledExtension};
use extensions_dashlet::ui::components::extension_item::ListItem;
use extensions_dashlet::ui::components::DashletComponent;
use extensions_dashlet::ui::core::{Action, Component};

fn dashlet(inputs: DashletInputs) -> DashletComponent {
    let mut dashlet = DashletComponent::new(5, false);
    dashlet.update_data(inputs);
    dashlet
}

fn render(dashlet: &mut DashletComponent) -> Vec<String> {
    render_lines(90, 24, |f| dashlet.render(f, f.area()))
}

#[test]
fn test_news_mode_render() {
    let mut dashlet = dashlet(news_inputs());
    assert_eq!(dashlet.mode(), DisplayMode::News);

    let lines = render(&mut dashlet);
    assert!(screen_contains(&lines, "Extensions"));
    assert!(screen_contains(&lines, "Newer"));
    assert!(screen_contains(&lines, "Older"));
    assert!(screen_contains(&lines, "Install"));
    assert!(screen_contains(&lines, "By carol"));
    assert!(!screen_contains(&lines, "Not now"));

    // Newest entry first
    let newer = lines.iter().position(|line| line.contains("Newer")).unwrap();
    let older = lines.iter().position(|line| line.contains("Older")).unwrap();
    assert!(newer < older);
}

#[test]
fn test_endorse_mode_render() {
    let mut dashlet = dashlet(endorse_inputs());
    assert_eq!(dashlet.mode(), DisplayMode::Endorse);

    let lines = render(&mut dashlet);
    assert!(screen_contains(&lines, "Ext A"));
    assert!(screen_contains(&lines, "Endorse"));
    assert!(screen_contains(&lines, "Abstain"));
    assert!(screen_contains(&lines, "Not now"));
    // Available extensions are hidden while endorsements are pending
    assert!(!screen_contains(&lines, "Newest"));
}

#[test]
fn test_empty_feed_render() {
    let mut dashlet = dashlet(DashletInputs::default());
    assert_eq!(dashlet.mode(), DisplayMode::News);
    assert!(dashlet.items().is_empty());

    let lines = render(&mut dashlet);
    assert!(screen_contains(&lines, "Extensions"));
    assert!(screen_contains(&lines, "No new extensions available"));
    assert!(!screen_contains(&lines, "Install"));
}

#[test]
fn test_not_now_switches_to_news() {
    let mut dashlet = dashlet(endorse_inputs());

    let action = dashlet.handle_key_events(char_key('n'));
    assert!(matches!(action, Action::SkipEndorsing));
    assert!(matches!(dashlet.update(action), Action::None));

    assert!(dashlet.skip_endorsing());
    assert_eq!(dashlet.mode(), DisplayMode::News);

    let lines = render(&mut dashlet);
    assert!(screen_contains(&lines, "Newest"));
    assert!(!screen_contains(&lines, "Not now"));

    // Stays in news mode across data updates
    dashlet.update_data(endorse_inputs());
    assert_eq!(dashlet.mode(), DisplayMode::News);
}

#[test]
fn test_endorse_and_abstain_keys() {
    let mut dashlet = dashlet(endorse_inputs());

    match dashlet.handle_key_events(char_key('e')) {
        Action::EndorseExtension(request) => {
            assert_eq!(request.ext_id, "extA");
            assert_eq!(request.mod_id, 5);
            assert_eq!(request.version, "1.0");
            assert_eq!(request.decision, EndorseDecision::Endorse);
        }
        other => panic!("Expected EndorseExtension, got {:?}", other),
    }

    match dashlet.handle_key_events(char_key('a')) {
        Action::EndorseExtension(request) => assert_eq!(request.decision, EndorseDecision::Abstain),
        other => panic!("Expected EndorseExtension, got {:?}", other),
    }

    // Install is not offered in endorse mode
    assert!(matches!(dashlet.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_install_key_uses_selected_row() {
    let mut dashlet = dashlet(news_inputs());

    match dashlet.handle_key_events(key(KeyCode::Enter)) {
        Action::InstallExtension(extension) => assert_eq!(extension.mod_id, Some(2)),
        other => panic!("Expected InstallExtension, got {:?}", other),
    }

    let action = dashlet.handle_key_events(key(KeyCode::Down));
    assert!(matches!(action, Action::NextItem));
    dashlet.update(action);
    assert_eq!(dashlet.selected_index(), 1);

    match dashlet.handle_key_events(char_key('i')) {
        Action::InstallExtension(extension) => assert_eq!(extension.mod_id, Some(1)),
        other => panic!("Expected InstallExtension, got {:?}", other),
    }

    // Endorse keys do nothing in news mode
    assert!(matches!(dashlet.handle_key_events(char_key('e')), Action::None));
    assert!(matches!(dashlet.handle_key_events(char_key('n')), Action::None));
}

#[test]
fn test_selection_wraps() {
    let mut dashlet = dashlet(news_inputs());

    dashlet.update(Action::PreviousItem);
    assert_eq!(dashlet.selected_index(), 1);
    dashlet.update(Action::NextItem);
    assert_eq!(dashlet.selected_index(), 0);
}

#[test]
fn test_selection_clamped_when_rows_disappear() {
    let mut dashlet = dashlet(news_inputs());
    dashlet.update(Action::NextItem);
    assert_eq!(dashlet.selected_index(), 1);

    let mut inputs = news_inputs();
    inputs.installed.insert(
        "older",
        InstalledExtension {
            mod_id: Some(1),
            version: "1.0".to_string(),
        },
    );
    dashlet.update_data(inputs);
    assert_eq!(dashlet.items().len(), 1);
    assert_eq!(dashlet.selected_index(), 0);
}

#[test]
fn test_unresolvable_endorse_rows_hidden() {
    let mut inputs = endorse_inputs();
    inputs.installed.insert(
        "gone",
        InstalledExtension {
            mod_id: Some(404),
            version: "0.1".to_string(),
        },
    );

    let dashlet = dashlet(inputs);
    assert_eq!(dashlet.view().unendorsed.len(), 2);
    assert_eq!(dashlet.items().len(), 1);
    assert_eq!(dashlet.items()[0].extension().mod_id, Some(5));
}

#[test]
fn test_unresolvable_endorse_list_has_no_feed_text() {
    let mut inputs = endorse_inputs();
    inputs.catalog.retain(|ext| ext.mod_id != Some(5));

    let mut dashlet = dashlet(inputs);
    assert_eq!(dashlet.mode(), DisplayMode::Endorse);
    assert!(dashlet.items().is_empty());

    let lines = render(&mut dashlet);
    assert!(screen_contains(&lines, "Please endorse extensions you like"));
    assert!(screen_contains(&lines, "Not now"));
    assert!(!screen_contains(&lines, "No new extensions available"));
}

#[test]
fn test_key_hints_follow_mode() {
    let news = dashlet(news_inputs());
    assert!(news.key_hints().contains("install"));

    let endorse = dashlet(endorse_inputs());
    assert!(endorse.key_hints().contains("not now"));
}

#[test]
fn test_row_controls_follow_mode() {
    let news = dashlet(news_inputs());
    assert!(news.items().iter().all(|item| item.controls() == vec!["Install"]));

    let endorse = dashlet(endorse_inputs());
    assert_eq!(endorse.items()[0].controls(), vec!["Endorse", "Abstain"]);
}
