use extensions_dashlet::ui::core::Notification;
use std::time::Duration;

#[test]
fn test_success_notification_auto_dismisses() {
    let notification = Notification::success("Extension installed", 2000);
    assert_eq!(notification.message, "Extension installed");
    assert_eq!(notification.display, Duration::from_millis(2000));
}

#[test]
fn test_notification_ids_are_unique() {
    let first = Notification::success("same", 2000);
    let second = Notification::success("same", 2000);
    assert_ne!(first.id, second.id);
}
