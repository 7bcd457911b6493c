use crate::support::{render_lines, screen_contains};
use extensions_dashlet::ui::components::NotificationComponent;
use extensions_dashlet::ui::core::Notification;
use std::time::{Duration, Instant};

#[test]
fn test_success_notification_expires() {
    let mut notifications = NotificationComponent::new();
    let shown_at = Instant::now();
    notifications.push_at(Notification::success("Extension installed", 2000), shown_at);

    assert_eq!(notifications.expire(shown_at + Duration::from_millis(1999)), 0);
    assert!(notifications.is_visible());

    assert_eq!(notifications.expire(shown_at + Duration::from_millis(2000)), 1);
    assert!(!notifications.is_visible());
}

#[test]
fn test_notification_dismissed_before_expiry() {
    let mut notifications = NotificationComponent::new();
    let shown_at = Instant::now();
    notifications.push_at(Notification::success("installed", 2000), shown_at);

    let dismissed = notifications.dismiss_latest().unwrap();
    assert_eq!(dismissed.message, "installed");
    assert!(notifications.current().is_none());
    assert_eq!(notifications.expire(shown_at + Duration::from_secs(3600)), 0);
}

#[test]
fn test_newest_notification_rendered() {
    let mut notifications = NotificationComponent::new();
    notifications.push(Notification::success("first", 2000));
    notifications.push(Notification::success("second", 2000));

    assert_eq!(notifications.current().map(|n| n.message.as_str()), Some("second"));

    let lines = render_lines(100, 20, |f| notifications.render(f, f.area()));
    assert!(screen_contains(&lines, "Success"));
    assert!(screen_contains(&lines, "second"));
    assert!(!screen_contains(&lines, "first"));
}
