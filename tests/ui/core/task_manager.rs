use crate::support::{extension, MockHost};
use extensions_dashlet::constants::{ENDORSED_UNDECIDED, SUCCESS_EXTENSION_INSTALLED};
use extensions_dashlet::dashlet::EndorseRequest;
use extensions_dashlet::host::HostError;
use extensions_dashlet::model::EndorseDecision;
use extensions_dashlet::ui::core::{Action, TaskManager};
use std::sync::Arc;
use std::time::Duration;

fn abstain_request() -> EndorseRequest {
    EndorseRequest {
        ext_id: "extA".to_string(),
        mod_id: 5,
        version: "1.0".to_string(),
        decision: EndorseDecision::Abstain,
    }
}

#[tokio::test]
async fn test_endorse_reports_host_label() {
    let host = Arc::new(MockHost::new(Ok(()), Ok(vec!["abstain".to_string()])));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_endorse(host.clone(), abstain_request());

    match rx.recv().await {
        Some(Action::SetExtensionEndorsed { ext_id, endorsed }) => {
            assert_eq!(ext_id, "extA");
            assert_eq!(endorsed, "abstain");
        }
        other => panic!("Expected SetExtensionEndorsed, got {:?}", other),
    }

    assert_eq!(host.calls(), vec!["endorse-nexus-mod site 5 1.0 abstain".to_string()]);
}

#[tokio::test]
async fn test_endorse_failure_resets_to_undecided() {
    let host = Arc::new(MockHost::new(Ok(()), Err(HostError::Rejected("nope".to_string()))));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_endorse(host, abstain_request());

    match rx.recv().await {
        Some(Action::SetExtensionEndorsed { ext_id, endorsed }) => {
            assert_eq!(ext_id, "extA");
            assert_eq!(endorsed, ENDORSED_UNDECIDED);
        }
        other => panic!("Expected SetExtensionEndorsed, got {:?}", other),
    }

    // Exactly one store action per command
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_install_success_notifies() {
    let host = Arc::new(MockHost::new(Ok(()), Ok(Vec::new())));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_install(host.clone(), extension(6, "Newest", "carol", 300), 1500);

    assert!(matches!(rx.recv().await, Some(Action::ExtensionInstalled(name)) if name == "Newest"));
    match rx.recv().await {
        Some(Action::ShowNotification(notification)) => {
            assert_eq!(notification.message, SUCCESS_EXTENSION_INSTALLED);
            assert_eq!(notification.display, Duration::from_millis(1500));
        }
        other => panic!("Expected ShowNotification, got {:?}", other),
    }

    assert_eq!(host.calls(), vec!["install-extension Some(6)".to_string()]);
}

#[tokio::test]
async fn test_install_failure_goes_to_error_surface() {
    let host = Arc::new(MockHost::new(Err(HostError::Network("offline".to_string())), Ok(Vec::new())));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_install(host, extension(6, "Newest", "carol", 300), 1500);

    match rx.recv().await {
        Some(Action::CommandFailed(message)) => {
            assert!(message.contains("Newest"));
            assert!(message.contains("offline"));
        }
        other => panic!("Expected CommandFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let host = Arc::new(MockHost::new(Ok(()), Ok(vec!["Endorsed".to_string()])));
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_endorse(host.clone(), abstain_request());
    manager.spawn_endorse(host, abstain_request());
    assert_eq!(manager.task_count(), 2);

    // Repeated activations are not de-duplicated
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());

    for _ in 0..50 {
        manager.cleanup_finished_tasks();
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(manager.task_count(), 0);
}
