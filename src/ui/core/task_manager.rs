use super::actions::{Action, Notification};
use crate::constants::{ENDORSE_DOMAIN, ERROR_INSTALL_FAILED, SUCCESS_EXTENSION_INSTALLED};
use crate::dashlet::{endorsed_after, EndorseRequest};
use crate::host::ExtensionHost;
use crate::model::ExtensionDescriptor;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
struct BackgroundTask {
    handle: JoinHandle<()>,
    description: String,
}

/// Runs host commands off the UI loop and reports their outcome as actions.
///
/// Commands are fire-and-forget: nothing de-duplicates repeated activations and a
/// running command is never cancelled individually.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(task_id, BackgroundTask { handle, description });
        task_id
    }

    /// Spawn `install-extension`. Success raises the "installed" notification;
    /// failure goes to the shell's generic error surface.
    pub fn spawn_install(
        &mut self,
        host: Arc<dyn ExtensionHost>,
        extension: ExtensionDescriptor,
        notification_display_ms: u64,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Install extension '{}'", extension.name);
        let name = extension.name.clone();

        let handle = tokio::spawn(async move {
            match host.install_extension(extension).await {
                Ok(()) => {
                    let _ = action_sender.send(Action::ExtensionInstalled(name));
                    let _ = action_sender.send(Action::ShowNotification(Notification::success(
                        SUCCESS_EXTENSION_INSTALLED,
                        notification_display_ms,
                    )));
                }
                Err(e) => {
                    let error_msg = format!("{} '{}': {}", ERROR_INSTALL_FAILED, name, e);
                    let _ = action_sender.send(Action::CommandFailed(error_msg));
                }
            }
        });

        self.register(handle, description)
    }

    /// Spawn `endorse-nexus-mod`. Whatever happens, exactly one
    /// `SetExtensionEndorsed` is sent once the host answers.
    pub fn spawn_endorse(&mut self, host: Arc<dyn ExtensionHost>, request: EndorseRequest) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("{} extension '{}'", request.decision, request.ext_id);

        let handle = tokio::spawn(async move {
            let result = host
                .endorse_nexus_mod(ENDORSE_DOMAIN, request.mod_id, &request.version, request.decision)
                .await;

            let _ = action_sender.send(Action::SetExtensionEndorsed {
                ext_id: request.ext_id,
                endorsed: endorsed_after(&result),
            });
        });

        self.register(handle, description)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        // Outcomes were already sent over the action channel
        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id).map(|task| (task_id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
