use crate::config::Config;
use crate::host::{ExtensionHost, StateStore};
use crate::logger::Logger;
use crate::model::ExtensionDescriptor;
use crate::ui::components::{DashletComponent, DialogComponent, NotificationComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Notification},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// The dashboard shell hosting the extensions dashlet.
///
/// Plays the host's part at the dashlet boundary: it owns the store, runs the
/// commands the dashlet asks for and shows notifications and errors.
pub struct AppComponent {
    // Component composition
    dashlet: DashletComponent,
    dialog: DialogComponent,
    notifications: NotificationComponent,

    // Services
    store: StateStore,
    host: Arc<dyn ExtensionHost>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    notification_display_ms: u64,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: StateStore, host: Arc<dyn ExtensionHost>, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            dashlet: DashletComponent::new(config.ui.num_display_items, config.ui.show_image_urls),
            dialog,
            notifications: NotificationComponent::new(),
            store,
            host,
            task_manager,
            background_action_rx,
            logger,
            notification_display_ms: config.ui.notification_display_ms,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dashlet(&self) -> &DashletComponent {
        &self.dashlet
    }

    pub fn notifications(&self) -> &NotificationComponent {
        &self.notifications
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Hand the latest store snapshot to the dashlet
    fn sync_component_data(&mut self) {
        self.dashlet.update_data(self.store.snapshot());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Esc if self.notifications.is_visible() => Action::DismissNotification,
            _ => Action::None,
        }
    }

    fn spawn_install(&mut self, extension: ExtensionDescriptor) -> TaskId {
        self.logger.log(format!(
            "Dashlet: install-extension '{}' (mod {:?})",
            extension.name, extension.mod_id
        ));
        self.task_manager
            .spawn_install(self.host.clone(), extension, self.notification_display_ms)
    }

    /// Handle app-level actions that require host interaction
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::InstallExtension(extension) => {
                self.spawn_install(*extension);
                Action::None
            }
            Action::EndorseExtension(request) => {
                self.logger.log(format!(
                    "Dashlet: endorse-nexus-mod {} mod {} v{} for '{}'",
                    request.decision, request.mod_id, request.version, request.ext_id
                ));
                self.task_manager.spawn_endorse(self.host.clone(), request);
                Action::None
            }
            Action::SetExtensionEndorsed { ext_id, endorsed } => {
                self.logger
                    .log(format!("Store: setExtensionEndorsed('{}', '{}')", ext_id, endorsed));
                self.store.set_extension_endorsed(&ext_id, &endorsed);
                self.sync_component_data();
                Action::None
            }
            Action::ExtensionInstalled(name) => {
                self.logger.log(format!("Host: extension '{}' installed", name));
                self.sync_component_data();
                Action::None
            }
            Action::CommandFailed(error) => {
                self.logger.log(format!("Host: {}", error));
                self.dialog.update(Action::ShowDialog(DialogType::Error(error)))
            }
            Action::ShowNotification(notification) => {
                self.show_notification(notification);
                Action::None
            }
            Action::DismissNotification => {
                self.notifications.dismiss_latest();
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                self.dialog.update(action)
            }
            Action::HideDialog => self.dialog.update(action),
            other => other,
        }
    }

    fn show_notification(&mut self, notification: Notification) {
        self.logger.log(format!("Notification: {}", notification.message));
        self.notifications.push(notification);
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (task_id, description) in completed_tasks {
            self.logger
                .log(format!("Background: task {} finished ({})", task_id, description));
        }

        actions
    }

    /// Periodic housekeeping: expire notifications
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.expire(now) > 0
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let dashlet_action = self.dashlet.handle_key_events(key);
                    if !matches!(dashlet_action, Action::None) {
                        dashlet_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        let _final_action = self.handle_app_action(action).await;

        Ok(())
    }

    fn render_footer(&self, f: &mut Frame, rect: Rect) {
        let hints = if self.is_busy() {
            format!("⟳ {} command(s) running • {}", self.active_task_count(), self.dashlet.key_hints())
        } else {
            self.dashlet.key_hints().to_string()
        };

        let footer = Paragraph::new(hints)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(footer, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.dashlet.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::shell(rect);

        self.dashlet.render(f, areas.body);
        self.render_footer(f, areas.footer);
        self.notifications.render(f, rect);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
