use crate::config::Config;
use crate::host::{ExtensionHost, StateStore};
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Instant;

/// Run the dashboard until the user quits
pub async fn run_app(
    store: StateStore,
    host: Arc<dyn ExtensionHost>,
    config: &Config,
    logger: Logger,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(store, host, config, logger.clone());
    let mut event_handler = EventHandler::new();
    logger.log("App: dashboard started".to_string());

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        let event_result = event_handler.next_event().await?;

        match event_result {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event_result).await?;
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    // Process action through component hierarchy first
                    let processed_action = app.update(action);

                    app.handle_app_action(processed_action).await;
                    needs_render = true;
                }

                if app.tick(Instant::now()) {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
