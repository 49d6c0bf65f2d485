use crate::config::Config;
use crate::coordinator::AppCoordinator;
use crate::error::AppError;
use crate::features::AppFactory;
use crate::state::{AppState, AppStateManager};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::flow::FlowView;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal front-end until the user quits.
///
/// All navigation state lives on this thread; `runtime` only executes the
/// screens' async loads.
pub fn run(config: Config, runtime: Handle) -> Result<(), AppError> {
    let initial = if config.session.start_authenticated {
        AppState::Authenticated
    } else {
        AppState::Unauthorized
    };
    let factories = AppFactory::new(config.repository.clone(), runtime).flow_factories();
    let mut app = AppCoordinator::new(AppStateManager::new(initial), factories);
    app.start();

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    tracing::info!(?initial, tick_rate_ms = config.ui.tick_rate_ms, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if is_quit(&key) {
                    break;
                }
                app.handle_key(key);
            }
            Ok(AppEvent::Tick) => app.tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
    }
}
