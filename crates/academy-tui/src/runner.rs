//! Main TUI runner - entry point and event loop

use academy_app::message::Message;
use academy_app::signals;
use academy_app::state::AppState;
use academy_app::update;
use academy_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the interactive TUI until the user quits or a signal arrives.
///
/// Must be called from inside a multi-threaded tokio runtime: the signal
/// handler runs as a task while this loop blocks on terminal input.
pub async fn run(state: &mut AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx);

    info!(route = %state.route, modules = state.catalog.len(), "Starting TUI");
    let result = run_loop(&mut term, state, msg_rx);

    ratatui::restore();
    info!("TUI stopped");
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Run a message and every follow-up message it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_app::config::Settings;
    use academy_app::{InputKey, Route};
    use academy_core::Catalog;

    fn test_state() -> AppState {
        AppState::new(Catalog::embedded().unwrap(), Settings::default())
    }

    #[test]
    fn test_process_message_follows_up() {
        let mut state = test_state();
        // Enter on the home list opens the selection via a Navigate follow-up
        process_message(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(state.route, Route::module("module-1"));
    }

    #[test]
    fn test_process_quit() {
        let mut state = test_state();
        process_message(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit());
    }

    #[test]
    fn test_tick_changes_nothing() {
        let mut state = test_state().with_route(Route::module("module-4"));
        process_message(&mut state, Message::Tick);
        assert_eq!(state.route, Route::module("module-4"));
        assert!(!state.should_quit());
    }
}
