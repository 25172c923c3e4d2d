//! KeyboardMiddleware - global key bindings
//!
//! The focused view handles its own keys first. Whatever it leaves unhandled
//! arrives here as `GlobalAction::KeyPressed` and is matched against the
//! application-wide bindings.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware translates unhandled keys into global actions
#[derive(Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            handle_key_event(key, dispatcher);
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        true
    }
}

fn handle_key_event(key: &KeyEvent, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            log::debug!("Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        _ => {
            log::trace!("Unbound key: {:?}", key.code);
        }
    }
}
