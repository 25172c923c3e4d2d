//! Global actions - not tied to any slice of state

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Key the focused view did not handle
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
}
