//! Status Bar View Model
//!
//! Key hints on the left, list summary on the right.

use crate::state::MoviesState;
use movie_lander_theme::Theme;
use ratatui::style::{Color, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// (key, description) pairs
    pub hints: Vec<(&'static str, &'static str)>,
    /// e.g. "6 movies · 2 favourites"
    pub summary: String,
    pub key_style: Style,
    pub description_style: Style,
    pub summary_style: Style,
    pub bg_color: Color,
}

impl StatusBarViewModel {
    pub fn new(movies: &MoviesState, searching: bool, theme: &Theme) -> Self {
        let hints = if searching {
            vec![("Enter", "search"), ("Esc", "cancel")]
        } else {
            vec![
                ("/", "search"),
                ("Tab", "switch tab"),
                ("↑↓", "select"),
                ("f", "favourite"),
                ("q", "quit"),
            ]
        };

        Self {
            hints,
            summary: format!(
                "{} movies · {} favourites",
                movies.list.len(),
                movies.favourites.len()
            ),
            key_style: theme.key_hint(),
            description_style: theme.key_description(),
            summary_style: theme.muted(),
            bg_color: theme.bg_primary,
        }
    }
}
