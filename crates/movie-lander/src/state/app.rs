//! Application State

use super::{MoviesState, SearchState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub movies: MoviesState,
    pub search: SearchState,
    pub theme: movie_lander_theme::Theme,
    /// Application configuration
    pub app_config: movie_lander_config::AppConfig,
}

impl AppState {
    /// Initial state for the given configuration
    pub fn with_config(app_config: movie_lander_config::AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            movies: MoviesState::default(),
            search: SearchState::default(),
            theme: movie_lander_theme::Theme::default(),
            app_config: movie_lander_config::AppConfig::default(),
        }
    }
}
