//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod movies;
mod search;

pub use app::AppState;
pub use movies::MoviesState;
pub use search::SearchState;
