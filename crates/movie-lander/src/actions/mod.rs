//! Actions module
//!
//! All actions in the application use a tagged action architecture:
//! - Global actions affect the application as a whole (keys, quit)
//! - Domain actions are already targeted at one slice of state

pub mod global;
pub mod movies;
pub mod search;

pub use global::GlobalAction;
pub use movies::MoviesAction;
pub use search::SearchAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Movie list, favourites and tab selection
    Movies(MoviesAction),
    /// Navbar search
    Search(SearchAction),

    /// No-op action
    None,
}
