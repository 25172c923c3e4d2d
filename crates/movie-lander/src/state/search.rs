//! Search State

use crate::domain_models::Movie;

/// Navbar search state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Last lookup result (None when nothing matched)
    pub result: Option<Movie>,
    /// Whether the result popup is open
    pub show_search_results: bool,
}
