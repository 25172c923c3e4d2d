//! Search actions

use crate::domain_models::Movie;

/// Actions for the navbar search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// Query submitted from the navbar (handled by `SearchMiddleware`)
    Submit(String),
    /// The catalog lookup found a movie
    ResultFound(Movie),
    /// The catalog lookup found nothing
    NoResult,
    /// Hide the search result popup
    Dismiss,
}
