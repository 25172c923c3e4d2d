//! Search Reducer

use crate::actions::SearchAction;
use crate::state::SearchState;

/// Reducer for the navbar search state.
///
/// `Submit` is resolved by `SearchMiddleware` and never changes state here.
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::Submit(_) => {}
        SearchAction::ResultFound(movie) => {
            state.result = Some(movie.clone());
            state.show_search_results = true;
        }
        SearchAction::NoResult => {
            state.result = None;
            state.show_search_results = true;
        }
        SearchAction::Dismiss => {
            state = hide_results(state);
        }
    }
    state
}

/// Close the result popup, keeping the last result
pub fn hide_results(mut state: SearchState) -> SearchState {
    state.show_search_results = false;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Movie;

    #[test]
    fn test_result_found_shows_popup() {
        let movie = Movie::new("tt0078748", "Alien");
        let state = reduce_search(
            SearchState::default(),
            &SearchAction::ResultFound(movie.clone()),
        );
        assert_eq!(state.result, Some(movie));
        assert!(state.show_search_results);
    }

    #[test]
    fn test_no_result_clears_previous_result() {
        let state = reduce_search(
            SearchState::default(),
            &SearchAction::ResultFound(Movie::new("tt0078748", "Alien")),
        );
        let state = reduce_search(state, &SearchAction::NoResult);
        assert!(state.result.is_none());
        assert!(state.show_search_results);
    }

    #[test]
    fn test_dismiss_hides_popup() {
        let state = reduce_search(SearchState::default(), &SearchAction::NoResult);
        let state = reduce_search(state, &SearchAction::Dismiss);
        assert!(!state.show_search_results);
    }

    #[test]
    fn test_submit_is_not_reduced() {
        let state = reduce_search(
            SearchState::default(),
            &SearchAction::Submit("alien".to_string()),
        );
        assert_eq!(state, SearchState::default());
    }
}
