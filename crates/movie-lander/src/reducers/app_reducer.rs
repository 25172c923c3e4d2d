use crate::actions::{Action, GlobalAction, MoviesAction};
use crate::reducers::{movies_reducer, search_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Movies(movies_action) => {
            state.movies = movies_reducer::reduce_movies(state.movies, movies_action);

            // Adding a search result to the list also closes the result popup
            if let MoviesAction::AddMovieToList(_) = movies_action {
                state.search = search_reducer::hide_results(state.search);
            }
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search(state.search, search_action);
        }
        Action::Global(GlobalAction::KeyPressed(_)) | Action::None => {}
    }

    state
}
