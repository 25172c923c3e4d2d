//! Movies Reducer

use crate::actions::MoviesAction;
use crate::state::MoviesState;

/// Reducer for the movie list, favourites and tab selection.
///
/// Keeps `favourites` a subset of `list`.
pub fn reduce_movies(mut state: MoviesState, action: &MoviesAction) -> MoviesState {
    match action {
        MoviesAction::AddMovies(movies) => {
            // Replace rather than append, so seeding twice does not duplicate
            state.list = movies.clone();
            let list = &state.list;
            state.favourites.retain(|favourite| list.contains(favourite));
            log::debug!("Seeded {} movies", state.list.len());
        }
        MoviesAction::AddToFavourites(movie) => {
            if state.is_movie_in_favourites(movie) {
                log::debug!("{} is already a favourite", movie.title);
            } else if !state.list.contains(movie) {
                log::warn!("Ignoring favourite {} not present in list", movie.imdb_id);
            } else {
                state.favourites.insert(0, movie.clone());
            }
        }
        MoviesAction::RemoveFromFavourites(movie) => {
            state.favourites.retain(|favourite| favourite != movie);
        }
        MoviesAction::SetShowFavourites(show_favourites) => {
            state.show_favourites = *show_favourites;
        }
        MoviesAction::AddMovieToList(movie) => {
            if state.contains_key(&movie.imdb_id) {
                log::debug!("{} is already in the list", movie.imdb_id);
            } else {
                state.list.insert(0, movie.clone());
            }
        }
    }
    state
}
