//! Movie list actions

use crate::domain_models::Movie;

/// Actions handled by the movies reducer
#[derive(Debug, Clone, PartialEq)]
pub enum MoviesAction {
    /// Seed the list with a full dataset
    AddMovies(Vec<Movie>),
    /// Mark a movie as favourite
    AddToFavourites(Movie),
    /// Remove a movie from the favourites
    RemoveFromFavourites(Movie),
    /// Switch between the "Movies" (false) and "Favourites" (true) tabs
    SetShowFavourites(bool),
    /// Add a search result to the front of the list
    AddMovieToList(Movie),
}
