//! Movies State

use crate::domain_models::Movie;

/// Movie list, favourites and the active tab
///
/// `favourites` is always a subset of `list`; the movies reducer keeps it so.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviesState {
    /// Movies in load order
    pub list: Vec<Movie>,
    /// Favourite movies, most recently added first
    pub favourites: Vec<Movie>,
    /// `true` when the "Favourites" tab is active
    pub show_favourites: bool,
}

impl MoviesState {
    /// The movies the active tab shows
    pub fn display_movies(&self) -> &[Movie] {
        if self.show_favourites {
            &self.favourites
        } else {
            &self.list
        }
    }

    /// Whether `movie` is one of the favourites (linear scan)
    pub fn is_movie_in_favourites(&self, movie: &Movie) -> bool {
        self.favourites.iter().any(|favourite| favourite == movie)
    }

    /// Whether a movie with the same key is already in the list
    pub fn contains_key(&self, imdb_id: &str) -> bool {
        self.list.iter().any(|movie| movie.imdb_id == imdb_id)
    }
}
