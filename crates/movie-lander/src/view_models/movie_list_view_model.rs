//! Movie List View Model
//!
//! Decides what the content area shows: one card per displayed movie, or a
//! placeholder when the active tab has nothing to show.

use crate::state::MoviesState;
use movie_lander_theme::Theme;
use ratatui::style::{Color, Style};
use std::collections::HashSet;

pub const NO_MOVIES_MESSAGE: &str = "No movies to display!";

/// View model for the content area
#[derive(Debug, Clone)]
pub struct MovieListViewModel {
    /// One entry per displayed movie, in display order
    pub items: Vec<MovieListItem>,
    /// Placeholder, present only when `items` is empty
    pub empty: Option<EmptyStateViewModel>,
}

/// A displayed movie, delegated to a movie card
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListItem {
    /// Card key (the movie's imdbID)
    pub key: String,
    /// Position in the displayed movies
    pub index: usize,
    pub is_favourite: bool,
}

/// View model for the empty state
#[derive(Debug, Clone)]
pub struct EmptyStateViewModel {
    pub message: String,
    pub border_color: Color,
    pub text_style: Style,
}

impl EmptyStateViewModel {
    pub fn no_movies(theme: &Theme) -> Self {
        Self {
            message: NO_MOVIES_MESSAGE.to_string(),
            border_color: theme.accent_primary,
            text_style: theme.muted(),
        }
    }
}

impl MovieListViewModel {
    pub fn from_movies(movies: &MoviesState, theme: &Theme) -> Self {
        let display_movies = movies.display_movies();

        let mut seen = HashSet::new();
        let items: Vec<MovieListItem> = display_movies
            .iter()
            .enumerate()
            .map(|(index, movie)| {
                if movie.key().is_empty() {
                    log::trace!("Movie '{}' has no key", movie.title);
                } else if !seen.insert(movie.key()) {
                    log::trace!("Duplicate movie key {}", movie.key());
                }
                MovieListItem {
                    key: movie.key().to_string(),
                    index,
                    is_favourite: movies.is_movie_in_favourites(movie),
                }
            })
            .collect();

        let empty = items
            .is_empty()
            .then(|| EmptyStateViewModel::no_movies(theme));

        Self { items, empty }
    }
}
