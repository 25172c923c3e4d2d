//! SearchMiddleware - resolves navbar searches against the offline catalog

use crate::actions::{Action, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Movie;
use crate::middleware::Middleware;
use crate::state::AppState;

/// SearchMiddleware owns the searchable catalog
pub struct SearchMiddleware {
    catalog: Vec<Movie>,
}

impl SearchMiddleware {
    pub fn new(catalog: Vec<Movie>) -> Self {
        Self { catalog }
    }

    /// First catalog entry whose title contains the query
    fn lookup(&self, query: &str) -> Option<&Movie> {
        self.catalog.iter().find(|movie| movie.title_matches(query))
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Search(SearchAction::Submit(query)) = action else {
            return true;
        };

        let query = query.trim();
        if query.is_empty() {
            log::debug!("Ignoring empty search");
            return false;
        }

        match self.lookup(query) {
            Some(movie) => {
                log::info!("Search '{}' found {}", query, movie.imdb_id);
                dispatcher.dispatch(Action::Search(SearchAction::ResultFound(movie.clone())));
            }
            None => {
                log::info!("Search '{}' found nothing", query);
                dispatcher.dispatch(Action::Search(SearchAction::NoResult));
            }
        }

        false
    }
}
