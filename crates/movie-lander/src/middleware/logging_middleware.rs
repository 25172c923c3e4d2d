use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::None => {}
            // Seeding carries the whole dataset, keep the log readable
            Action::Movies(crate::actions::MoviesAction::AddMovies(movies)) => {
                log::debug!("Action: Movies(AddMovies([{} movies]))", movies.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
