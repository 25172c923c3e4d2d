//! State binding between the store and a view
//!
//! A `Connect` runs a selector over every new state and remembers the last
//! projected props. The view is redrawn only when that projection changes;
//! updates to unrelated slices of `AppState` leave it alone. The binding also
//! hands the view a `Dispatcher`, so views never see the store itself.

use crate::dispatcher::Dispatcher;
use crate::state::{AppState, MoviesState, SearchState};

/// The slice of state the app view renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppProps {
    pub movies: MoviesState,
    pub search: SearchState,
}

/// Selector for the app view: a narrowing projection, no transformation
pub fn select_app_props(state: &AppState) -> AppProps {
    AppProps {
        movies: state.movies.clone(),
        search: state.search.clone(),
    }
}

/// Binding of a selector to the store
pub struct Connect<P> {
    select: fn(&AppState) -> P,
    dispatcher: Dispatcher,
    props: Option<P>,
    dirty: bool,
}

impl<P: PartialEq> Connect<P> {
    pub fn new(select: fn(&AppState) -> P, dispatcher: Dispatcher) -> Self {
        Self {
            select,
            dispatcher,
            props: None,
            dirty: false,
        }
    }

    /// Re-run the selector. Returns `true` if the projection changed.
    pub fn on_state_change(&mut self, state: &AppState) -> bool {
        let next = (self.select)(state);
        if self.props.as_ref() == Some(&next) {
            return false;
        }
        self.props = Some(next);
        self.dirty = true;
        true
    }

    /// Last projected props, `None` before the first state change
    pub fn props(&self) -> Option<&P> {
        self.props.as_ref()
    }

    /// Dispatch capability injected alongside the props
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Whether a redraw is due; clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
