use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

type Listener = Box<dyn FnMut(&AppState)>;

struct Subscriber {
    active: Rc<Cell<bool>>,
    listener: Listener,
}

/// Handle for a store subscription
///
/// The listener stays registered for as long as the handle lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    /// Stop receiving state change notifications
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<Subscriber>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Register a listener called with the new state after every reduced action
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.subscribers.push(Subscriber {
            active: Rc::clone(&active),
            listener: Box::new(listener),
        });
        Subscription { active }
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        self.state = reduce(std::mem::take(&mut self.state), &action);
        self.notify();
    }

    /// Dispatch every action queued through the dispatcher, including
    /// actions queued while draining. Returns how many were processed.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.pending.try_recv() {
            self.dispatch(action);
            processed += 1;
        }
        processed
    }

    fn notify(&mut self) {
        self.subscribers.retain(|subscriber| subscriber.active.get());
        for subscriber in &mut self.subscribers {
            (subscriber.listener)(&self.state);
        }
    }
}
