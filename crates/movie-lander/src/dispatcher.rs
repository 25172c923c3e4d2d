//! Dispatcher for queuing actions back into the store
//!
//! Views and middleware never touch the store directly. They hold a
//! `Dispatcher` and queue actions; the event loop drains the queue through
//! `Store::process_pending`, so every queued action passes the full
//! middleware chain before it reaches the reducer.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the given channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for processing in the next drain of the store
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
