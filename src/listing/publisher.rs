//! Broadcast of view states to the front end.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

use crate::listing::state::ViewState;

/// Single-writer, multi-reader view state channel.
///
/// Every published state reaches all current subscribers in order, and the
/// most recent one is kept for late readers via [`StatePublisher::latest`].
#[derive(Clone)]
pub struct StatePublisher {
    sender: broadcast::Sender<ViewState>,
    latest: Arc<RwLock<ViewState>>,
}

impl StatePublisher {
    /// `capacity` bounds how far a subscriber may fall behind.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            latest: Arc::new(RwLock::new(ViewState::default())),
        }
    }

    pub fn publish(&self, state: ViewState) {
        *self.latest.write() = state.clone();
        // No subscribers is fine
        let _ = self.sender.send(state);
    }

    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn latest(&self) -> ViewState {
        self.latest.read().clone()
    }
}

/// Receiving end of a [`StatePublisher`].
pub struct StateSubscription {
    receiver: broadcast::Receiver<ViewState>,
}

impl StateSubscription {
    /// Next state, or `None` once the publisher is gone.
    ///
    /// A subscriber that fell behind skips to the oldest state still buffered.
    pub async fn recv(&mut self) -> Option<ViewState> {
        loop {
            match self.receiver.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "View state subscriber lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next state if one is already buffered.
    pub fn try_recv(&mut self) -> Option<ViewState> {
        loop {
            match self.receiver.try_recv() {
                Ok(state) => return Some(state),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "View state subscriber lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}
