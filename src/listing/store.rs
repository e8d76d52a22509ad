//! Single-owner listing store.
//!
//! The store runs as one tokio task that owns [`ListingState`]. Handles send
//! messages to its mailbox; fetches run on their own tasks and report back
//! through a completion channel, so state is only ever touched by the store
//! task.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::client::{CoinFetcher, FetchError};
use crate::coin::{CoinRecord, FilterCriterion};
use crate::listing::intent::ListingIntent;
use crate::listing::publisher::{StatePublisher, StateSubscription};
use crate::listing::reducer::ListingReducer;
use crate::listing::state::{ListingState, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Listing store is no longer running")]
    StoreClosed,
}

/// Read-only view of the store's session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSnapshot {
    pub active_criteria: BTreeSet<FilterCriterion>,
    pub search_text: String,
    pub coin_count: usize,
    pub load_generation: u64,
}

enum StoreMessage {
    Load {
        reply: Option<oneshot::Sender<ViewState>>,
    },
    Apply(ListingIntent),
    Snapshot(oneshot::Sender<ListingSnapshot>),
}

struct Completion {
    generation: u64,
    result: Result<Vec<CoinRecord>, FetchError>,
}

pub struct ListingStore {
    state: ListingState,
    fetcher: Arc<dyn CoinFetcher>,
    publisher: StatePublisher,
    mailbox: mpsc::UnboundedReceiver<StoreMessage>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    /// `load_and_wait` callers. All of them are answered by the current load.
    waiters: Vec<oneshot::Sender<ViewState>>,
}

impl ListingStore {
    /// Start the store on the current tokio runtime.
    ///
    /// The task stops once every [`ListingHandle`] is dropped.
    pub fn spawn(fetcher: Arc<dyn CoinFetcher>, publisher: StatePublisher) -> ListingHandle {
        let (mailbox_tx, mailbox) = mpsc::unbounded_channel();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        let store = Self {
            state: ListingState::default(),
            fetcher,
            publisher: publisher.clone(),
            mailbox,
            completions_tx,
            completions_rx,
            waiters: Vec::new(),
        };
        tokio::spawn(store.run());

        ListingHandle {
            mailbox: mailbox_tx,
            publisher,
        }
    }

    async fn run(mut self) {
        loop {
            tokio::select! {
                message = self.mailbox.recv() => match message {
                    Some(message) => self.handle_message(message),
                    None => break,
                },
                Some(completion) = self.completions_rx.recv() => self.finish_load(completion),
            }
        }
        tracing::debug!("Listing store stopped");
    }

    fn handle_message(&mut self, message: StoreMessage) {
        match message {
            StoreMessage::Load { reply } => self.start_load(reply),
            StoreMessage::Apply(intent) => self.apply(intent),
            StoreMessage::Snapshot(reply) => {
                let _ = reply.send(ListingSnapshot {
                    active_criteria: self.state.active_criteria.clone(),
                    search_text: self.state.search_text.clone(),
                    coin_count: self.state.all_coins.len(),
                    load_generation: self.state.load_generation,
                });
            }
        }
    }

    fn apply(&mut self, intent: ListingIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = ListingReducer::reduce(state, intent);
        self.publisher.publish(self.state.view.clone());
    }

    fn start_load(&mut self, reply: Option<oneshot::Sender<ViewState>>) {
        let generation = self.state.load_generation + 1;
        if self.state.view.is_loading() {
            tracing::debug!(generation, "Superseding in-flight load");
        }
        self.apply(ListingIntent::LoadStarted { generation });

        if let Some(reply) = reply {
            self.waiters.push(reply);
        }

        let fetcher = Arc::clone(&self.fetcher);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { fetcher.fetch_coins().await });
            // A panicking fetcher still has to settle the load
            let result = fetch.await.unwrap_or_else(|e| {
                tracing::error!(generation, error = %e, "Coin fetch task failed");
                Err(FetchError::RequestFailed)
            });
            // Store gone means nobody cares about the result
            let _ = completions.send(Completion { generation, result });
        });
    }

    fn finish_load(&mut self, completion: Completion) {
        let Completion { generation, result } = completion;

        if !self.state.is_current_load(generation) {
            tracing::debug!(
                generation,
                current = self.state.load_generation,
                "Dropping superseded load result"
            );
            return;
        }

        match &result {
            Ok(coins) => tracing::info!(generation, count = coins.len(), "Coin list loaded"),
            Err(e) => tracing::warn!(
                generation,
                error = %e,
                kind = e.error_type(),
                "Coin list load failed"
            ),
        }

        self.apply(ListingIntent::LoadFinished { generation, result });

        // Waiters of superseded loads get the newest outcome
        let view = self.state.view.clone();
        for reply in self.waiters.drain(..) {
            let _ = reply.send(view.clone());
        }
    }
}

/// Cheap, cloneable front for a running [`ListingStore`].
///
/// Mutating calls return as soon as the message is queued; the resulting
/// view state arrives on subscriptions.
#[derive(Clone)]
pub struct ListingHandle {
    mailbox: mpsc::UnboundedSender<StoreMessage>,
    publisher: StatePublisher,
}

impl ListingHandle {
    fn send(&self, message: StoreMessage) -> Result<(), ListingError> {
        self.mailbox
            .send(message)
            .map_err(|_| ListingError::StoreClosed)
    }

    fn apply(&self, intent: ListingIntent) -> Result<(), ListingError> {
        self.send(StoreMessage::Apply(intent))
    }

    /// Emit `Loading` and fetch in the background. Supersedes any load in flight.
    pub fn load(&self) -> Result<(), ListingError> {
        self.send(StoreMessage::Load { reply: None })
    }

    /// Like [`load`](Self::load), resolving with the view state the load produced.
    pub async fn load_and_wait(&self) -> Result<ViewState, ListingError> {
        let (tx, rx) = oneshot::channel();
        self.send(StoreMessage::Load { reply: Some(tx) })?;
        rx.await.map_err(|_| ListingError::StoreClosed)
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> Result<(), ListingError> {
        self.apply(ListingIntent::SetSearchText(text.into()))
    }

    pub fn toggle_filter(&self, criterion: FilterCriterion) -> Result<(), ListingError> {
        self.apply(ListingIntent::ToggleFilter(criterion))
    }

    pub fn clear_filters(&self) -> Result<(), ListingError> {
        self.apply(ListingIntent::ClearFilters)
    }

    pub fn set_filters(&self, criteria: BTreeSet<FilterCriterion>) -> Result<(), ListingError> {
        self.apply(ListingIntent::SetFilters(criteria))
    }

    pub async fn snapshot(&self) -> Result<ListingSnapshot, ListingError> {
        let (tx, rx) = oneshot::channel();
        self.send(StoreMessage::Snapshot(tx))?;
        rx.await.map_err(|_| ListingError::StoreClosed)
    }

    pub fn subscribe(&self) -> StateSubscription {
        self.publisher.subscribe()
    }

    pub fn latest(&self) -> ViewState {
        self.publisher.latest()
    }
}
