//! Shared test fixtures: coin sets, scripted fetchers and a mock feed.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use async_trait::async_trait;
use coinlist::client::{CoinFetcher, FetchError};
use coinlist::coin::{CoinKind, CoinRecord};
use coinlist::listing::{ListingHandle, ListingStore, StatePublisher, ViewState};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub type FetchResult = Result<Vec<CoinRecord>, FetchError>;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn bitcoin() -> CoinRecord {
    CoinRecord::new("Bitcoin", "BTC", CoinKind::Coin, true, false)
}

pub fn ethereum() -> CoinRecord {
    CoinRecord::new("Ethereum", "ETH", CoinKind::Coin, true, true)
}

pub fn ripple() -> CoinRecord {
    CoinRecord::new("Ripple", "XRP", CoinKind::Coin, false, false)
}

/// Bitcoin (active), Ethereum (active, new), Ripple (inactive); all coins.
pub fn three_coins() -> Vec<CoinRecord> {
    vec![bitcoin(), ethereum(), ripple()]
}

pub fn all_tokens() -> Vec<CoinRecord> {
    vec![
        CoinRecord::new("Bitcoin", "BTC", CoinKind::Token, true, false),
        CoinRecord::new("Ethereum", "ETH", CoinKind::Token, false, true),
        CoinRecord::new("Ripple", "XRP", CoinKind::Token, true, false),
    ]
}

/// Names of the visible coins; panics on non-loaded states.
pub fn names(state: &ViewState) -> Vec<String> {
    match state {
        ViewState::Loaded(coins) => coins.iter().map(|c| c.name.clone()).collect(),
        other => panic!("Expected Loaded, got {:?}", other),
    }
}

pub fn loaded_len(state: &ViewState) -> usize {
    state.coins().map(|c| c.len()).expect("Expected Loaded state")
}

/// Returns queued results in order, then empty lists.
pub struct QueuedFetcher {
    results: Mutex<VecDeque<FetchResult>>,
    calls: AtomicUsize,
}

impl QueuedFetcher {
    pub fn new(results: Vec<FetchResult>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoinFetcher for QueuedFetcher {
    async fn fetch_coins(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Each call blocks until the test releases the matching gate.
pub struct GatedFetcher {
    gates: Mutex<VecDeque<oneshot::Receiver<FetchResult>>>,
    calls: AtomicUsize,
}

impl GatedFetcher {
    pub fn with_gates(count: usize) -> (Arc<Self>, Vec<oneshot::Sender<FetchResult>>) {
        let mut senders = Vec::with_capacity(count);
        let mut receivers = VecDeque::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        let fetcher = Arc::new(Self {
            gates: Mutex::new(receivers),
            calls: AtomicUsize::new(0),
        });
        (fetcher, senders)
    }

    /// Wait until `count` fetches have started.
    pub async fn wait_for_calls(&self, count: usize) {
        let start = std::time::Instant::now();
        while self.calls.load(Ordering::SeqCst) < count {
            assert!(
                start.elapsed() < Duration::from_secs(2),
                "fetcher was not called {} times",
                count
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl CoinFetcher for GatedFetcher {
    async fn fetch_coins(&self) -> FetchResult {
        let gate = self.gates.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match gate {
            Some(gate) => gate.await.unwrap_or(Err(FetchError::NoData)),
            None => Err(FetchError::NoData),
        }
    }
}

pub fn spawn_store(fetcher: Arc<dyn CoinFetcher>) -> ListingHandle {
    ListingStore::spawn(fetcher, StatePublisher::new(64))
}

/// A store that has already loaded `coins`.
pub async fn preloaded(coins: Vec<CoinRecord>) -> ListingHandle {
    let handle = spawn_store(Arc::new(QueuedFetcher::new(vec![Ok(coins)])));
    let state = handle.load_and_wait().await.expect("store running");
    assert!(matches!(state, ViewState::Loaded(_)));
    handle
}
