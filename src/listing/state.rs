use std::collections::BTreeSet;

use crate::client::FetchError;
use crate::coin::{CoinRecord, FilterCriterion};

/// What the front end renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Loaded(Vec<CoinRecord>),
    Failed(FetchError),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loaded(Vec::new())
    }
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Visible coins, if this is a loaded state.
    pub fn coins(&self) -> Option<&[CoinRecord]> {
        match self {
            ViewState::Loaded(coins) => Some(coins),
            _ => None,
        }
    }
}

/// Session state owned by the listing store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    /// Last successful fetch, in feed order.
    pub all_coins: Vec<CoinRecord>,
    pub active_criteria: BTreeSet<FilterCriterion>,
    pub search_text: String,
    /// Id of the most recent load. Completions for older ids are stale.
    pub load_generation: u64,
    /// Latest emitted view.
    pub view: ViewState,
}

impl ListingState {
    pub fn is_current_load(&self, generation: u64) -> bool {
        generation == self.load_generation
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_criteria.is_empty()
    }
}
