use std::collections::BTreeSet;

use crate::client::FetchError;
use crate::coin::{CoinRecord, FilterCriterion};

#[derive(Debug, Clone)]
pub enum ListingIntent {
    /// A load was dispatched; `generation` supersedes all earlier loads.
    LoadStarted { generation: u64 },
    /// A fetch completed. Ignored unless `generation` is the current load.
    LoadFinished {
        generation: u64,
        result: Result<Vec<CoinRecord>, FetchError>,
    },
    SetSearchText(String),
    /// Removes the criterion if active, adds it otherwise.
    ToggleFilter(FilterCriterion),
    ClearFilters,
    /// Replaces the active criteria wholesale.
    SetFilters(BTreeSet<FilterCriterion>),
}
