//! Visible-list computation.

use std::collections::BTreeSet;

use crate::coin::{CoinKind, CoinRecord, FilterCriterion};

impl FilterCriterion {
    pub fn matches(self, coin: &CoinRecord) -> bool {
        match self {
            FilterCriterion::ActiveOnly => coin.is_active,
            FilterCriterion::InactiveOnly => !coin.is_active,
            FilterCriterion::NewOnly => coin.is_new,
            FilterCriterion::CoinOnly => coin.kind == CoinKind::Coin,
            FilterCriterion::TokenOnly => coin.kind == CoinKind::Token,
        }
    }
}

/// Case-sensitive substring match on name or symbol. Empty text matches all.
pub fn matches_search(coin: &CoinRecord, text: &str) -> bool {
    text.is_empty() || coin.name.contains(text) || coin.symbol.contains(text)
}

/// Coins satisfying every criterion and the search text, in original order.
pub fn visible_coins(
    all: &[CoinRecord],
    criteria: &BTreeSet<FilterCriterion>,
    search_text: &str,
) -> Vec<CoinRecord> {
    all.iter()
        .filter(|coin| criteria.iter().all(|criterion| criterion.matches(coin)))
        .filter(|coin| matches_search(coin, search_text))
        .cloned()
        .collect()
}
