//! Plain-text rendering of view states.

use crate::coin::{CoinRecord, FilterCriterion};
use crate::listing::{ListingSnapshot, ViewState};
use crate::ui::alert::Alert;

pub fn render_coin(coin: &CoinRecord) -> String {
    let symbol = format!("({})", coin.symbol);
    let activity = if coin.is_active { "active" } else { "inactive" };
    let mut line = format!(
        "{:<20} {:<10} {:<8} {}",
        coin.name, symbol, coin.kind, activity
    );
    if coin.is_new {
        line.push_str("  NEW");
    }
    line
}

pub fn render_count(count: usize) -> String {
    match count {
        1 => "1 coin".to_string(),
        n => format!("{} coins", n),
    }
}

pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Loaded(coins) => {
            let mut lines: Vec<String> = coins.iter().map(render_coin).collect();
            lines.push(render_count(coins.len()));
            lines.join("\n")
        }
        ViewState::Failed(error) => render_alert(&Alert::from_error(error)),
    }
}

pub fn render_alert(alert: &Alert) -> String {
    format!("! {}", alert.title)
}

pub fn render_snapshot(snapshot: &ListingSnapshot) -> String {
    let filters = if snapshot.active_criteria.is_empty() {
        "none".to_string()
    } else {
        snapshot
            .active_criteria
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Filters: {}\nSearch: \"{}\"\nLoaded: {}",
        filters,
        snapshot.search_text,
        render_count(snapshot.coin_count)
    )
}

/// Filter menu with a check mark next to active criteria.
pub fn render_filter_menu(snapshot: &ListingSnapshot) -> String {
    FilterCriterion::ALL
        .iter()
        .map(|criterion| {
            let mark = if snapshot.active_criteria.contains(criterion) {
                " ✓"
            } else {
                ""
            };
            format!("  {:<9} {}{}", criterion.keyword(), criterion.label(), mark)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
