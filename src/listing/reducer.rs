use crate::listing::filter::visible_coins;
use crate::listing::intent::ListingIntent;
use crate::listing::state::{ListingState, ViewState};

/// Pure transitions of the listing session.
///
/// Filter changes, search changes and successful loads recompute the visible
/// list from `all_coins`.
pub struct ListingReducer;

impl ListingReducer {
    fn recompute(mut state: ListingState) -> ListingState {
        state.view = ViewState::Loaded(visible_coins(
            &state.all_coins,
            &state.active_criteria,
            &state.search_text,
        ));
        state
    }

    pub fn reduce(mut state: ListingState, intent: ListingIntent) -> ListingState {
        match intent {
            ListingIntent::LoadStarted { generation } => {
                state.load_generation = generation;
                state.view = ViewState::Loading;
                state
            }
            ListingIntent::LoadFinished { generation, .. }
                if !state.is_current_load(generation) =>
            {
                // Superseded by a newer load
                state
            }
            ListingIntent::LoadFinished { result, .. } => match result {
                Ok(coins) => {
                    state.all_coins = coins;
                    Self::recompute(state)
                }
                Err(error) => {
                    // Previously loaded coins stay
                    state.view = ViewState::Failed(error);
                    state
                }
            },
            ListingIntent::SetSearchText(text) => {
                state.search_text = text;
                Self::recompute(state)
            }
            ListingIntent::ToggleFilter(criterion) => {
                if !state.active_criteria.remove(&criterion) {
                    state.active_criteria.insert(criterion);
                }
                Self::recompute(state)
            }
            ListingIntent::ClearFilters => {
                state.active_criteria.clear();
                Self::recompute(state)
            }
            ListingIntent::SetFilters(criteria) => {
                state.active_criteria = criteria;
                Self::recompute(state)
            }
        }
    }
}
