//! Mapping of failures to user-facing alerts.

use crate::client::FetchError;
use crate::listing::{ListingSnapshot, ViewState};

/// Follow-up the front end offers when an alert is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    ClearFilters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub action: Option<AlertAction>,
}

impl Alert {
    pub fn from_error(error: &FetchError) -> Self {
        let action = match error {
            FetchError::EmptyDataWithFilteredApplied => Some(AlertAction::ClearFilters),
            _ => None,
        };
        Self {
            title: error.to_string(),
            action,
        }
    }

    /// Alert to raise for a freshly rendered state, if any.
    ///
    /// An empty listing while filters are active raises
    /// [`FetchError::EmptyDataWithFilteredApplied`].
    pub fn for_state(state: &ViewState, snapshot: &ListingSnapshot) -> Option<Self> {
        match state {
            ViewState::Failed(error) => Some(Self::from_error(error)),
            ViewState::Loaded(coins)
                if coins.is_empty() && !snapshot.active_criteria.is_empty() =>
            {
                Some(Self::from_error(&FetchError::EmptyDataWithFilteredApplied))
            }
            _ => None,
        }
    }
}
