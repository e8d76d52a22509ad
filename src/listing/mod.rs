//! Coin listing: the filter/search reducer, the store task that owns it, and
//! the view state publisher.

mod filter;
mod intent;
mod publisher;
mod reducer;
mod state;
mod store;

pub use filter::{matches_search, visible_coins};
pub use intent::ListingIntent;
pub use publisher::{StatePublisher, StateSubscription};
pub use reducer::ListingReducer;
pub use state::{ListingState, ViewState};
pub use store::{ListingError, ListingHandle, ListingSnapshot, ListingStore};
