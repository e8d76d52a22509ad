//! Cryptocurrency listing with attribute filters and text search.
//!
//! A [`listing::ListingStore`] owns the fetched coins, the active filter set
//! and the search text, and publishes a [`listing::ViewState`] after every
//! change. Coins come from a [`client::CoinFetcher`]; the binary drives the
//! store from an interactive terminal front end in [`ui`].

pub mod client;
pub mod coin;
pub mod config;
pub mod listing;
pub mod logging;
pub mod ui;
