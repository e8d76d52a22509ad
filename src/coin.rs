//! Coin records as delivered by the feed, and the filter criteria a user
//! can apply to them.

use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// One cryptocurrency entry from the feed.
///
/// Feed keys are snake_case (`is_active`, `is_new`); the `type` key maps onto
/// [`CoinRecord::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoinRecord {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: CoinKind,
    pub is_active: bool,
    pub is_new: bool,
}

impl CoinRecord {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        kind: CoinKind,
        is_active: bool,
        is_new: bool,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            kind,
            is_active,
            is_new,
        }
    }
}

/// Kind of a coin record.
///
/// Unrecognized values decode as `Inactive` instead of failing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinKind {
    Coin,
    Token,
    Inactive,
}

impl CoinKind {
    /// Maps the raw feed value; anything unknown is `Inactive`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "coin" => CoinKind::Coin,
            "token" => CoinKind::Token,
            _ => CoinKind::Inactive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoinKind::Coin => "coin",
            CoinKind::Token => "token",
            CoinKind::Inactive => "inActive",
        }
    }
}

impl<'de> Deserialize<'de> for CoinKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawKind {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match RawKind::deserialize(deserializer)? {
            RawKind::Text(raw) => CoinKind::from_raw(&raw),
            RawKind::Other(_) => CoinKind::Inactive,
        })
    }
}

impl fmt::Display for CoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A predicate category the user can toggle on.
///
/// Active criteria are combined with AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCriterion {
    ActiveOnly,
    NewOnly,
    CoinOnly,
    InactiveOnly,
    TokenOnly,
}

impl FilterCriterion {
    /// All criteria in menu order.
    pub const ALL: [FilterCriterion; 5] = [
        FilterCriterion::ActiveOnly,
        FilterCriterion::NewOnly,
        FilterCriterion::CoinOnly,
        FilterCriterion::InactiveOnly,
        FilterCriterion::TokenOnly,
    ];

    /// Human readable label shown in filter menus.
    pub fn label(self) -> &'static str {
        match self {
            FilterCriterion::ActiveOnly => "Active Coins",
            FilterCriterion::NewOnly => "New Coins",
            FilterCriterion::CoinOnly => "Only Coin",
            FilterCriterion::InactiveOnly => "InActive Coins",
            FilterCriterion::TokenOnly => "Only Token",
        }
    }

    /// Short keyword accepted on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            FilterCriterion::ActiveOnly => "active",
            FilterCriterion::NewOnly => "new",
            FilterCriterion::CoinOnly => "coin",
            FilterCriterion::InactiveOnly => "inactive",
            FilterCriterion::TokenOnly => "token",
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}' (expected one of: active, new, coin, inactive, token)")]
pub struct ParseFilterError(pub String);

impl FromStr for FilterCriterion {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        FilterCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.keyword() == wanted)
            .ok_or_else(|| ParseFilterError(s.trim().to_string()))
    }
}
