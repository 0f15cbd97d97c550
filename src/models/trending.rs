//! Trending repository DTOs.
//!
//! Field names match the upstream API wire format. Every field carries
//! `#[serde(default)]` so partial or malformed records deserialize with empty
//! values instead of failing the whole response; the page renders those as
//! empty text.

use serde::{Deserialize, Serialize};

/// One person credited with a trending repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub avatar: String,
}

/// One repository entry as returned by the upstream API.
///
/// Entries are kept in API order throughout; `url` serves as the card key.
/// Note the upstream quirk: `stars` is a number but `forks` and
/// `currentPeriodStars` are strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingRepo {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: String,
    #[serde(default, rename = "currentPeriodStars")]
    pub current_period_stars: String,
    #[serde(default, rename = "builtBy")]
    pub built_by: Vec<Contributor>,
}
