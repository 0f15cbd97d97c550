//! Trending data layer: upstream client plus the hourly read-through cache.

pub mod cache;
pub mod client;

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::models::TrendingRepo;

pub use cache::TrendingCache;
pub use client::TrendingClient;

/// Shared application state: the upstream client and its cache.
pub struct TrendingState {
    client: TrendingClient,
    cache: TrendingCache,
}

pub type SharedState = Arc<TrendingState>;

impl TrendingState {
    pub fn new(upstream_url: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            client: TrendingClient::new(upstream_url),
            cache: TrendingCache::new(cache_ttl),
        }
    }

    /// Get the trending repository list, refreshing from upstream if the
    /// cached copy has aged out of the revalidation window.
    ///
    /// Concurrent visits after expiry are coalesced: the refresh lock
    /// serializes the fetch, and waiters reuse the entry it stored. A failed
    /// refresh fails that visit; the stale entry is never served in its place.
    pub async fn trending(&self) -> Result<Arc<Vec<TrendingRepo>>> {
        if let Some(repos) = self.cache.fresh()? {
            return Ok(repos);
        }

        let _refresh = self.cache.refresh_lock().await;

        // Another visit may have completed the refresh while we waited
        if let Some(repos) = self.cache.fresh()? {
            return Ok(repos);
        }

        tracing::info!("Cache expired, fetching trending repositories");
        let repos = self.client.fetch().await?;
        tracing::info!("Fetched {} trending repositories", repos.len());
        self.cache.store(repos)
    }
}
