//! Time-based cache for the upstream response.
//!
//! Holds at most one entry: the last successfully fetched repository list and
//! when it was fetched. An entry older than the TTL is treated as absent, so
//! a failed refresh never falls back to stale data.
//!
//! The refresh mutex is held across an await (the upstream fetch), so it is a
//! tokio mutex; the entry itself is only touched synchronously and sits
//! behind a std `RwLock`.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard};

use crate::error::{AppError, Result};
use crate::models::TrendingRepo;

struct CacheEntry {
    repos: Arc<Vec<TrendingRepo>>,
    fetched_at: Instant,
}

pub struct TrendingCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
    refresh: Mutex<()>,
}

impl TrendingCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Return the cached list if it is still inside the revalidation window.
    pub fn fresh(&self) -> Result<Option<Arc<Vec<TrendingRepo>>>> {
        let guard = self
            .entry
            .read()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))?;

        Ok(guard
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.repos)))
    }

    /// Replace the entry with a freshly fetched list.
    pub fn store(&self, repos: Vec<TrendingRepo>) -> Result<Arc<Vec<TrendingRepo>>> {
        let repos = Arc::new(repos);
        let mut guard = self
            .entry
            .write()
            .map_err(|_| AppError::Internal("Lock poisoned".to_string()))?;

        *guard = Some(CacheEntry {
            repos: Arc::clone(&repos),
            fetched_at: Instant::now(),
        });

        Ok(repos)
    }

    /// Serialize refreshes so concurrent visits after expiry share one fetch.
    pub async fn refresh_lock(&self) -> MutexGuard<'_, ()> {
        self.refresh.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> TrendingRepo {
        TrendingRepo {
            name: name.to_string(),
            ..serde_json::from_str("{}").unwrap()
        }
    }

    #[test]
    fn empty_cache_is_not_fresh() {
        let cache = TrendingCache::new(Duration::from_secs(3600));
        assert!(cache.fresh().unwrap().is_none());
    }

    #[test]
    fn stored_entry_is_fresh_within_ttl() {
        let cache = TrendingCache::new(Duration::from_secs(3600));
        cache.store(vec![repo("a"), repo("b")]).unwrap();

        let repos = cache.fresh().unwrap().expect("entry should be fresh");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "a");
    }

    #[test]
    fn entry_expires_after_ttl() {
        let cache = TrendingCache::new(Duration::ZERO);
        cache.store(vec![repo("a")]).unwrap();

        assert!(cache.fresh().unwrap().is_none());
    }

    #[test]
    fn fresh_returns_the_stored_list_unchanged() {
        let cache = TrendingCache::new(Duration::from_secs(3600));
        let stored = cache.store(vec![repo("x")]).unwrap();
        let read = cache.fresh().unwrap().unwrap();

        assert!(Arc::ptr_eq(&stored, &read));
    }

    #[test]
    fn store_replaces_previous_entry() {
        let cache = TrendingCache::new(Duration::from_secs(3600));
        cache.store(vec![repo("old")]).unwrap();
        cache.store(vec![repo("new")]).unwrap();

        let repos = cache.fresh().unwrap().unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "new");
    }
}
