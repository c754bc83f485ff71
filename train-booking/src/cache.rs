//! Caching layer for the station directory.
//!
//! The station set changes rarely but is requested on every booking
//! screen visit. A short TTL cache keeps repeat visits cheap while still
//! replacing the set wholesale once the entry expires; callers always see
//! an immutable snapshot, never a partially refreshed one.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::stations::{StationClient, StationDirectory, StationError};

/// Configuration for the directory cache.
#[derive(Debug, Clone)]
pub struct DirectoryCacheConfig {
    /// TTL for a cached directory snapshot.
    pub ttl: Duration,

    /// Maximum number of cached snapshots (one per base URL).
    pub max_capacity: u64,
}

impl Default for DirectoryCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 8,
        }
    }
}

/// Station client with a TTL-cached directory.
///
/// Wraps a [`StationClient`] and caches the assembled [`StationDirectory`],
/// keyed by the client's base URL.
pub struct CachedStationClient {
    client: StationClient,
    directories: MokaCache<String, Arc<StationDirectory>>,
}

impl CachedStationClient {
    /// Create a new cached client.
    pub fn new(client: StationClient, config: &DirectoryCacheConfig) -> Self {
        let directories = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            directories,
        }
    }

    /// Get the station directory, fetching it if no live snapshot exists.
    ///
    /// Errors are not cached; a failed fetch leaves the cache untouched so
    /// the next call retries.
    pub async fn directory(&self) -> Result<Arc<StationDirectory>, StationError> {
        let key = self.client.base_url().to_string();

        if let Some(snapshot) = self.directories.get(&key).await {
            return Ok(snapshot);
        }

        let stations = self.client.fetch_all().await?;
        let snapshot = Arc::new(StationDirectory::from_dtos(stations)?);

        self.directories.insert(key, snapshot.clone()).await;

        Ok(snapshot)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &StationClient {
        &self.client
    }

    /// Number of live snapshots.
    pub fn entry_count(&self) -> u64 {
        self.directories.entry_count()
    }

    /// Drop all cached snapshots, forcing the next call to refetch.
    pub fn invalidate(&self) {
        self.directories.invalidate_all();
    }
}
