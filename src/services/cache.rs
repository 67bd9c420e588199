use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Profile, ProfileId};

/// In-process profile cache
///
/// Holds short-lived snapshots of single profiles and of the full candidate
/// pool in front of the profile store. Entries expire after the configured
/// TTL; nothing is shared between instances.
pub struct CacheManager {
    profiles: Cache<String, Arc<Profile>>,
    pools: Cache<String, Arc<Vec<Profile>>>,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let profiles = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        let pools = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { profiles, pools }
    }

    pub async fn get_profile(&self, id: &ProfileId) -> Option<Arc<Profile>> {
        let key = CacheKey::profile(id);
        let hit = self.profiles.get(&key).await;
        tracing::trace!("Profile cache {}: {}", if hit.is_some() { "hit" } else { "miss" }, key);
        hit
    }

    pub async fn set_profile(&self, profile: Arc<Profile>) {
        self.profiles.insert(CacheKey::profile(&profile.id), profile).await;
    }

    pub async fn get_pool(&self) -> Option<Arc<Vec<Profile>>> {
        self.pools.get(CacheKey::POOL).await
    }

    pub async fn set_pool(&self, pool: Arc<Vec<Profile>>) {
        self.pools.insert(CacheKey::POOL.to_string(), pool).await;
    }

    /// Drop every cached entry
    pub fn invalidate_all(&self) {
        self.profiles.invalidate_all();
        self.pools.invalidate_all();
        tracing::debug!("Profile cache invalidated");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            profile_entries: self.profiles.entry_count(),
            pool_entries: self.pools.entry_count(),
        }
    }
}

/// Cache statistics (approximate, updated lazily by moka)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub profile_entries: u64,
    pub pool_entries: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key of the full candidate pool
    pub const POOL: &'static str = "profiles:all";

    /// Build a cache key for a single profile
    pub fn profile(id: &ProfileId) -> String {
        format!("profile:{}", id)
    }
}
