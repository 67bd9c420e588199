use std::sync::Arc;

use crate::models::{Profile, ProfileId};
use crate::services::cache::{CacheManager, CacheStats};
use crate::services::store::{ProfileStore, StoreError};

/// Read-through access to profiles: cache first, then the store
pub struct ProfileRepository {
    store: ProfileStore,
    cache: CacheManager,
}

impl ProfileRepository {
    pub fn new(store: ProfileStore, cache: CacheManager) -> Self {
        Self { store, cache }
    }

    /// Fetch a single profile
    pub async fn profile(&self, id: &ProfileId) -> Result<Option<Arc<Profile>>, StoreError> {
        if let Some(profile) = self.cache.get_profile(id).await {
            return Ok(Some(profile));
        }

        match self.store.get_profile(id).await? {
            Some(profile) => {
                let profile = Arc::new(profile);
                self.cache.set_profile(Arc::clone(&profile)).await;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    /// Fetch the full candidate pool
    pub async fn candidate_pool(&self) -> Result<Arc<Vec<Profile>>, StoreError> {
        if let Some(pool) = self.cache.get_pool().await {
            tracing::trace!("Candidate pool served from cache ({} profiles)", pool.len());
            return Ok(pool);
        }

        let pool = Arc::new(self.store.all_profiles().await?);
        self.cache.set_pool(Arc::clone(&pool)).await;

        tracing::debug!("Candidate pool loaded from store ({} profiles)", pool.len());
        Ok(pool)
    }

    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }

    /// Forget cached snapshots so the next read goes to the store
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
