use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Profile, ProfileId};
use crate::services::postgres::PostgresProfileStore;

/// Errors that can occur when reading profiles
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed data error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable in-memory profile snapshot, usually loaded from a JSON seed file
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<Vec<Profile>>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    /// Load profiles from a JSON file containing an array of profiles
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let profiles: Vec<Profile> = serde_json::from_slice(&bytes)?;

        tracing::info!(
            "Loaded {} profiles from {}",
            profiles.len(),
            path.as_ref().display()
        );

        Ok(Self::new(profiles))
    }

    /// Look up a profile; numeric text ids in seed data match integer lookups
    pub fn get_profile(&self, id: &ProfileId) -> Option<Profile> {
        self.profiles.iter().find(|p| p.id.refers_to(id)).cloned()
    }

    pub fn all_profiles(&self) -> Vec<Profile> {
        self.profiles.to_vec()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Source of profile snapshots
pub enum ProfileStore {
    Memory(InMemoryProfileStore),
    Postgres(PostgresProfileStore),
}

impl ProfileStore {
    /// Fetch a single profile, `None` if it does not exist
    pub async fn get_profile(&self, id: &ProfileId) -> Result<Option<Profile>, StoreError> {
        match self {
            ProfileStore::Memory(store) => Ok(store.get_profile(id)),
            ProfileStore::Postgres(store) => store.get_profile(id).await,
        }
    }

    /// Fetch every profile that can be offered as a candidate
    pub async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        match self {
            ProfileStore::Memory(store) => Ok(store.all_profiles()),
            ProfileStore::Postgres(store) => store.all_profiles().await,
        }
    }

    pub async fn health_check(&self) -> bool {
        match self {
            ProfileStore::Memory(_) => true,
            ProfileStore::Postgres(store) => store.health_check().await.unwrap_or(false),
        }
    }
}
