// Service exports
pub mod cache;
pub mod postgres;
pub mod repository;
pub mod store;

pub use cache::{CacheManager, CacheKey, CacheStats};
pub use postgres::PostgresProfileStore;
pub use repository::ProfileRepository;
pub use store::{InMemoryProfileStore, ProfileStore, StoreError};
