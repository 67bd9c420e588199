use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{Profile, ProfileId};
use crate::services::store::StoreError;

const PROFILE_COLUMNS: &str = r#"id, name, location, profile_image, bio, skills, resources, "values""#;

/// PostgreSQL profile source
///
/// Reads the platform's `users` table. The table is owned by the profile
/// management application; this client never writes to it.
pub struct PostgresProfileStore {
    pool: PgPool,
}

impl PostgresProfileStore {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a client without opening a connection up front
    ///
    /// Connection errors surface on the first query instead of at startup.
    pub fn new_lazy(database_url: &str, max_connections: u32, acquire_timeout_secs: u64) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Fetch a profile by id
    ///
    /// Rows are keyed by serial integers, so text ids never match.
    pub async fn get_profile(&self, id: &ProfileId) -> Result<Option<Profile>, StoreError> {
        let ProfileId::Int(raw_id) = id else {
            return Ok(None);
        };
        let Ok(raw_id) = i32::try_from(*raw_id) else {
            return Ok(None);
        };

        let query = format!("SELECT {} FROM users WHERE id = $1", PROFILE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(raw_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(profile_from_row).transpose()?)
    }

    /// Fetch all profiles
    pub async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let query = format!("SELECT {} FROM users ORDER BY id", PROFILE_COLUMNS);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        let profiles = rows
            .iter()
            .map(profile_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} profiles from PostgreSQL", profiles.len());

        Ok(profiles)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    let id: i32 = row.try_get("id")?;
    let skills: Json<Vec<String>> = row.try_get("skills")?;
    let resources: Json<Vec<String>> = row.try_get("resources")?;
    let values: Json<Vec<String>> = row.try_get("values")?;

    Ok(Profile {
        id: ProfileId::Int(i64::from(id)),
        name: row.try_get("name")?,
        location: row.try_get("location")?,
        bio: row.try_get("bio")?,
        profile_image: row.try_get("profile_image")?,
        skills: skills.0,
        resources: resources.0,
        values: values.0,
    })
}
