use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use coop_match::config::{LoggingSettings, Settings};
use coop_match::core::MatchEngine;
use coop_match::models::ScoringWeights;
use coop_match::routes::{self, matches::AppState};
use coop_match::services::{
    CacheManager, InMemoryProfileStore, PostgresProfileStore, ProfileRepository, ProfileStore,
};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn build_store(settings: &Settings) -> io::Result<ProfileStore> {
    match settings.database.url.as_deref() {
        Some(url) => {
            let store = PostgresProfileStore::new(
                url,
                settings.database.max_connections,
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;

            info!(
                "PostgreSQL profile store initialized (max: {} connections)",
                settings.database.max_connections
            );
            Ok(ProfileStore::Postgres(store))
        }
        None => {
            let store = InMemoryProfileStore::from_file(&settings.seed.profiles_path)
                .await
                .map_err(|e| {
                    error!("Failed to load seed profiles from {}: {}", settings.seed.profiles_path, e);
                    io::Error::new(io::ErrorKind::Other, e.to_string())
                })?;

            info!("In-memory profile store initialized ({} profiles)", store.len());
            Ok(ProfileStore::Memory(store))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting Coop Match service...");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let engine = MatchEngine::new(weights).map_err(|e| {
        error!("Invalid scoring configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Match engine initialized with weights: {:?}", weights);

    let store = build_store(&settings).await?;
    let cache = CacheManager::new(settings.cache.max_entries, settings.cache.ttl_secs);

    info!(
        "Profile cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let app_state = AppState {
        profiles: Arc::new(ProfileRepository::new(store, cache)),
        engine,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
