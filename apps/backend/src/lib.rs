pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vocab_core::Extractor;

use crate::config::Config;
use crate::services::extraction::SimulatedExtractor;
use crate::services::storage::{JsonFileStore, MemoryStore, SnapshotStore, StorageError};
use crate::state::Library;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<RwLock<Library>>,
    pub extractor: Arc<dyn Extractor>,
    pub storage: Arc<dyn SnapshotStore>,
}

impl AppState {
    /// Build the state from whatever the snapshot store holds.
    pub async fn load(
        storage: Arc<dyn SnapshotStore>,
        extractor: Arc<dyn Extractor>,
    ) -> Result<Self, StorageError> {
        let library = storage
            .load()
            .await?
            .map(Library::from_snapshot)
            .unwrap_or_default();

        Ok(Self {
            library: Arc::new(RwLock::new(library)),
            extractor,
            storage,
        })
    }

    /// Apply `change` under the write lock and persist the result.
    ///
    /// The change runs on a copy; the shared library is replaced only once
    /// the copy has been saved, so a failed change or save leaves it as it was.
    pub async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Library) -> error::Result<T>,
    ) -> error::Result<T> {
        let mut library = self.library.write().await;
        let mut next = library.clone();
        let value = change(&mut next)?;
        self.storage.save(&next.snapshot()).await?;
        *library = next;
        Ok(value)
    }
}

/// All API routes with tracing and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Unit routes
        .route(
            "/api/units",
            get(routes::units::list).post(routes::units::create),
        )
        .route(
            "/api/units/:unit_id",
            put(routes::units::rename).delete(routes::units::delete),
        )
        // Lesson routes
        .route(
            "/api/units/:unit_id/lessons",
            post(routes::units::create_lesson),
        )
        .route(
            "/api/units/:unit_id/lessons/:lesson_id",
            put(routes::units::rename_lesson).delete(routes::units::delete_lesson),
        )
        // Card routes
        .route(
            "/api/cards",
            get(routes::cards::list).post(routes::cards::create),
        )
        .route("/api/cards/import", post(routes::cards::import))
        // Training routes
        .route("/api/training/counts", post(routes::training::counts))
        .route("/api/training/config", post(routes::training::config))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    logging::init_tracing(&config.log_level);

    let storage: Arc<dyn SnapshotStore> = match &config.data_dir {
        Some(dir) => {
            let store = JsonFileStore::new(dir);
            tracing::info!(path = %store.path().display(), "Using file snapshot store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATA_DIR not set, library is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };
    let extractor = Arc::new(SimulatedExtractor::new(config.extraction_delay));

    tracing::info!("Loading library...");
    let state = AppState::load(storage, extractor).await?;

    let app = router(state);
    let addr = config.bind_addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
