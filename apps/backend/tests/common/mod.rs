//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wiring the full router to an in-memory snapshot store
//! - Extractors that fail on purpose
//! - Helpers for creating units and lessons through the API

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use vocab_backend::services::extraction::SimulatedExtractor;
use vocab_backend::services::storage::{LibrarySnapshot, MemoryStore};
use vocab_backend::AppState;
use vocab_core::{Card, ExtractionError, ExtractionRequest, Extractor};

/// Test context holding the app state and the store it saves to.
pub struct TestContext {
    pub state: AppState,
    pub storage: Arc<MemoryStore>,
}

impl TestContext {
    /// Context with the simulated extractor and no artificial delay.
    pub async fn new() -> Self {
        Self::with_extractor(Arc::new(SimulatedExtractor::new(Duration::ZERO))).await
    }

    pub async fn with_extractor(extractor: Arc<dyn Extractor>) -> Self {
        Self::build(MemoryStore::new(), extractor).await
    }

    /// Context whose store already holds `snapshot`.
    pub async fn with_snapshot(snapshot: LibrarySnapshot) -> Self {
        Self::build(
            MemoryStore::with_snapshot(snapshot),
            Arc::new(SimulatedExtractor::new(Duration::ZERO)),
        )
        .await
    }

    async fn build(storage: MemoryStore, extractor: Arc<dyn Extractor>) -> Self {
        let storage = Arc::new(storage);
        let state = AppState::load(storage.clone(), extractor)
            .await
            .expect("Failed to load in-memory library");
        Self { state, storage }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        vocab_backend::router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// What the backend last persisted.
    pub async fn saved_snapshot(&self) -> Option<LibrarySnapshot> {
        self.storage.snapshot().await
    }
}

/// Extractor whose upstream service always fails.
pub struct FailingExtractor;

#[async_trait]
impl Extractor for FailingExtractor {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn extract(&self, _request: &ExtractionRequest) -> Result<Vec<Card>, ExtractionError> {
        Err(ExtractionError::Service("upstream unavailable".to_string()))
    }
}

/// Create a unit with one lesson and return their IDs.
pub async fn create_unit_with_lesson(
    server: &TestServer,
    unit_name: &str,
    lesson_name: &str,
) -> (Uuid, Uuid) {
    let unit_id = create_unit(server, unit_name).await;
    let lesson_id = create_lesson(server, unit_id, lesson_name).await;
    (unit_id, lesson_id)
}

pub async fn create_unit(server: &TestServer, name: &str) -> Uuid {
    let response = server
        .post("/api/units")
        .json(&fixtures::name_request(name))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json::<serde_json::Value>())
}

pub async fn create_lesson(server: &TestServer, unit_id: Uuid, name: &str) -> Uuid {
    let response = server
        .post(&format!("/api/units/{}/lessons", unit_id))
        .json(&fixtures::name_request(name))
        .await;
    response.assert_status(StatusCode::CREATED);
    id_of(&response.json::<serde_json::Value>())
}

/// The `id` field of a JSON object.
pub fn id_of(value: &serde_json::Value) -> Uuid {
    value["id"]
        .as_str()
        .expect("id field")
        .parse()
        .expect("id is a UUID")
}
