//! Card endpoints: listing, manual entry, and import through the extractor

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use vocab_core::{CatalogError, IdentityKey};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::state::Library;
use crate::AppState;

/// GET /api/cards
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CardListQuery>,
) -> Json<CardListResponse> {
    let library = state.library.read().await;
    let cards: Vec<Card> = library
        .store
        .cards()
        .iter()
        .filter(|card| query.language.map_or(true, |language| card.language == language))
        .filter(|card| query.lesson_id.map_or(true, |lesson_id| card.lesson_id == lesson_id))
        .cloned()
        .collect();

    Json(CardListResponse {
        total: cards.len(),
        cards,
    })
}

/// POST /api/cards
///
/// Merged like a one-card import: an entry whose word and class already
/// exist only fills in what the stored card is missing.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CreateCardResponse>)> {
    if req.entry.word.trim().is_empty() {
        return Err(ApiError::BadRequest("word must not be empty".to_string()));
    }
    if req.entry.translation.trim().is_empty() {
        return Err(ApiError::BadRequest("translation must not be empty".to_string()));
    }

    let response = state
        .mutate(|library| {
            ensure_lesson(library, req.unit_id, req.lesson_id)?;

            let card = req.entry.into_card(req.language, req.unit_id, req.lesson_id);
            let key = IdentityKey::of(&card);
            let word = card.word.clone();
            let report = library.store.merge([card]);

            let stored = library
                .store
                .find_by_key(&key)
                .cloned()
                .ok_or_else(|| ApiError::NotFound(format!("card {}", word)))?;
            Ok(CreateCardResponse {
                inserted: report.inserted.contains(&stored.id),
                enriched: report.enriched.contains(&stored.id),
                card: stored,
            })
        })
        .await?;

    let status = if response.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)))
}

/// POST /api/cards/import
///
/// The extractor runs without holding the library lock. Its batch is merged
/// only if the whole call succeeded.
pub async fn import(
    State(state): State<AppState>,
    Json(req): Json<ExtractionRequest>,
) -> Result<Json<ImportResponse>> {
    ensure_lesson(&*state.library.read().await, req.unit_id, req.lesson_id)?;

    tracing::info!(
        extractor = state.extractor.name(),
        files = req.files.len(),
        language = req.language.as_str(),
        "starting extraction"
    );

    let batch = state.extractor.extract(&req).await.map_err(|err| {
        tracing::warn!(extractor = state.extractor.name(), error = %err, "extraction failed");
        err
    })?;
    let extracted = batch.len();

    let response = state
        .mutate(|library| {
            // The lesson may have been deleted while extraction was running.
            ensure_lesson(library, req.unit_id, req.lesson_id)?;
            let report = library.store.merge(batch);
            Ok(ImportResponse {
                extractor: state.extractor.name().to_string(),
                extracted,
                inserted: report.inserted,
                enriched: report.enriched,
                total_cards: library.store.len(),
            })
        })
        .await?;

    Ok(Json(response))
}

fn ensure_lesson(
    library: &Library,
    unit_id: Uuid,
    lesson_id: Uuid,
) -> std::result::Result<(), CatalogError> {
    if library.catalog.unit(unit_id).is_none() {
        return Err(CatalogError::UnitNotFound(unit_id));
    }
    if !library.catalog.contains_lesson(unit_id, lesson_id) {
        return Err(CatalogError::LessonNotFound { unit_id, lesson_id });
    }
    Ok(())
}
