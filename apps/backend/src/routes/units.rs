//! Unit and lesson endpoints

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/units
pub async fn list(State(state): State<AppState>) -> Json<UnitListResponse> {
    let library = state.library.read().await;
    Json(UnitListResponse {
        units: library.catalog.units().to_vec(),
    })
}

/// POST /api/units
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NameRequest>,
) -> Result<(StatusCode, Json<Unit>)> {
    let unit = state
        .mutate(|library| Ok(library.catalog.add_unit(&req.name)?.clone()))
        .await?;
    tracing::info!(unit_id = %unit.id, name = %unit.name, "created unit");
    Ok((StatusCode::CREATED, Json(unit)))
}

/// PUT /api/units/:unit_id
pub async fn rename(
    State(state): State<AppState>,
    Path(unit_id): Path<Uuid>,
    Json(req): Json<NameRequest>,
) -> Result<Json<Unit>> {
    let unit = state
        .mutate(|library| Ok(library.catalog.rename_unit(unit_id, &req.name)?.clone()))
        .await?;
    Ok(Json(unit))
}

/// DELETE /api/units/:unit_id
///
/// Cards filed under the unit's lessons are kept.
pub async fn delete(
    State(state): State<AppState>,
    Path(unit_id): Path<Uuid>,
) -> Result<Json<DeleteUnitResponse>> {
    let response = state
        .mutate(|library| {
            let unit = library.catalog.delete_unit(unit_id)?;
            let lesson_ids: HashSet<Uuid> = unit.lesson_ids().collect();
            let orphaned_cards = library.store.count_in_lessons(&lesson_ids);
            Ok(DeleteUnitResponse {
                unit,
                orphaned_cards,
            })
        })
        .await?;

    tracing::info!(
        unit_id = %unit_id,
        orphaned_cards = response.orphaned_cards,
        "deleted unit"
    );
    Ok(Json(response))
}

/// POST /api/units/:unit_id/lessons
pub async fn create_lesson(
    State(state): State<AppState>,
    Path(unit_id): Path<Uuid>,
    Json(req): Json<NameRequest>,
) -> Result<(StatusCode, Json<Lesson>)> {
    let lesson = state
        .mutate(|library| Ok(library.catalog.add_lesson(unit_id, &req.name)?.clone()))
        .await?;
    tracing::info!(unit_id = %unit_id, lesson_id = %lesson.id, "created lesson");
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// PUT /api/units/:unit_id/lessons/:lesson_id
pub async fn rename_lesson(
    State(state): State<AppState>,
    Path((unit_id, lesson_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<NameRequest>,
) -> Result<Json<Lesson>> {
    let lesson = state
        .mutate(|library| {
            Ok(library
                .catalog
                .rename_lesson(unit_id, lesson_id, &req.name)?
                .clone())
        })
        .await?;
    Ok(Json(lesson))
}

/// DELETE /api/units/:unit_id/lessons/:lesson_id
pub async fn delete_lesson(
    State(state): State<AppState>,
    Path((unit_id, lesson_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DeleteLessonResponse>> {
    let response = state
        .mutate(|library| {
            let lesson = library.catalog.delete_lesson(unit_id, lesson_id)?;
            let orphaned_cards = library.store.count_in_lessons(&HashSet::from([lesson.id]));
            Ok(DeleteLessonResponse {
                lesson,
                orphaned_cards,
            })
        })
        .await?;

    tracing::info!(
        lesson_id = %lesson_id,
        orphaned_cards = response.orphaned_cards,
        "deleted lesson"
    );
    Ok(Json(response))
}
