//! Training setup endpoints

use axum::{extract::State, Json};
use vocab_core::{TrainingSetup, DEFAULT_CARD_LIMIT};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

fn setup_for(selection: &TrainingSelection, cards: &[Card]) -> TrainingSetup {
    TrainingSetup::from_selection(
        selection.language,
        selection.scope.clone(),
        selection.known_question_types(),
        selection.card_limit.unwrap_or(DEFAULT_CARD_LIMIT),
        cards,
    )
}

/// POST /api/training/counts
///
/// Eligible counts for the selection. Requested question types without
/// eligible cards, or with a name no question type has, come back in
/// `dropped`.
pub async fn counts(
    State(state): State<AppState>,
    Json(selection): Json<TrainingSelection>,
) -> Json<CountsResponse> {
    let library = state.library.read().await;
    let setup = setup_for(&selection, library.store.cards());

    let selected = setup.selected_types().to_vec();
    let mut dropped: Vec<String> = Vec::new();
    for name in &selection.question_types {
        let kept = QuestionType::from_str(name).is_some_and(|q| selected.contains(&q));
        if !kept && !dropped.contains(name) {
            dropped.push(name.clone());
        }
    }

    Json(CountsResponse {
        counts: setup.counts().clone(),
        max_cards_available: setup.max_cards_available(),
        card_limit: setup.effective_card_limit(),
        selected,
        dropped,
    })
}

/// POST /api/training/config
pub async fn config(
    State(state): State<AppState>,
    Json(selection): Json<TrainingSelection>,
) -> Result<Json<TrainingConfig>> {
    let library = state.library.read().await;
    let config = setup_for(&selection, library.store.cards()).build_config()?;

    tracing::info!(
        language = config.language.as_str(),
        lessons = config.scope.lesson_ids.len(),
        question_types = config.question_types.len(),
        card_limit = config.card_limit,
        "built training config"
    );
    Ok(Json(config))
}
