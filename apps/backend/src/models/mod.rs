//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::{
    Card, CardCounts, ExtractionRequest, Language, Lesson, ManualEntry, QuestionType, Scope,
    TrainingConfig, Unit,
};

// === Catalog Types ===

/// Body for creating or renaming a unit or lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitListResponse {
    pub units: Vec<Unit>,
}

/// Deleted unit, and how many cards still point at its lessons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUnitResponse {
    pub unit: Unit,
    pub orphaned_cards: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteLessonResponse {
    pub lesson: Lesson,
    pub orphaned_cards: usize,
}

// === Card Types ===

/// Query string of `GET /api/cards`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardListQuery {
    pub language: Option<Language>,
    pub lesson_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<Card>,
    pub total: usize,
}

/// Manual entry destined for a lesson
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub language: Language,
    pub unit_id: Uuid,
    pub lesson_id: Uuid,
    #[serde(flatten)]
    pub entry: ManualEntry,
}

/// The stored card after merging a manual entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardResponse {
    pub card: Card,
    /// False when an existing card with the same word and class absorbed the entry
    pub inserted: bool,
    pub enriched: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub extractor: String,
    pub extracted: usize,
    pub inserted: Vec<Uuid>,
    pub enriched: Vec<Uuid>,
    pub total_cards: usize,
}

// === Training Types ===

/// Current training selection, sent on every change of the setup screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSelection {
    pub language: Language,
    #[serde(default)]
    pub scope: Scope,
    /// Question type names; unknown names are dropped, never rejected
    #[serde(default)]
    pub question_types: Vec<String>,
    #[serde(default)]
    pub card_limit: Option<usize>,
}

impl TrainingSelection {
    /// Requested question types that have a known name
    pub fn known_question_types(&self) -> impl Iterator<Item = QuestionType> + '_ {
        self.question_types
            .iter()
            .filter_map(|name| QuestionType::from_str(name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountsResponse {
    pub counts: CardCounts,
    /// Requested types that are still selectable
    pub selected: Vec<QuestionType>,
    /// Requested names that were deselected, including unknown ones
    pub dropped: Vec<String>,
    pub max_cards_available: usize,
    pub card_limit: usize,
}
