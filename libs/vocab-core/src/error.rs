//! Error types for vocab-core.
//!
//! Merging and counting are total and have no error type. These cover the
//! catalog, training setup, and the extraction collaborator.

use thiserror::Error;
use uuid::Uuid;

/// Errors from unit and lesson management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("unit not found: {0}")]
    UnitNotFound(Uuid),

    #[error("lesson {lesson_id} not found in unit {unit_id}")]
    LessonNotFound { unit_id: Uuid, lesson_id: Uuid },
}

/// Errors when turning a training selection into a session config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("no question type with eligible cards is selected")]
    NoQuestionTypes,
}

/// Failures reported by the extraction collaborator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no source files were provided")]
    EmptyRequest,

    #[error("unsupported file: {name}")]
    UnsupportedFile { name: String },

    #[error("extraction service failed: {0}")]
    Service(String),
}
