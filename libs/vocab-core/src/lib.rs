//! Core vocabulary card library shared by the backend and any client.
//!
//! Provides:
//! - French article splitting for raw words
//! - The eligibility rules deciding which questions a card can be asked as
//! - Merging new cards into a collection without duplicates or data loss
//! - Eligible card counts per question type for a lesson/class selection
//! - Training setup, unit/lesson catalog, manual entry and the extraction contract

pub mod article;
pub mod catalog;
pub mod counting;
pub mod eligibility;
pub mod entry;
pub mod error;
pub mod extraction;
pub mod reconcile;
pub mod store;
pub mod training;
pub mod types;

pub use article::{split_french_article, ArticleSplit};
pub use catalog::{Catalog, Lesson, Unit};
pub use counting::{
    count_eligible, eligible_cards, max_cards_available, retain_available, CardCounts, Scope,
};
pub use eligibility::{is_eligible, is_eligible_by_name};
pub use entry::ManualEntry;
pub use error::{CatalogError, ExtractionError, TrainingError};
pub use extraction::{ExtractionRequest, Extractor, SourceFile};
pub use reconcile::{merge_cards, IdentityKey, MergeOutcome, MergeReport};
pub use store::CardStore;
pub use training::{TrainingConfig, TrainingSetup, DEFAULT_CARD_LIMIT, MIN_CARD_LIMIT};
pub use types::{
    Card, CardClass, Conjugations, Gender, Language, Person, QuestionType, VerbType,
    PERSON_COUNT, UNKNOWN_FORM,
};
