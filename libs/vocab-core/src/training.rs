//! Training session setup: scope selection, live counts, and the final config.
//!
//! Every change to the scope recomputes the counts against the card
//! collection and then drops selected question types whose count fell to
//! zero. A [`TrainingSetup`] never holds a selection that references a
//! question type with no playable cards.

use crate::catalog::Unit;
use crate::counting::{count_eligible, max_cards_available, retain_available, CardCounts, Scope};
use crate::error::TrainingError;
use crate::types::{Card, CardClass, Language, QuestionType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Card limit offered before the user changes it.
pub const DEFAULT_CARD_LIMIT: usize = 20;

/// Smallest session size that can be requested.
pub const MIN_CARD_LIMIT: usize = 5;

/// Everything a session runtime needs to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub language: Language,
    pub scope: Scope,
    pub question_types: Vec<QuestionType>,
    pub card_limit: usize,
}

/// Interactive selection state behind the training setup screen.
#[derive(Debug, Clone)]
pub struct TrainingSetup {
    language: Language,
    scope: Scope,
    selected_types: Vec<QuestionType>,
    card_limit: usize,
    counts: CardCounts,
}

impl TrainingSetup {
    /// Empty selection for `language`: no lessons, all classes, no types.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            scope: Scope::default(),
            selected_types: Vec::new(),
            card_limit: DEFAULT_CARD_LIMIT,
            counts: count_eligible(&[], language, &Scope::default()),
        }
    }

    /// Rebuild a setup from a previously submitted selection.
    ///
    /// Question types that are invalid for the language or have no eligible
    /// cards are dropped, as if they had been toggled off.
    pub fn from_selection(
        language: Language,
        scope: Scope,
        selected_types: impl IntoIterator<Item = QuestionType>,
        card_limit: usize,
        cards: &[Card],
    ) -> Self {
        let mut setup = Self {
            language,
            scope: Scope::default(),
            selected_types: Vec::new(),
            card_limit,
            counts: CardCounts::new(),
        };
        for question in selected_types {
            if question.is_valid_for(language) && !setup.selected_types.contains(&question) {
                setup.selected_types.push(question);
            }
        }
        setup.set_scope(scope, cards);
        setup
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn selected_types(&self) -> &[QuestionType] {
        &self.selected_types
    }

    pub fn counts(&self) -> &CardCounts {
        &self.counts
    }

    pub fn card_limit(&self) -> usize {
        self.card_limit
    }

    /// Largest eligible count among the selected question types.
    pub fn max_cards_available(&self) -> usize {
        max_cards_available(&self.selected_types, &self.counts)
    }

    /// Recount against `cards` and drop types that no longer have cards.
    ///
    /// Returns the dropped question types.
    pub fn recompute(&mut self, cards: &[Card]) -> Vec<QuestionType> {
        self.counts = count_eligible(cards, self.language, &self.scope);
        let dropped = retain_available(&mut self.selected_types, &self.counts);
        if !dropped.is_empty() {
            tracing::debug!(?dropped, "deselected question types without eligible cards");
        }
        dropped
    }

    /// Replace the whole scope and recount.
    pub fn set_scope(&mut self, scope: Scope, cards: &[Card]) {
        self.scope = scope;
        self.recompute(cards);
    }

    pub fn toggle_lesson(&mut self, lesson_id: Uuid, cards: &[Card]) {
        if !self.scope.lesson_ids.remove(&lesson_id) {
            self.scope.lesson_ids.insert(lesson_id);
        }
        self.recompute(cards);
    }

    /// Select every lesson of `unit`, or deselect them all if they already
    /// are all selected.
    pub fn toggle_unit(&mut self, unit: &Unit, cards: &[Card]) {
        let all_selected = unit
            .lesson_ids()
            .all(|id| self.scope.lesson_ids.contains(&id));
        if all_selected {
            for id in unit.lesson_ids() {
                self.scope.lesson_ids.remove(&id);
            }
        } else {
            self.scope.lesson_ids.extend(unit.lesson_ids());
        }
        self.recompute(cards);
    }

    pub fn toggle_class(&mut self, class: CardClass, cards: &[Card]) {
        if !self.scope.classes.remove(&class) {
            self.scope.classes.insert(class);
        }
        self.recompute(cards);
    }

    /// Go back to "all classes".
    pub fn clear_classes(&mut self, cards: &[Card]) {
        self.scope.classes.clear();
        self.recompute(cards);
    }

    /// Toggle a question type.
    ///
    /// Selecting a type that is invalid for the language or has no eligible
    /// cards is refused and returns `false`.
    pub fn toggle_question_type(&mut self, question: QuestionType) -> bool {
        if let Some(position) = self.selected_types.iter().position(|q| *q == question) {
            self.selected_types.remove(position);
            return true;
        }
        if self.counts.get(&question).copied().unwrap_or(0) == 0 {
            return false;
        }
        self.selected_types.push(question);
        true
    }

    pub fn set_card_limit(&mut self, limit: usize) {
        self.card_limit = limit;
    }

    /// Card limit clamped to what the current selection can supply.
    pub fn effective_card_limit(&self) -> usize {
        let upper = self.max_cards_available().max(MIN_CARD_LIMIT);
        self.card_limit.clamp(MIN_CARD_LIMIT, upper)
    }

    /// Freeze the selection into a session config.
    pub fn build_config(&self) -> Result<TrainingConfig, TrainingError> {
        if self.selected_types.is_empty() {
            return Err(TrainingError::NoQuestionTypes);
        }
        Ok(TrainingConfig {
            language: self.language,
            scope: self.scope.clone(),
            question_types: self.selected_types.clone(),
            card_limit: self.effective_card_limit(),
        })
    }
}
