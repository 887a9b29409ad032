//! Counting eligible cards per question type for a filter selection.

use crate::eligibility::is_eligible;
use crate::types::{Card, CardClass, Language, QuestionType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

/// Eligible card count per question type.
///
/// Only holds the question types valid for the language it was computed for.
pub type CardCounts = BTreeMap<QuestionType, usize>;

/// Lesson and word-class filter applied before counting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Selected lessons. Empty means nothing is in scope.
    #[serde(default)]
    pub lesson_ids: HashSet<Uuid>,
    /// Selected word classes. Empty means every class.
    #[serde(default)]
    pub classes: HashSet<CardClass>,
}

impl Scope {
    pub fn new(
        lesson_ids: impl IntoIterator<Item = Uuid>,
        classes: impl IntoIterator<Item = CardClass>,
    ) -> Self {
        Self {
            lesson_ids: lesson_ids.into_iter().collect(),
            classes: classes.into_iter().collect(),
        }
    }

    /// Whether `card` passes the lesson and class filter.
    pub fn contains(&self, card: &Card) -> bool {
        self.lesson_ids.contains(&card.lesson_id)
            && (self.classes.is_empty() || self.classes.contains(&card.class))
    }
}

/// In-scope cards eligible for `question`.
///
/// This is what a session draws its questions from; its length always equals
/// the matching entry of [`count_eligible`].
pub fn eligible_cards<'a>(
    cards: &'a [Card],
    scope: &'a Scope,
    question: QuestionType,
) -> impl Iterator<Item = &'a Card> + 'a {
    cards
        .iter()
        .filter(move |card| scope.contains(card) && is_eligible(card, question))
}

/// Count in-scope eligible cards for every question type of `language`.
pub fn count_eligible(cards: &[Card], language: Language, scope: &Scope) -> CardCounts {
    let questions = QuestionType::for_language(language);
    let mut counts: CardCounts = questions.iter().map(|q| (*q, 0)).collect();

    if scope.lesson_ids.is_empty() {
        return counts;
    }

    for card in cards.iter().filter(|card| scope.contains(card)) {
        for question in questions {
            if is_eligible(card, *question) {
                *counts.entry(*question).or_default() += 1;
            }
        }
    }

    counts
}

/// Drop selected question types that have no eligible cards.
///
/// Must be applied to a selection after every recompute of `counts`; a
/// selection never references a type with a zero (or missing) count.
/// Returns the types that were dropped.
pub fn retain_available(
    selection: &mut Vec<QuestionType>,
    counts: &CardCounts,
) -> Vec<QuestionType> {
    let mut dropped = Vec::new();
    selection.retain(|q| {
        let keep = counts.get(q).copied().unwrap_or(0) > 0;
        if !keep {
            dropped.push(*q);
        }
        keep
    });
    dropped
}

/// Largest eligible count among the selected question types.
pub fn max_cards_available(selection: &[QuestionType], counts: &CardCounts) -> usize {
    selection
        .iter()
        .filter_map(|q| counts.get(q).copied())
        .max()
        .unwrap_or(0)
}
