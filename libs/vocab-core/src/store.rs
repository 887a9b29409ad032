//! The canonical card collection.

use crate::counting::{count_eligible, CardCounts, Scope};
use crate::reconcile::{merge_cards, IdentityKey, MergeReport};
use crate::types::{Card, Language};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Owner of the card collection.
///
/// Writes go through [`CardStore::merge`], which needs `&mut self`; counting
/// only needs `&self`. The collection holds at most one card per identity key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously saved cards.
    ///
    /// The cards are merged into an empty store, so a collection saved with
    /// duplicate keys comes back deduplicated.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let outcome = merge_cards(Vec::new(), cards);
        Self {
            cards: outcome.cards,
        }
    }

    /// Merge a batch of new cards into the collection.
    pub fn merge(&mut self, batch: impl IntoIterator<Item = Card>) -> MergeReport {
        let existing = std::mem::take(&mut self.cards);
        let outcome = merge_cards(existing, batch);
        self.cards = outcome.cards;

        tracing::info!(
            inserted = outcome.report.inserted.len(),
            enriched = outcome.report.enriched.len(),
            total = self.cards.len(),
            "merged card batch"
        );

        outcome.report
    }

    /// Eligible card counts for a language and filter selection.
    pub fn query(&self, language: Language, scope: &Scope) -> CardCounts {
        count_eligible(&self.cards, language, scope)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// The card holding `key`, if any.
    pub fn find_by_key(&self, key: &IdentityKey) -> Option<&Card> {
        self.cards.iter().find(|card| IdentityKey::of(card) == *key)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards whose home lesson is one of `lesson_ids`.
    pub fn count_in_lessons(&self, lesson_ids: &HashSet<Uuid>) -> usize {
        self.cards
            .iter()
            .filter(|card| lesson_ids.contains(&card.lesson_id))
            .count()
    }
}

impl From<Vec<Card>> for CardStore {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<CardStore> for Vec<Card> {
    fn from(store: CardStore) -> Self {
        store.cards
    }
}
