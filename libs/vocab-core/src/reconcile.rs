//! Merging new cards into an existing collection.
//!
//! Cards are deduplicated by [`IdentityKey`]. A new card that matches an
//! existing entry never replaces it; it can only fill in data the entry is
//! missing. Merging the same batch twice gives the same collection as merging
//! it once.

use crate::types::{Card, CardClass};
use std::collections::HashMap;
use uuid::Uuid;

/// Key under which two cards count as the same lexical entry.
///
/// Language, unit and lesson are not part of the key, so identical spellings
/// across lessons collapse into one card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    word: String,
    class: CardClass,
}

impl IdentityKey {
    pub fn new(word: &str, class: CardClass) -> Self {
        Self {
            word: word.to_lowercase(),
            class,
        }
    }

    pub fn of(card: &Card) -> Self {
        Self::new(&card.word, card.class)
    }
}

/// Which cards a merge inserted and which it enriched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// IDs of cards appended as new entries.
    pub inserted: Vec<Uuid>,
    /// IDs of existing entries whose data changed.
    pub enriched: Vec<Uuid>,
}

impl MergeReport {
    /// Whether the merge changed the collection at all.
    pub fn is_noop(&self) -> bool {
        self.inserted.is_empty() && self.enriched.is_empty()
    }
}

/// Result of [`merge_cards`].
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub cards: Vec<Card>,
    pub report: MergeReport,
}

/// Merge `batch` into `existing`, in batch order.
///
/// Each new card is matched against the collection as it grows, so two cards
/// in the same batch with the same key also collapse into one. Unmatched cards
/// are appended unchanged; matched ones go through [`enrich`].
pub fn merge_cards(existing: Vec<Card>, batch: impl IntoIterator<Item = Card>) -> MergeOutcome {
    let mut cards = existing;
    let mut index: HashMap<IdentityKey, usize> = HashMap::with_capacity(cards.len());
    for (position, card) in cards.iter().enumerate() {
        index.entry(IdentityKey::of(card)).or_insert(position);
    }

    let mut report = MergeReport::default();
    for incoming in batch {
        let key = IdentityKey::of(&incoming);
        match index.get(&key).copied() {
            Some(position) => {
                let target = &mut cards[position];
                if enrich(target, incoming) && !report.enriched.contains(&target.id) {
                    report.enriched.push(target.id);
                }
            }
            None => {
                report.inserted.push(incoming.id);
                index.insert(key, cards.len());
                cards.push(incoming);
            }
        }
    }

    MergeOutcome { cards, report }
}

/// Fill in data on `existing` from a matching `incoming` card.
///
/// Only two things can change: a verb without conjugations adopts the incoming
/// conjugation table, and synonyms are unioned. Identity, lesson association,
/// timestamps and every other field stay as they are. Returns whether anything
/// changed.
pub fn enrich(existing: &mut Card, incoming: Card) -> bool {
    let mut changed = false;

    let incoming_has_forms = incoming
        .conjugations
        .as_ref()
        .is_some_and(|c| !c.is_empty());
    let existing_lacks_forms = existing
        .conjugations
        .as_ref()
        .map_or(true, |c| c.is_empty());

    if incoming.class == CardClass::Verb && incoming_has_forms && existing_lacks_forms {
        existing.conjugations = incoming.conjugations;
        if incoming.infinitive.is_some() {
            existing.infinitive = incoming.infinitive;
        }
        if incoming.verb_type.is_some() {
            existing.verb_type = incoming.verb_type;
        }
        changed = true;
        tracing::debug!(card_id = %existing.id, word = %existing.word, "adopted conjugations");
    }

    let before = existing.synonyms.len();
    existing.synonyms.extend(incoming.synonyms);
    if existing.synonyms.len() != before {
        changed = true;
        tracing::debug!(
            card_id = %existing.id,
            word = %existing.word,
            added = existing.synonyms.len() - before,
            "merged synonyms"
        );
    }

    changed
}
