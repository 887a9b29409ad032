//! Cards typed in by hand.

use crate::article::split_french_article;
use crate::types::{Card, CardClass, Conjugations, Gender, Language, VerbType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Fields collected by the manual entry form.
///
/// Every field besides `word`, `translation` and `class` is optional. A verb
/// with only some conjugation slots filled is accepted; it just won't be
/// offered for conjugation questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEntry {
    /// Raw word, possibly with a leading article (`"la table"`).
    pub word: String,
    pub translation: String,
    pub class: CardClass,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb_type: Option<VerbType>,
    /// Conjugated forms in person order; blank slots are unknown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conjugations: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl ManualEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>, class: CardClass) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            class,
            gender: Gender::None,
            verb_type: None,
            conjugations: Vec::new(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    /// Build the card this entry describes, destined for `lesson_id`.
    ///
    /// French words have their article split off. Fields that don't apply to
    /// the language or word class are dropped.
    pub fn into_card(self, language: Language, unit_id: Uuid, lesson_id: Uuid) -> Card {
        let (article, word) = match language {
            Language::French => {
                let split = split_french_article(&self.word);
                (split.article, split.word)
            }
            Language::English => (None, self.word.trim().to_string()),
        };

        let mut card = Card::new(
            word,
            self.translation.trim(),
            self.class,
            language,
            unit_id,
            lesson_id,
        );
        card.article = article;

        if language == Language::French && self.class == CardClass::Noun {
            card.gender = self.gender;
        }

        if self.class == CardClass::Verb {
            card.infinitive = Some(card.word.clone()).filter(|w| !w.is_empty());
            card.verb_type = self.verb_type;
            let forms = Conjugations::from_forms(
                self.conjugations
                    .into_iter()
                    .map(|slot| slot.unwrap_or_default()),
            );
            if !forms.is_empty() {
                card.conjugations = Some(forms);
            }
        }

        if language == Language::English {
            card.synonyms = clean_set(self.synonyms);
            card.antonyms = clean_set(self.antonyms);
        }

        card
    }
}

fn clean_set(values: Vec<String>) -> BTreeSet<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
