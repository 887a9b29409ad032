//! Core types for the vocabulary card collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Number of conjugation slots kept per verb (three persons, singular and plural).
pub const PERSON_COUNT: usize = 6;

/// Marker used by extraction output for a conjugated form that is not known yet.
pub const UNKNOWN_FORM: &str = "???";

/// Language a card is studied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    French,
    English,
}

impl Language {
    /// Get the language name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::French => "french",
            Self::English => "english",
        }
    }
}

/// Word class of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Expression,
}

/// Grammatical gender. Only meaningful for nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masc,
    Fem,
    /// Plural nouns, non-nouns, or words where gender is not studied.
    None,
}

impl Default for Gender {
    fn default() -> Self {
        Self::None
    }
}

/// Verb conjugation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbType {
    Regular,
    Irregular,
}

/// Kind of question a training session can ask about a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Meaning,
    Gender,
    Conjugation,
    Synonyms,
    Antonyms,
}

impl QuestionType {
    const FRENCH: [QuestionType; 3] = [Self::Meaning, Self::Gender, Self::Conjugation];
    const ENGLISH: [QuestionType; 3] = [Self::Meaning, Self::Synonyms, Self::Antonyms];

    /// Question types offered for a language, in display order.
    pub fn for_language(language: Language) -> &'static [QuestionType] {
        match language {
            Language::French => &Self::FRENCH,
            Language::English => &Self::ENGLISH,
        }
    }

    /// Whether this question type is offered for a language.
    pub fn is_valid_for(self, language: Language) -> bool {
        Self::for_language(language).contains(&self)
    }

    /// Get the question type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meaning => "meaning",
            Self::Gender => "gender",
            Self::Conjugation => "conjugation",
            Self::Synonyms => "synonyms",
            Self::Antonyms => "antonyms",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "meaning" => Some(Self::Meaning),
            "gender" => Some(Self::Gender),
            "conjugation" => Some(Self::Conjugation),
            "synonyms" => Some(Self::Synonyms),
            "antonyms" => Some(Self::Antonyms),
            _ => None,
        }
    }
}

/// Grammatical person of a conjugation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    /// Position of this person in a conjugation table.
    pub fn index(self) -> usize {
        match self {
            Self::FirstSingular => 0,
            Self::SecondSingular => 1,
            Self::ThirdSingular => 2,
            Self::FirstPlural => 3,
            Self::SecondPlural => 4,
            Self::ThirdPlural => 5,
        }
    }
}

/// Conjugated forms of a verb, one optional slot per person.
///
/// A slot is `None` while the form is unknown. Blank strings and the
/// [`UNKNOWN_FORM`] marker are normalized to `None` on construction and when
/// deserializing, so a filled slot always holds real data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Option<String>; 6]", into = "[Option<String>; 6]")]
pub struct Conjugations([Option<String>; PERSON_COUNT]);

impl Conjugations {
    /// Create from six slots, normalizing unknown markers away.
    pub fn new(slots: [Option<String>; PERSON_COUNT]) -> Self {
        Self(slots.map(|slot| slot.and_then(normalize_form)))
    }

    /// Create from a list of raw forms in person order.
    ///
    /// Extra forms beyond the sixth are ignored; missing ones stay unknown.
    pub fn from_forms<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut slots: [Option<String>; PERSON_COUNT] = Default::default();
        for (slot, form) in slots.iter_mut().zip(forms) {
            *slot = normalize_form(form.as_ref().to_string());
        }
        Self(slots)
    }

    /// Form for a given person, if known.
    pub fn get(&self, person: Person) -> Option<&str> {
        self.0[person.index()].as_deref()
    }

    pub fn slots(&self) -> &[Option<String>; PERSON_COUNT] {
        &self.0
    }

    /// Number of known forms.
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// All six forms are known.
    pub fn is_complete(&self) -> bool {
        self.filled() == PERSON_COUNT
    }

    /// No form is known.
    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }
}

impl From<[Option<String>; PERSON_COUNT]> for Conjugations {
    fn from(slots: [Option<String>; PERSON_COUNT]) -> Self {
        Self::new(slots)
    }
}

impl From<Conjugations> for [Option<String>; PERSON_COUNT] {
    fn from(conjugations: Conjugations) -> Self {
        conjugations.0
    }
}

fn normalize_form(form: String) -> Option<String> {
    let trimmed = form.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_FORM {
        None
    } else if trimmed.len() == form.len() {
        Some(form)
    } else {
        Some(trimmed.to_string())
    }
}

/// A vocabulary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
    pub word: String,
    pub translation: String,
    pub class: CardClass,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infinitive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb_type: Option<VerbType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjugations: Option<Conjugations>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub synonyms: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub antonyms: BTreeSet<String>,
    pub language: Language,
    pub unit_id: Uuid,
    pub lesson_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Create a card with a fresh ID and no class-specific data.
    pub fn new(
        word: impl Into<String>,
        translation: impl Into<String>,
        class: CardClass,
        language: Language,
        unit_id: Uuid,
        lesson_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            article: None,
            word: word.into(),
            translation: translation.into(),
            class,
            gender: Gender::None,
            infinitive: None,
            verb_type: None,
            conjugations: None,
            synonyms: BTreeSet::new(),
            antonyms: BTreeSet::new(),
            language,
            unit_id,
            lesson_id,
            source_file: None,
            created_at: Utc::now(),
        }
    }

    /// Word with its article, as shown on the front of a card.
    pub fn display_word(&self) -> String {
        match self.article.as_deref() {
            Some(article) if article.ends_with('\'') => format!("{}{}", article, self.word),
            Some(article) => format!("{} {}", article, self.word),
            None => self.word.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn question_types_per_language() {
        assert_eq!(
            QuestionType::for_language(Language::French),
            &[QuestionType::Meaning, QuestionType::Gender, QuestionType::Conjugation]
        );
        assert_eq!(
            QuestionType::for_language(Language::English),
            &[QuestionType::Meaning, QuestionType::Synonyms, QuestionType::Antonyms]
        );
        assert!(!QuestionType::Gender.is_valid_for(Language::English));
    }

    #[test]
    fn question_type_names_round_trip() {
        for q in [
            QuestionType::Meaning,
            QuestionType::Gender,
            QuestionType::Conjugation,
            QuestionType::Synonyms,
            QuestionType::Antonyms,
        ] {
            assert_eq!(QuestionType::from_str(q.as_str()), Some(q));
        }
        assert_eq!(QuestionType::from_str("spelling"), None);
    }

    #[test]
    fn conjugations_normalize_unknown_forms() {
        let conj = Conjugations::from_forms(["parle", "parles", " parle ", "parlons", "", "???"]);
        assert_eq!(conj.filled(), 4);
        assert_eq!(conj.get(Person::ThirdSingular), Some("parle"));
        assert_eq!(conj.get(Person::SecondPlural), None);
        assert_eq!(conj.get(Person::ThirdPlural), None);
        assert!(!conj.is_complete());
    }

    #[test]
    fn conjugations_short_list_leaves_trailing_slots_unknown() {
        let conj = Conjugations::from_forms(["vais", "vas"]);
        assert_eq!(conj.filled(), 2);
        assert!(!conj.is_empty());
    }

    #[test]
    fn conjugations_deserialize_sentinel_as_missing() {
        let json = r#"["parle","parles","parle","parlons","parlez","???"]"#;
        let conj: Conjugations = serde_json::from_str(json).unwrap();
        assert_eq!(conj.filled(), 5);
        assert_eq!(
            serde_json::to_string(&conj).unwrap(),
            r#"["parle","parles","parle","parlons","parlez",null]"#
        );
    }

    #[test]
    fn conjugations_require_six_slots() {
        let json = r#"["parle","parles"]"#;
        assert!(serde_json::from_str::<Conjugations>(json).is_err());
    }

    #[test]
    fn card_serializes_enums_as_snake_case() {
        let card = Card::new(
            "table",
            "طاولة",
            CardClass::Noun,
            Language::French,
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["class"], "noun");
        assert_eq!(value["language"], "french");
        assert_eq!(value["gender"], "none");
        assert!(value.get("synonyms").is_none());
    }

    #[test]
    fn display_word_joins_article() {
        let mut card = Card::new(
            "homme",
            "man",
            CardClass::Noun,
            Language::French,
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        card.article = Some("l'".to_string());
        assert_eq!(card.display_word(), "l'homme");
        card.article = Some("un".to_string());
        assert_eq!(card.display_word(), "un homme");
    }
}
