//! Stand-in extraction service.
//!
//! Recognises no text at all: every accepted upload yields the same sample
//! vocabulary for the requested language after an artificial delay. It exists
//! so the import flow can be exercised end to end without an OCR backend.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;

use vocab_core::{
    split_french_article, Card, CardClass, Conjugations, ExtractionError, ExtractionRequest,
    Extractor, Gender, Language, VerbType, PERSON_COUNT,
};

/// Upload extensions the service accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "pdf"];

struct SampleWord {
    raw: &'static str,
    translation: &'static str,
    class: CardClass,
    gender: Gender,
}

const fn sample(
    raw: &'static str,
    translation: &'static str,
    class: CardClass,
    gender: Gender,
) -> SampleWord {
    SampleWord {
        raw,
        translation,
        class,
        gender,
    }
}

const FRENCH_SAMPLES: &[SampleWord] = &[
    sample("la table", "طاولة", CardClass::Noun, Gender::Fem),
    sample("le livre", "كتاب", CardClass::Noun, Gender::Masc),
    sample("manger", "يأكل", CardClass::Verb, Gender::None),
    sample("grand", "كبير", CardClass::Adjective, Gender::Masc),
    sample("parler", "يتحدث", CardClass::Verb, Gender::None),
];

const ENGLISH_SAMPLES: &[SampleWord] = &[
    sample("Happy", "سعيد", CardClass::Adjective, Gender::None),
    sample("Run", "يجري", CardClass::Verb, Gender::None),
    sample("Success", "نجاح", CardClass::Noun, Gender::None),
];

const ADJECTIVE_SYNONYMS: &[&str] = &["Joyful", "Cheerful"];
const ADJECTIVE_ANTONYMS: &[&str] = &["Sad", "Depressed"];

/// Extractor returning fixed sample vocabulary.
pub struct SimulatedExtractor {
    delay: Duration,
}

impl SimulatedExtractor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn check_files(request: &ExtractionRequest) -> Result<(), ExtractionError> {
        if request.files.is_empty() {
            return Err(ExtractionError::EmptyRequest);
        }
        for file in &request.files {
            let supported = file
                .extension()
                .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()));
            if !supported {
                return Err(ExtractionError::UnsupportedFile {
                    name: file.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn sample_cards(request: &ExtractionRequest) -> Vec<Card> {
        let source = request.files.first().map(|file| file.name.clone());
        let samples = match request.language {
            Language::French => FRENCH_SAMPLES,
            Language::English => ENGLISH_SAMPLES,
        };

        samples
            .iter()
            .map(|word| {
                let mut card = match request.language {
                    Language::French => {
                        let split = split_french_article(word.raw);
                        let mut card = Card::new(
                            split.word,
                            word.translation,
                            word.class,
                            Language::French,
                            request.unit_id,
                            request.lesson_id,
                        );
                        card.article = split.article;
                        card.gender = word.gender;
                        if word.class == CardClass::Verb {
                            card.infinitive = Some(card.word.clone());
                            card.verb_type = Some(VerbType::Regular);
                            card.conjugations = Some(conjugate_regular_er(&card.word));
                        }
                        card
                    }
                    Language::English => {
                        let mut card = Card::new(
                            word.raw,
                            word.translation,
                            word.class,
                            Language::English,
                            request.unit_id,
                            request.lesson_id,
                        );
                        if word.class == CardClass::Adjective {
                            card.synonyms = to_set(ADJECTIVE_SYNONYMS);
                            card.antonyms = to_set(ADJECTIVE_ANTONYMS);
                        }
                        card
                    }
                };
                card.source_file = source.clone();
                card
            })
            .collect()
    }
}

#[async_trait]
impl Extractor for SimulatedExtractor {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn extract(&self, request: &ExtractionRequest) -> Result<Vec<Card>, ExtractionError> {
        Self::check_files(request)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let cards = Self::sample_cards(request);
        tracing::info!(
            files = request.files.len(),
            language = request.language.as_str(),
            cards = cards.len(),
            "simulated extraction finished"
        );
        Ok(cards)
    }
}

fn to_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Present-tense forms of a regular `-er` verb.
///
/// `-ger` and `-cer` stems keep their soft sound in the `nous` form
/// (`mangeons`, `commençons`). Anything not ending in `-er` gets a table of
/// unknown forms.
pub fn conjugate_regular_er(infinitive: &str) -> Conjugations {
    let Some(stem) = infinitive.strip_suffix("er").filter(|stem| !stem.is_empty()) else {
        return Conjugations::new(Default::default());
    };

    let nous_stem = if stem.ends_with('g') {
        format!("{stem}e")
    } else if let Some(base) = stem.strip_suffix('c') {
        format!("{base}ç")
    } else {
        stem.to_string()
    };

    let forms: [String; PERSON_COUNT] = [
        format!("{stem}e"),
        format!("{stem}es"),
        format!("{stem}e"),
        format!("{nous_stem}ons"),
        format!("{stem}ez"),
        format!("{stem}ent"),
    ];
    Conjugations::from_forms(forms)
}
