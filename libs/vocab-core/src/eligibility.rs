//! Which question types a card can be asked as.
//!
//! [`is_eligible`] is the only place these rules live. Counting previews and
//! session question generation both go through it, so a preview never promises
//! more cards than a session can actually play.

use crate::types::{Card, CardClass, Gender, QuestionType};

/// Whether `card` has enough data to generate a `question` of that type.
pub fn is_eligible(card: &Card, question: QuestionType) -> bool {
    match question {
        QuestionType::Meaning => !card.word.is_empty() && !card.translation.is_empty(),
        QuestionType::Gender => {
            card.class == CardClass::Noun && matches!(card.gender, Gender::Masc | Gender::Fem)
        }
        QuestionType::Conjugation => {
            card.class == CardClass::Verb
                && card.infinitive.as_deref().is_some_and(|inf| !inf.is_empty())
                && card.conjugations.as_ref().is_some_and(|c| c.is_complete())
        }
        QuestionType::Synonyms => !card.synonyms.is_empty(),
        QuestionType::Antonyms => !card.antonyms.is_empty(),
    }
}

/// Like [`is_eligible`], for a question type given by name.
///
/// Unknown names are never eligible.
pub fn is_eligible_by_name(card: &Card, question: &str) -> bool {
    QuestionType::from_str(question).is_some_and(|q| is_eligible(card, q))
}
