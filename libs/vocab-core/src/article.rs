//! Splitting a leading French article off a raw word.
//!
//! `"la table"` becomes `{ article: "la", word: "table" }` so that cards are
//! stored and looked up by their bare form.

use regex::Regex;
use std::sync::OnceLock;

/// A raw input split into its leading article and the bare word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSplit {
    pub article: Option<String>,
    pub word: String,
}

/// Elided article bound directly to a word: `l'homme`, `d'accord`.
fn elided_article() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(l'|d')[a-zàâçéèêëîïôûùüÿñæœ]").expect("elided article pattern")
    })
}

/// Article separated from the word by whitespace: `la table`, `des pommes`.
fn spaced_article() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(le|la|les|un|une|des|l'|d')\s+").expect("spaced article pattern")
    })
}

/// Split a leading French article from `raw`.
///
/// Only the first article is consumed. The article keeps the case it was
/// typed in. Never fails: input without an article comes back trimmed as the
/// word.
pub fn split_french_article(raw: &str) -> ArticleSplit {
    let text = raw.trim();

    if let Some(caps) = elided_article().captures(text) {
        let marker = &caps[1];
        return ArticleSplit {
            article: Some(marker.to_string()),
            word: text[marker.len()..].trim().to_string(),
        };
    }

    if let Some(found) = spaced_article().find(text) {
        return ArticleSplit {
            article: Some(found.as_str().trim().to_string()),
            word: text[found.end()..].trim().to_string(),
        };
    }

    ArticleSplit {
        article: None,
        word: text.to_string(),
    }
}
