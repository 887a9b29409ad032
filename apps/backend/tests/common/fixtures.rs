//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};
use uuid::Uuid;

pub fn name_request(name: &str) -> Value {
    json!({ "name": name })
}

/// Manual entry body with only the required fields.
pub fn manual_entry(
    language: &str,
    unit_id: Uuid,
    lesson_id: Uuid,
    word: &str,
    translation: &str,
    class: &str,
) -> Value {
    json!({
        "language": language,
        "unit_id": unit_id,
        "lesson_id": lesson_id,
        "word": word,
        "translation": translation,
        "class": class,
    })
}

/// French noun entry with a gender.
pub fn french_noun(unit_id: Uuid, lesson_id: Uuid, word: &str, gender: &str) -> Value {
    let mut body = manual_entry("french", unit_id, lesson_id, word, "gloss", "noun");
    body["gender"] = json!(gender);
    body
}

/// French verb entry with the given present-tense forms.
pub fn french_verb(unit_id: Uuid, lesson_id: Uuid, word: &str, forms: &[Option<String>]) -> Value {
    let mut body = manual_entry("french", unit_id, lesson_id, word, "gloss", "verb");
    body["verb_type"] = json!("regular");
    body["conjugations"] = json!(forms);
    body
}

pub fn complete_forms(stem: &str) -> Vec<Option<String>> {
    ["e", "es", "e", "ons", "ez", "ent"]
        .iter()
        .map(|ending| Some(format!("{stem}{ending}")))
        .collect()
}

/// Import body with empty file contents.
pub fn import_request(language: &str, unit_id: Uuid, lesson_id: Uuid, files: &[&str]) -> Value {
    let files: Vec<Value> = files
        .iter()
        .map(|name| json!({ "name": name, "content": "" }))
        .collect();
    json!({
        "files": files,
        "language": language,
        "unit_id": unit_id,
        "lesson_id": lesson_id,
    })
}

/// Training selection body.
pub fn selection(
    language: &str,
    lesson_ids: &[Uuid],
    classes: &[&str],
    question_types: &[&str],
) -> Value {
    json!({
        "language": language,
        "scope": {
            "lesson_ids": lesson_ids,
            "classes": classes,
        },
        "question_types": question_types,
    })
}
