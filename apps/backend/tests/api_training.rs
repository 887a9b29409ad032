//! Training setup API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use common::fixtures;
use common::{create_lesson, create_unit_with_lesson, TestContext};

/// One lesson of French nouns, one with a conjugated and an unconjugated verb.
async fn seed_french(server: &TestServer) -> (Uuid, Uuid) {
    let (unit_id, nouns) = create_unit_with_lesson(server, "Unit 1", "Nouns").await;
    let verbs = create_lesson(server, unit_id, "Verbs").await;

    for body in [
        fixtures::french_noun(unit_id, nouns, "la table", "fem"),
        fixtures::french_noun(unit_id, nouns, "le livre", "masc"),
        fixtures::french_noun(unit_id, nouns, "les gens", "none"),
        fixtures::french_verb(unit_id, verbs, "parler", &fixtures::complete_forms("parl")),
        fixtures::french_verb(unit_id, verbs, "aller", &[Some("vais".to_string())]),
    ] {
        server
            .post("/api/cards")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }
    (nouns, verbs)
}

#[tokio::test]
async fn test_counts_per_question_type() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, verbs) = seed_french(&server).await;

    let response = server
        .post("/api/training/counts")
        .json(&fixtures::selection("french", &[nouns, verbs], &[], &[]))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["counts"],
        json!({ "meaning": 5, "gender": 2, "conjugation": 1 })
    );
    assert_eq!(body["max_cards_available"], 0);
}

#[tokio::test]
async fn test_english_counts_use_english_question_types() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (unit_id, lesson_id) = create_unit_with_lesson(&server, "Unit 1", "Lesson 1").await;
    server
        .post("/api/cards/import")
        .json(&fixtures::import_request("english", unit_id, lesson_id, &["scan.pdf"]))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server
        .post("/api/training/counts")
        .json(&fixtures::selection(
            "english",
            &[lesson_id],
            &[],
            &["synonyms", "gender"],
        ))
        .await
        .json();

    assert_eq!(
        body["counts"],
        json!({ "meaning": 3, "synonyms": 1, "antonyms": 1 })
    );
    assert_eq!(body["selected"], json!(["synonyms"]));
    assert_eq!(body["dropped"], json!(["gender"]));
}

#[tokio::test]
async fn test_empty_lesson_selection_counts_zero() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    seed_french(&server).await;

    let body: serde_json::Value = server
        .post("/api/training/counts")
        .json(&fixtures::selection("french", &[], &[], &["meaning"]))
        .await
        .json();

    assert_eq!(
        body["counts"],
        json!({ "meaning": 0, "gender": 0, "conjugation": 0 })
    );
    assert_eq!(body["dropped"], json!(["meaning"]));
}

#[tokio::test]
async fn test_class_filter_drops_types_without_cards() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, verbs) = seed_french(&server).await;

    let body: serde_json::Value = server
        .post("/api/training/counts")
        .json(&fixtures::selection(
            "french",
            &[nouns, verbs],
            &["verb"],
            &["gender", "conjugation"],
        ))
        .await
        .json();

    assert_eq!(body["counts"]["meaning"], 2);
    assert_eq!(body["counts"]["gender"], 0);
    assert_eq!(body["selected"], json!(["conjugation"]));
    assert_eq!(body["dropped"], json!(["gender"]));
    assert_eq!(body["max_cards_available"], 1);
}

#[tokio::test]
async fn test_config_clamps_card_limit() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, verbs) = seed_french(&server).await;
    let mut selection = fixtures::selection("french", &[nouns, verbs], &[], &["meaning", "gender"]);
    selection["card_limit"] = json!(50);

    let response = server.post("/api/training/config").json(&selection).await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["language"], "french");
    assert_eq!(body["question_types"], json!(["meaning", "gender"]));
    assert_eq!(body["card_limit"], 5);
}

#[tokio::test]
async fn test_config_without_playable_types_fails() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, _) = seed_french(&server).await;

    let response = server
        .post("/api/training/config")
        .json(&fixtures::selection("french", &[nouns], &[], &["conjugation"]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_unknown_question_type_is_dropped() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, _) = seed_french(&server).await;

    let response = server
        .post("/api/training/counts")
        .json(&fixtures::selection("french", &[nouns], &[], &["meaning", "spelling"]))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["counts"],
        json!({ "meaning": 3, "gender": 2, "conjugation": 0 })
    );
    assert_eq!(body["selected"], json!(["meaning"]));
    assert_eq!(body["dropped"], json!(["spelling"]));
}

#[tokio::test]
async fn test_config_with_only_unknown_types_fails() {
    let ctx = TestContext::new().await;
    let server = ctx.server();
    let (nouns, _) = seed_french(&server).await;

    let response = server
        .post("/api/training/config")
        .json(&fixtures::selection("french", &[nouns], &[], &["spelling"]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}
