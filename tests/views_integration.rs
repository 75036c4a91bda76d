//! Integration tests for the view models against a mock backend.
//!
//! Run with:
//! ```bash
//! cargo test --test views_integration
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use learning_finnish_sdk::http::retry::RetryConfig;
use learning_finnish_sdk::prelude::*;
use learning_finnish_sdk::query::keys;
use learning_finnish_sdk::view::add_word::AddWordView;
use learning_finnish_sdk::view::bulk_import::BulkImportView;
use learning_finnish_sdk::view::concepts::ConceptsView;
use learning_finnish_sdk::view::dashboard::DashboardView;
use learning_finnish_sdk::view::word_list::{InflectionsView, SortBy, WordListView};
use learning_finnish_sdk::view::word_search::WordSearchView;
use learning_finnish_sdk::view::wordbook::{StatusFilter, WordbookView};

fn client_for(server: &MockServer) -> LearningClient {
    LearningClient::builder()
        .base_url(&server.uri())
        .timeout(Duration::from_secs(5))
        .query_policy(QueryPolicy {
            retry: RetryConfig::disabled(),
            ..QueryPolicy::default()
        })
        .build()
        .expect("client should build")
}

fn saved(word_id: &str, finnish: &str, status: &str, proficiency: i64) -> serde_json::Value {
    json!({
        "id": format!("uw-{word_id}"),
        "user_id": "user-1",
        "word_id": word_id,
        "finnish_word": finnish,
        "english_translation": "",
        "status": status,
        "proficiency": proficiency,
        "review_count": 0
    })
}

// ── Word list ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_expanding_a_row_loads_its_inflections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w1", "finnish": "talo", "word_type": "noun", "priority": 0.9},
            {"id": "w2", "finnish": "äiti", "word_type": "noun", "priority": 0.1}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words/w1/inflections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inflections": [], "verb_forms": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordListView::new(&client);
    view.ready().await.unwrap();
    assert_eq!(view.words()[0].finnish, "talo");
    view.set_sort(SortBy::Finnish);
    assert_eq!(view.words()[1].finnish, "äiti");

    let w1 = WordId::from("w1");
    assert!(view.inflections().is_none());
    view.toggle(&w1);
    view.inflections_ready().await.unwrap();
    assert_eq!(view.inflections(), Some(InflectionsView::Empty));
    assert_eq!(client.queries().observer_count(&keys::inflections(&w1)), 1);

    view.toggle(&w1);
    assert!(view.inflections().is_none());
    assert_eq!(client.queries().observer_count(&keys::inflections(&w1)), 0);
}

#[tokio::test]
async fn test_changing_filters_observes_a_new_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("search", "kala"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "w1", "finnish": "talo", "word_type": "noun", "priority": 0.9}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordListView::new(&client);
    view.ready().await.unwrap();
    assert_eq!(view.empty_message(), None);

    view.set_search("kala");
    view.ready().await.unwrap();
    assert!(view.words().is_empty());
    assert_eq!(view.empty_message(), Some("No words match these filters"));

    // Trailing whitespace maps to the same entry: no second request.
    view.set_search("kala ");
    view.ready().await.unwrap();
}

// ── Wordbook ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_advancing_status_refreshes_the_wordbook() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words/user-words/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            saved("w2", "kissa", "recent", 0),
            saved("w5", "koira", "mastered", 80)
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words/user-words/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            saved("w2", "kissa", "learning", 40),
            saved("w5", "koira", "mastered", 80)
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/words/w2/status/user-1"))
        .and(body_json(json!({"status": "learning", "proficiency": 40})))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved("w2", "kissa", "learning", 40)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordbookView::new(&client, UserId::default_user());
    view.ready().await.unwrap();
    assert_eq!(view.counts().recent, 1);

    view.set_filter(StatusFilter::Only(WordStatus::Recent));
    let kissa = view.words()[0].clone();
    view.advance(&kissa).await.unwrap();

    assert_eq!(view.counts().learning, 1);
    assert!(view.words().is_empty());
    assert_eq!(
        view.empty_message().as_deref(),
        Some("No words with status \"Recent\"")
    );
    assert!(!view.is_updating());
}

#[tokio::test]
async fn test_write_without_word_id_shows_inline_error() {
    let server = MockServer::start().await;
    let mut orphan = saved("w9", "orpo", "recent", 0);
    orphan["word_id"] = serde_json::Value::Null;
    Mock::given(method("GET"))
        .and(path("/words/user-words/user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([orphan])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let view = WordbookView::new(&client, UserId::default_user());
    view.ready().await.unwrap();
    let orpo = view.words()[0].clone();
    assert!(orpo.word_id.is_none());

    let err = view.advance(&orpo).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(view.write_error().as_deref(), Some("\"orpo\" has no word id"));

    assert!(view.remove(&orpo).await.unwrap_err().is_validation());
    assert!(view.write_error().is_some());
    assert!(!view.is_updating());
}

// ── Word search ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_then_save() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/words/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "finnish_word": "kissa", "english_translation": "cat", "part_of_speech": "noun"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/words/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved("w2", "kissa", "recent", 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordSearchView::new(&client, UserId::default_user());
    assert!(!view.can_search());
    view.set_query("kissa");
    view.search().await.unwrap();
    assert_eq!(view.result().unwrap().english_translation, "cat");
    assert!(!view.is_saved());

    view.save().await.unwrap();
    assert!(view.is_saved());
}

#[tokio::test]
async fn test_failed_search_shows_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/words/search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Word not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordSearchView::new(&client, UserId::default_user());
    view.set_query("xyz");
    assert!(view.search().await.is_err());
    assert_eq!(view.error(), Some("Word not found"));
    assert!(view.result().is_none());
}

#[tokio::test]
async fn test_blank_search_and_early_save_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = WordSearchView::new(&client, UserId::default_user());
    view.set_query("   ");
    assert!(view.search().await.unwrap_err().is_validation());
    assert!(view.error().is_none());

    assert!(view.save().await.unwrap_err().is_validation());
    assert_eq!(view.save_error().as_deref(), Some("nothing to save yet"));
}

// ── Add word / bulk import ───────────────────────────────────────────────────

#[tokio::test]
async fn test_created_word_clears_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/words/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "created", "word_id": "w1", "finnish": "talo",
            "inflections_generated": {"inflections": 14, "verb_forms": 0}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words/w1/inflections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inflections": [{"case_name": "genitive", "singular": "talon", "plural": "talojen"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = AddWordView::new(&client);
    view.form_mut().finnish = "talo".to_string();
    view.form_mut().english = "house".to_string();
    view.submit().await.unwrap();

    assert!(view.form().finnish.is_empty());
    assert_eq!(
        view.message().as_deref(),
        Some("Added \"talo\" (14 inflections, 0 verb forms)")
    );
    view.inflections_ready().await.unwrap();
    assert_eq!(view.inflections().unwrap().inflections.len(), 1);
}

#[tokio::test]
async fn test_existing_word_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/words/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "exists", "word_id": "w1", "finnish": "talo"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words/w1/inflections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = AddWordView::new(&client);
    view.form_mut().finnish = "talo".to_string();
    view.submit().await.unwrap();
    assert_eq!(view.form().finnish, "talo");
    assert_eq!(
        view.message().as_deref(),
        Some("\"talo\" is already in the word list")
    );
}

#[tokio::test]
async fn test_bulk_import_stores_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/words/bulk-add"))
        .and(body_json(json!({"rows": [["talo", "hus", "house", "noun"], ["kissa"]]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1, "exists": 1, "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = BulkImportView::new(&client);
    assert!(!view.can_submit());
    view.set_text("talo, hus, house, noun\n\nkissa\n");
    assert!(view.can_submit());
    view.submit().await.unwrap();
    assert_eq!(view.result().unwrap().classified(), 2);
}

// ── Concepts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_concept_form_clears_only_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concepts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/concepts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "name too long"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/concepts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c1", "name": "Partitive"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = ConceptsView::new(&client);
    view.ready().await.unwrap();
    view.form_mut().name = "Partitive".to_string();
    view.form_mut().tags = "case, grammar".to_string();

    assert!(view.create().await.is_err());
    assert_eq!(view.form().name, "Partitive");
    assert!(view.write_error().is_some());

    let concept = view.create().await.unwrap();
    assert_eq!(concept.tags.len(), 2);
    assert!(view.form().name.is_empty());
}

#[tokio::test]
async fn test_inline_edit_saves_name_and_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concepts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "c1", "name": "Partitive", "description": "Partial objects"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/concepts/c1"))
        .and(body_json(json!({"name": "Partitive case", "description": "Partial objects"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1", "name": "Partitive case", "status": "updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut view = ConceptsView::new(&client);
    view.ready().await.unwrap();
    let first = view.concepts()[0].clone();
    view.start_edit(&first);
    if let Some(edit) = view.editing_mut() {
        edit.name = "Partitive case".to_string();
    }
    view.save_edit().await.unwrap();
    assert!(view.editing().is_none());
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_panels_and_level_bounds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_words": 40, "level": 100})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/chart"))
        .and(query_param("days", "14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2026-10-02", "count": 4},
            {"date": "2026-10-01", "count": 0}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exercise/history"))
        .and(query_param("limit", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "e1", "word_scores": [{"word_id": "w1", "score": 8}, {"word_id": "w2", "score": 6}]}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let view = DashboardView::new(&client);
    view.ready().await.unwrap();

    assert_eq!(view.level(), 100);
    assert!(view.show_chart());
    let bars = view.chart_bars();
    assert_eq!(bars[0].date, "2026-10-01");
    assert_eq!(bars[0].height_percent, 4.0);
    assert_eq!(bars[1].height_percent, 100.0);

    let history = view.history();
    assert_eq!(
        DashboardView::score_band(&history[0]),
        Some(learning_finnish_sdk::domain::exercise::ScoreBand::Good)
    );

    // Already at the maximum: nothing is sent.
    assert!(view.change_level(1).await.unwrap().is_none());
    assert!(view.change_level(-1).await.unwrap().is_some());
}
