use crate::config::Config;
use crate::handlers::{REQUEST_ID_HEADER, status};
use crate::routes;
use crate::state::AppState;
use crate::types::{AnalyzeResponse, AutocompleteResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Responder, test, web};
use serde_json::{Value, json};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn test_config() -> Config {
    Config {
        debug: true,
        max_payload_bytes: 1024,
        ..Config::default()
    }
}

macro_rules! test_app {
    () => {{
        init_logger();
        let config = test_config();
        let limit = config.max_payload_bytes;
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { config }))
                .app_data(routes::json_config(limit))
                .configure(routes::configure),
        )
        .await
    }};
}

async fn post_json(uri: &str, body: &Value) -> (StatusCode, Value) {
    let app = test_app!();
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let json: Value = test::read_body_json(resp).await;
    (status, json)
}

#[tokio::test]
async fn test_status_handler_ok() {
    let resp = status()
        .await
        .respond_to(&test::TestRequest::default().to_http_request());
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_status_route() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json, json!({"status": "ok"}));
}

#[actix_web::test]
async fn test_analyze_hello_world() {
    let (status, json) = post_json("/analyze", &json!({"script": "Hello world"})).await;
    assert_eq!(status, StatusCode::OK);
    let resp: AnalyzeResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.word_count, 2);
    assert_eq!(resp.character_count, 11);
    assert_eq!(resp.unique_words, 2);
    assert!(!resp.suggestions.is_empty());
}

#[actix_web::test]
async fn test_analyze_with_outline_list() {
    let body = json!({
        "script": "INT. HOUSE - DAY. The house is quiet. Quiet!",
        "outline": ["Setup", "Confrontation", "Resolution"]
    });
    let (status, json) = post_json("/analyze", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["word_count"], 9);
    assert_eq!(json["unique_words"], 7);
}

#[actix_web::test]
async fn test_analyze_is_idempotent() {
    let body = json!({"script": "Same input, same output.", "outline": "Act I"});
    let first = post_json("/analyze", &body).await;
    let second = post_json("/analyze", &body).await;
    assert_eq!(first, second);
}

#[actix_web::test]
async fn test_analyze_empty_script() {
    let (status, json) = post_json("/analyze", &json!({"script": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["word_count"], 0);
    assert_eq!(json["character_count"], 0);
    assert_eq!(json["unique_words"], 0);
}

#[actix_web::test]
async fn test_analyze_missing_script() {
    let (status, json) = post_json("/analyze", &json!({"outline": "Act I"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "missing");
    assert_eq!(json["error"]["field"], "script");
    assert_eq!(json["error"]["message"], "field required");
}

#[actix_web::test]
async fn test_analyze_wrong_outline_type() {
    let (status, json) = post_json("/analyze", &json!({"script": "x", "outline": 5})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["field"], "outline");
    assert_eq!(json["error"]["code"], "invalid_type");
}

#[actix_web::test]
async fn test_autocomplete_reverses_tail() {
    let body = json!({"script": "", "current_text": "hello amazing world"});
    let (status, json) = post_json("/autocomplete", &body).await;
    assert_eq!(status, StatusCode::OK);
    let resp: AutocompleteResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.completions, vec!["world amazing hello"]);
}

#[actix_web::test]
async fn test_autocomplete_empty_text() {
    let body = json!({"script": "FADE IN:", "current_text": ""});
    let (status, json) = post_json("/autocomplete", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"completions": [""]}));
}

#[actix_web::test]
async fn test_autocomplete_missing_current_text() {
    let (status, json) = post_json("/autocomplete", &json!({"script": ""})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["field"], "current_text");
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/analyze")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"script\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"]["code"], "malformed_json");
    assert_eq!(json["error"]["field"], "body");
}

#[actix_web::test]
async fn test_body_without_content_type_is_json() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/analyze")
        .set_payload("{\"script\": \"Hello world\"}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["word_count"], 2);
    assert_eq!(json["character_count"], 11);
}

#[actix_web::test]
async fn test_wrong_content_type() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/autocomplete")
        .insert_header(("Content-Type", "text/plain"))
        .set_payload("hello")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[actix_web::test]
async fn test_payload_too_large() {
    let script = "word ".repeat(400);
    let (status, json) = post_json("/analyze", &json!({"script": script})).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["code"], "payload_too_large");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/predict").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: Value = test::read_body_json(resp).await;
    assert_eq!(json["error"]["code"], "not_found");
}

#[actix_web::test]
async fn test_wrong_method_is_rejected() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/analyze").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
