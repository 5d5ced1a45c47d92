use crate::error::ApiError;
use crate::metrics::TextMetrics;
use crate::state::AppState;
use crate::suggest::{analyze_suggestions, autocomplete_completions};
use crate::types::{AnalyzeResponse, AutocompleteResponse, StatusResponse};
use crate::validation::{parse_analyze_request, parse_autocomplete_request};
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError, web};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

fn json_ok<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .insert_header((REQUEST_ID_HEADER, Uuid::new_v4().to_string()))
        .json(body)
}

fn debug_log(state: &AppState, route: &str, detail: std::fmt::Arguments<'_>) {
    if state.config.debug {
        log::debug!(
            "[{}] {} {}",
            Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            route,
            detail
        );
    }
}

pub async fn status() -> impl Responder {
    json_ok(&StatusResponse::ok())
}

pub async fn analyze(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_analyze_request(&body).inspect_err(|err| {
        log::warn!("Rejected /analyze request: {} ({})", err, err.field());
    })?;

    debug_log(
        &state,
        "POST /analyze",
        format_args!(
            "script: {} chars, outline: {}",
            request.script.chars().count(),
            if request.outline.is_some() { "present" } else { "absent" }
        ),
    );

    let metrics = TextMetrics::compute(&request.script);
    let response = AnalyzeResponse {
        word_count: metrics.word_count,
        character_count: metrics.character_count,
        unique_words: metrics.unique_words,
        suggestions: analyze_suggestions(&request.script),
    };

    log::info!(
        "Analyzed script: {} words, {} unique",
        response.word_count,
        response.unique_words
    );

    Ok(json_ok(&response))
}

pub async fn autocomplete(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let request = parse_autocomplete_request(&body).inspect_err(|err| {
        log::warn!("Rejected /autocomplete request: {} ({})", err, err.field());
    })?;

    debug_log(
        &state,
        "POST /autocomplete",
        format_args!(
            "current_text: {} chars",
            request.current_text.chars().count()
        ),
    );

    let response = AutocompleteResponse {
        completions: autocomplete_completions(&request.current_text),
    };

    log::info!("Returning {} completion(s)", response.completions.len());

    Ok(json_ok(&response))
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound {
        method: req.method().to_string(),
        path: req.path().to_string(),
    }
    .error_response()
}
