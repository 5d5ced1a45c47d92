use crate::validation::ValidationError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("request body must be sent as application/json")]
    UnsupportedMediaType,

    #[error("no route for {method} {path}")]
    NotFound { method: String, path: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.kind(),
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::NotFound { .. } => "not_found",
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Validation(err) => err.field(),
            Self::PayloadTooLarge { .. } => "body",
            Self::UnsupportedMediaType => "content-type",
            Self::NotFound { .. } => "path",
        }
    }

    /// Maps an extractor failure from the JSON body decoder onto the API
    /// error taxonomy.
    pub fn from_json_payload(err: &JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::OverflowKnownLength { limit, .. }
            | JsonPayloadError::Overflow { limit } => Self::PayloadTooLarge { limit: *limit },
            JsonPayloadError::ContentType => Self::UnsupportedMediaType,
            other => ValidationError::MalformedBody(other.to_string()).into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    field: &'a str,
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(ValidationError::MalformedBody(_)) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                field: self.field(),
                message: self.to_string(),
            },
        })
    }
}
