use crate::types::{AnalyzeRequest, AutocompleteRequest, Outline};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("request body must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("field required")]
    MissingField { field: String },

    #[error("expected {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationError {
    /// Path of the offending field; `"body"` when the whole body is at fault.
    pub fn field(&self) -> &str {
        match self {
            Self::MalformedBody(_) | Self::NotAnObject { .. } => "body",
            Self::MissingField { field } | Self::InvalidType { field, .. } => field,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedBody(_) => "malformed_json",
            Self::NotAnObject { .. } => "not_an_object",
            Self::MissingField { .. } => "missing",
            Self::InvalidType { .. } => "invalid_type",
        }
    }
}

/// Checks field presence and types on a decoded `/analyze` body.
pub fn parse_analyze_request(body: &Value) -> Result<AnalyzeRequest, ValidationError> {
    let object = as_object(body)?;
    Ok(AnalyzeRequest {
        script: required_string(object, "script")?,
        outline: optional_outline(object, "outline")?,
    })
}

pub fn parse_autocomplete_request(body: &Value) -> Result<AutocompleteRequest, ValidationError> {
    let object = as_object(body)?;
    Ok(AutocompleteRequest {
        script: required_string(object, "script")?,
        current_text: required_string(object, "current_text")?,
    })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject {
        found: json_type(body),
    })
}

fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, ValidationError> {
    match object.get(field) {
        None => Err(ValidationError::MissingField {
            field: field.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "string",
            found: json_type(other),
        }),
    }
}

fn optional_outline(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<Outline>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(Outline::Text(s.clone()))),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(ValidationError::InvalidType {
                    field: format!("{field}.{index}"),
                    expected: "string",
                    found: json_type(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|sections| Some(Outline::Sections(sections))),
        Some(other) => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "string or array of strings",
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
