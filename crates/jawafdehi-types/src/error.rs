use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Generic message shown when the API could not be reached at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Categorization of errors surfaced to the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    RateLimited,
    Network,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the API client layer and the pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::RateLimited,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Network,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Map an HTTP status and response body from the accountability API
    /// into an `AppError`.
    ///
    /// A 400 whose body is an object of field errors (values are either a
    /// list of messages or a nested object of the same shape) becomes a
    /// `ValidationError` with the fields flattened to dotted paths, e.g.
    /// `contact_info.contact_methods.0.value`.
    pub fn from_api_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(detail_message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        match status {
            400 => {
                let mut field_errors = HashMap::new();
                if let Some(Value::Object(map)) = &parsed {
                    for (key, value) in map {
                        if is_message_key(key) {
                            continue;
                        }
                        flatten_field_errors(key, value, &mut field_errors);
                    }
                }
                if field_errors.is_empty() {
                    AppError::bad_request(message)
                } else {
                    AppError::validation("Validation failed", field_errors)
                }
            }
            404 => AppError::not_found(message),
            429 => AppError::rate_limited(message),
            500..=599 => AppError::internal(message),
            _ => AppError::bad_request(message),
        }
    }

    /// Message suitable for a toast or inline alert.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Network => NETWORK_ERROR_MESSAGE.to_string(),
            _ if self.message.trim().is_empty() => NETWORK_ERROR_MESSAGE.to_string(),
            _ => self.message.clone(),
        }
    }

    /// First error message recorded for a form field, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

fn is_message_key(key: &str) -> bool {
    matches!(key, "detail" | "message" | "error")
}

fn detail_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

fn flatten_field_errors(path: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::String(msg) => {
            out.entry(path.to_string()).or_insert_with(|| msg.clone());
        }
        Value::Array(items) => {
            if let Some(first) = items.iter().find_map(Value::as_str) {
                out.entry(path.to_string())
                    .or_insert_with(|| first.to_string());
            }
            // Lists of objects carry per-index errors (e.g. contact methods).
            for (index, item) in items.iter().enumerate() {
                if item.is_object() {
                    flatten_field_errors(&format!("{path}.{index}"), item, out);
                }
            }
        }
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_field_errors(&format!("{path}.{key}"), nested, out);
            }
        }
        _ => {}
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
