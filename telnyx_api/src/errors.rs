//! Error types for the API client.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Parameters failed local validation before any request was sent.
    #[error("invalid request: {0}")]
    Construction(String),
    /// The client configuration is unusable (missing key, bad base URL or header).
    #[error("invalid client configuration: {0}")]
    Configuration(String),
    /// The request exceeded its timeout.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    /// Connection, TLS, or body read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The API returned a non-success status.
    #[error(transparent)]
    Api(ApiError),
    /// The API returned a success status but the body did not match the expected shape.
    #[error("failed to decode response with status {status}: {message}")]
    Decode {
        status: u16,
        message: String,
        body: String,
    },
}

/// Coarse classification of an [`Error`], for deciding between fixing input,
/// retrying, or surfacing the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Construction,
    Transport,
    Api,
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Construction(_) | Self::Configuration(_) => ErrorKind::Construction,
            Self::Timeout(_) | Self::Transport(_) => ErrorKind::Transport,
            Self::Api(_) => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Returns the structured API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of the response that produced this error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else {
            Self::Transport(e)
        }
    }
}

/// A non-2xx response from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Structured error entries from the body. Empty when the body was absent or unparseable.
    pub errors: Vec<ApiErrorDetail>,
    /// Value of the `x-request-id` response header.
    pub request_id: Option<String>,
    /// Truncated raw body, kept for diagnostics.
    pub body: Option<String>,
}

impl ApiError {
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().filter_map(|e| e.code.as_deref()).collect()
    }

    /// Human-readable messages, preferring `detail` over `title`.
    pub fn messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.detail.as_deref().or(e.title.as_deref()))
            .collect()
    }

    pub fn status_class(&self) -> ApiStatus {
        ApiStatus::from_status(self.status)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API request failed with status {}", self.status)?;
        let codes = self.codes();
        if !codes.is_empty() {
            write!(f, " [{}]", codes.join(", "))?;
        }
        let messages = self.messages();
        if !messages.is_empty() {
            write!(f, ": {}", messages.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// One entry of the `errors` array in an API error body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default, deserialize_with = "string_or_number")]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub source: Option<ErrorSource>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Points at the request element that caused an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub pointer: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
}

/// Status classes callers commonly branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    BadRequest,
    Authentication,
    PermissionDenied,
    NotFound,
    Conflict,
    UnprocessableEntity,
    RateLimited,
    Server,
    Other,
}

impl ApiStatus {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            Error::Construction("x".into()).kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            Error::Configuration("x".into()).kind(),
            ErrorKind::Construction
        );
        let decode = Error::Decode {
            status: 200,
            message: "eof".into(),
            body: String::new(),
        };
        assert_eq!(decode.kind(), ErrorKind::Decode);
        assert_eq!(decode.status(), Some(200));
    }

    #[test]
    fn api_error_display_includes_codes_and_messages() {
        let err = ApiError {
            status: 422,
            errors: vec![ApiErrorDetail {
                code: Some("10015".into()),
                title: Some("Invalid value".into()),
                detail: Some("The 'to' field is invalid".into()),
                ..Default::default()
            }],
            request_id: None,
            body: None,
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 422 [10015]: The 'to' field is invalid"
        );
        assert_eq!(err.status_class(), ApiStatus::UnprocessableEntity);
    }

    #[test]
    fn numeric_error_codes_become_strings() {
        let detail: ApiErrorDetail =
            serde_json::from_str(r#"{"code": 10009, "title": "Authentication failed"}"#).unwrap();
        assert_eq!(detail.code.as_deref(), Some("10009"));
        assert_eq!(detail.detail, None);
    }

    #[test]
    fn status_classes() {
        assert_eq!(ApiStatus::from_status(401), ApiStatus::Authentication);
        assert_eq!(ApiStatus::from_status(429), ApiStatus::RateLimited);
        assert_eq!(ApiStatus::from_status(503), ApiStatus::Server);
        assert_eq!(ApiStatus::from_status(418), ApiStatus::Other);
    }
}
