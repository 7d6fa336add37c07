//! Response conversion: raw status, headers and body to a typed result.
//!
//! A 2xx response is decoded into the declared shape, and a body that does not
//! match is an [`Error::Decode`]. Any other status becomes an [`Error::Api`],
//! built from the JSON error payload when one can be parsed and from the status
//! alone otherwise. Nothing here retries or touches shared state.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::errors::{ApiError, ApiErrorDetail, ErrorSource};
use crate::Error;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Status, headers and body exactly as received from the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header. Names are case-insensitive; an invalid name or value is skipped.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Undecoded bytes from an endpoint that returns media rather than JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Decodes a JSON body into `T`. Use `serde_json::Value` for passthrough responses.
pub fn decode_json<T: DeserializeOwned>(raw: RawResponse) -> Result<T, Error> {
    let raw = ensure_success(raw)?;
    serde_json::from_slice::<T>(&raw.body).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(&raw.body));
        tracing::error!("Failed to decode response: {} | body: {}", e, snippet);
        Error::Decode {
            status: raw.status,
            message: e.to_string(),
            body: snippet,
        }
    })
}

pub fn decode_binary(raw: RawResponse) -> Result<Binary, Error> {
    let raw = ensure_success(raw)?;
    Ok(Binary {
        content_type: raw.header(CONTENT_TYPE.as_str()),
        bytes: raw.body,
    })
}

/// Accepts any 2xx response and discards the body.
pub fn decode_empty(raw: RawResponse) -> Result<(), Error> {
    ensure_success(raw).map(|_| ())
}

fn ensure_success(raw: RawResponse) -> Result<RawResponse, Error> {
    if raw.is_success() {
        Ok(raw)
    } else {
        Err(Error::Api(api_error(&raw)))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
    #[serde(default)]
    detail: Option<Value>,
}

/// Builds an [`ApiError`] from a non-2xx response.
pub fn api_error(raw: &RawResponse) -> ApiError {
    let text = String::from_utf8_lossy(&raw.body);
    let snippet = truncate_body(&text);
    tracing::error!("Request failed with status {}: {}", raw.status, snippet);

    let errors = if text.trim().is_empty() {
        Vec::new()
    } else {
        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) if !body.errors.is_empty() => body.errors,
            Ok(body) => body.detail.map(details_from_detail).unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Unparseable error body for status {}: {}", raw.status, e);
                Vec::new()
            }
        }
    };

    ApiError {
        status: raw.status,
        errors,
        request_id: raw.header(REQUEST_ID_HEADER),
        body: if snippet.is_empty() { None } else { Some(snippet) },
    }
}

// `{"detail": "..."}` or `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`
fn details_from_detail(detail: Value) -> Vec<ApiErrorDetail> {
    match detail {
        Value::String(message) => vec![ApiErrorDetail {
            detail: Some(message),
            ..Default::default()
        }],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let message = item.get("msg")?.as_str()?.to_string();
                let pointer = item.get("loc").and_then(Value::as_array).map(|loc| {
                    let parts: Vec<String> = loc
                        .iter()
                        .map(|p| match p {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect();
                    format!("/{}", parts.join("/"))
                });
                Some(ApiErrorDetail {
                    code: item.get("type").and_then(Value::as_str).map(str::to_string),
                    detail: Some(message),
                    source: pointer.map(|pointer| ErrorSource {
                        pointer: Some(pointer),
                        parameter: None,
                    }),
                    ..Default::default()
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::ErrorKind;

    #[derive(Deserialize, Debug)]
    struct Thing {
        id: String,
    }

    #[test]
    fn decodes_success_body() {
        let thing: Thing = decode_json(RawResponse::new(200, r#"{"id":"t1"}"#)).unwrap();
        assert_eq!(thing.id, "t1");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_json::<Thing>(RawResponse::new(200, "{not json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        let err = decode_json::<Thing>(RawResponse::new(200, r#"{"name":"no id"}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn structured_error_body_becomes_api_error() {
        let raw = RawResponse::new(
            422,
            r#"{"errors":[{"code":"invalid_param","detail":"to is not a valid number"}]}"#,
        )
        .with_header("x-request-id", "req-42");
        let err = decode_json::<Thing>(raw).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert_eq!(api.status, 422);
        assert_eq!(api.codes(), vec!["invalid_param"]);
        assert_eq!(api.messages(), vec!["to is not a valid number"]);
        assert_eq!(api.request_id.as_deref(), Some("req-42"));
    }

    #[test]
    fn missing_or_unparseable_body_gives_status_only_error() {
        let err = decode_empty(RawResponse::new(503, "")).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert_eq!(api.status, 503);
        assert!(api.errors.is_empty());
        assert_eq!(api.body, None);

        let err = decode_empty(RawResponse::new(502, "<html>Bad Gateway</html>")).unwrap_err();
        let api = err.as_api_error().unwrap();
        assert!(api.errors.is_empty());
        assert_eq!(api.body.as_deref(), Some("<html>Bad Gateway</html>"));
    }

    #[test]
    fn detail_style_error_bodies_are_understood() {
        let api = api_error(&RawResponse::new(404, r#"{"detail":"MCP server not found"}"#));
        assert_eq!(api.messages(), vec!["MCP server not found"]);

        let body = concat!(
            r#"{"detail":[{"loc":["body","url"],"msg":"field required","#,
            r#""type":"value_error.missing"}]}"#
        );
        let api = api_error(&RawResponse::new(422, body));
        assert_eq!(api.codes(), vec!["value_error.missing"]);
        assert_eq!(
            api.errors[0].source.as_ref().and_then(|s| s.pointer.as_deref()),
            Some("/body/url")
        );
    }

    #[test]
    fn binary_keeps_bytes_and_content_type() {
        let raw = RawResponse::new(200, vec![0xff, 0xfb, 0x90])
            .with_header("content-type", "audio/mpeg");
        let binary = decode_binary(raw).unwrap();
        assert_eq!(binary.content_type.as_deref(), Some("audio/mpeg"));
        assert_eq!(binary.bytes, vec![0xff, 0xfb, 0x90]);
    }

    #[test]
    fn header_names_are_case_insensitive_and_invalid_ones_skipped() {
        let raw = RawResponse::new(200, vec![1])
            .with_header("Content-Type", "audio/mpeg")
            .with_header("bad header", "x")
            .with_header("x-request-id", "line\nbreak");
        assert_eq!(raw.headers.len(), 1);
        assert_eq!(raw.header("content-type").as_deref(), Some("audio/mpeg"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
