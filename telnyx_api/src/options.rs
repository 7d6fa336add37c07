//! Per-call overrides layered on top of [`ClientConfig`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{config::ClientConfig, Error};

pub(crate) const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// Overrides for a single call. Unset fields fall back to the client config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub timeout: Option<Duration>,
    pub extra_headers: Vec<(String, String)>,
    pub extra_query: Vec<(String, String)>,
    pub idempotency_key: Option<String>,
    pub base_url: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.extra_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.extra_query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_idempotency_key(mut self, key: &str) -> Self {
        self.idempotency_key = Some(key.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// Merges these options over `config` without touching `config`.
    ///
    /// Headers apply in order: client defaults, then per-call headers, then the
    /// idempotency key, with later values replacing earlier ones.
    pub(crate) fn resolve(&self, config: &ClientConfig) -> Result<ResolvedOptions, Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.default_headers.iter().chain(self.extra_headers.iter()) {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }
        if let Some(key) = &self.idempotency_key {
            let (name, value) = header_pair(IDEMPOTENCY_HEADER, key)?;
            headers.insert(name, value);
        }
        Ok(ResolvedOptions {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| config.base_url.clone()),
            timeout: self.timeout.unwrap_or(config.timeout),
            headers,
            extra_query: self.extra_query.clone(),
        })
    }
}

/// Options after merging with the client config, ready for dispatch.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub headers: HeaderMap,
    pub extra_query: Vec<(String, String)>,
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), Error> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::Construction(format!("invalid header name {name:?}: {e}")))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| Error::Construction(format!("invalid value for header {name}: {e}")))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_call_options_override_client_defaults() {
        let config = ClientConfig::new("KEY")
            .with_default_header("X-Team", "voice")
            .with_timeout(Duration::from_secs(60));
        let options = RequestOptions::new()
            .with_timeout(Duration::from_secs(2))
            .with_header("X-Team", "messaging")
            .with_idempotency_key("abc-123")
            .with_base_url("http://localhost:4010/");

        let resolved = options.resolve(&config).unwrap();
        assert_eq!(resolved.timeout, Duration::from_secs(2));
        assert_eq!(resolved.base_url, "http://localhost:4010");
        assert_eq!(resolved.headers["x-team"], "messaging");
        assert_eq!(resolved.headers["idempotency-key"], "abc-123");

        // the shared config is left as it was
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.base_url(), crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn unset_options_fall_back_to_config() {
        let config = ClientConfig::new("KEY").with_timeout(Duration::from_secs(9));
        let resolved = RequestOptions::default().resolve(&config).unwrap();
        assert_eq!(resolved.timeout, Duration::from_secs(9));
        assert_eq!(resolved.base_url, crate::config::DEFAULT_BASE_URL);
        assert!(resolved.headers.is_empty());
    }

    #[test]
    fn invalid_header_is_a_construction_error() {
        let config = ClientConfig::new("KEY");
        let err = RequestOptions::new()
            .with_header("X-Bad", "line\nbreak")
            .resolve(&config)
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Construction);
    }
}
