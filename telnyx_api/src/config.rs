//! Client-wide configuration shared read-only by every call.

use std::fmt;
use std::time::Duration;

use crate::Error;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.telnyx.com/v2";

/// Timeout applied when neither the config nor the call overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Credentials and defaults shared by all requests made through a [`crate::Client`].
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) default_headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
        }
    }

    /// Builds a config from `TELNYX_API_KEY`, `TELNYX_BASE_URL` and `TELNYX_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("TELNYX_API_KEY")
            .map_err(|_| Error::Configuration("TELNYX_API_KEY is not set".to_string()))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("TELNYX_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        if let Ok(raw) = std::env::var("TELNYX_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                Error::Configuration(format!("TELNYX_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is empty".to_string()));
        }
        url::Url::parse(&self.base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL {}: {}", self.base_url, e))
        })?;
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}
