//! HTTP client for the Telnyx v2 REST API.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::{
    config::ClientConfig,
    options::RequestOptions,
    pagination::{decode_page, Page, PageRequest, PageStyle},
    request::{flatten_query, ApiRequest, Body, FileUpload},
    resources::{
        AiResource, BalanceResource, MediaResource, MessagesResource, PhoneNumbersResource,
    },
    response::{decode_binary, decode_empty, decode_json, Binary, RawResponse},
    Error,
};

const USER_AGENT: &str = concat!("telnyx-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Telnyx API.
///
/// Cloning is cheap: clones share the connection pool and the read-only
/// [`ClientConfig`]. Every call makes exactly one request and never retries.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Configuration(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Creates a client from `TELNYX_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(api_key).with_base_url(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn balance(&self) -> BalanceResource<'_> {
        BalanceResource::new(self, RequestOptions::default())
    }

    pub fn phone_numbers(&self) -> PhoneNumbersResource<'_> {
        PhoneNumbersResource::new(self, RequestOptions::default())
    }

    pub fn messages(&self) -> MessagesResource<'_> {
        MessagesResource::new(self, RequestOptions::default())
    }

    pub fn media(&self) -> MediaResource<'_> {
        MediaResource::new(self, RequestOptions::default())
    }

    pub fn ai(&self) -> AiResource<'_> {
        AiResource::new(self, RequestOptions::default())
    }

    fn get_url(
        &self,
        base_url: &str,
        path: &[String],
        query: &Map<String, Value>,
        extra_query: &[(String, String)],
    ) -> Result<Url, Error> {
        let mut url = Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::Configuration(format!("invalid base URL {}: {}", base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                Error::Configuration(format!("base URL cannot have a path: {}", base_url))
            })?
            .pop_if_empty()
            .extend(path);
        let pairs = flatten_query(query);
        if !pairs.is_empty() || !extra_query.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in pairs.iter().chain(extra_query.iter()) {
                query_pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends one request and returns the raw response. Non-2xx statuses are not
    /// errors at this stage.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<RawResponse, Error> {
        let resolved = request.options.resolve(&self.config)?;
        let url = self.get_url(
            &resolved.base_url,
            &request.path,
            &request.query,
            &resolved.extra_query,
        )?;
        tracing::debug!("{} {}", request.method, url.path());

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .bearer_auth(&self.config.api_key)
            .header(ACCEPT, request.accept)
            .timeout(resolved.timeout)
            .headers(resolved.headers);
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(fields) => builder.json(&fields),
            Body::Multipart { fields, files } => builder.multipart(build_form(&fields, files)?),
        };

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} request: {}", request.method, e);
            Error::from(e)
        })?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from(e)
        })?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        decode_json(self.execute(request).await?)
    }

    pub(crate) async fn call_binary(&self, request: ApiRequest) -> Result<Binary, Error> {
        decode_binary(self.execute(request).await?)
    }

    pub(crate) async fn call_empty(&self, request: ApiRequest) -> Result<(), Error> {
        decode_empty(self.execute(request).await?)
    }

    pub(crate) async fn call_page<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        style: PageStyle,
    ) -> Result<Page<T>, Error> {
        let context = PageRequest {
            path: request.path.clone(),
            query: request.query.clone(),
            options: request.options.clone(),
        };
        let raw = self.execute(request).await?;
        decode_page(raw, style, context, self.clone())
    }
}

fn build_form(
    fields: &Map<String, Value>,
    files: Vec<(String, FileUpload)>,
) -> Result<Form, Error> {
    let mut form = Form::new();
    for (key, value) in flatten_query(fields) {
        form = form.text(key, value);
    }
    for (name, file) in files {
        let mut part = Part::bytes(file.bytes).file_name(file.file_name);
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                Error::Construction(format!("invalid content type {}: {}", content_type, e))
            })?;
        }
        form = form.part(name, part);
    }
    Ok(form)
}
