use serde::Serialize;

use crate::{request::RequestParams, Error, Field};

use super::common::{PageParams, Paginate};

/// Body for `POST /ai/mcp_servers`.
#[derive(Debug, Clone, Serialize)]
pub struct McpServerCreateParams {
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,
}

impl RequestParams for McpServerCreateParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("apiKeyRef", "api_key_ref"),
        ("allowedTools", "allowed_tools"),
    ];

    fn validate(&self) -> Result<(), Error> {
        let required = [
            ("name", &self.name),
            ("type", &self.server_type),
            ("url", &self.url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Construction(format!("`{}` must not be empty", field)));
            }
        }
        Ok(())
    }
}

impl McpServerCreateParams {
    pub fn new(name: &str, server_type: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            server_type: server_type.to_string(),
            url: url.to_string(),
            api_key_ref: None,
            allowed_tools: None,
        }
    }

    pub fn with_api_key_ref(mut self, api_key_ref: &str) -> Self {
        self.api_key_ref = Some(api_key_ref.to_string());
        self
    }

    /// Restricts the tools assistants may call. An empty list allows none.
    pub fn with_allowed_tools(mut self, tools: &[&str]) -> Self {
        self.allowed_tools = Some(tools.iter().map(|t| t.to_string()).collect());
        self
    }
}

/// Body for `PUT /ai/mcp_servers/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct McpServerUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `Null` removes the stored key reference.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub api_key_ref: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,
}

impl RequestParams for McpServerUpdateParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("apiKeyRef", "api_key_ref"),
        ("allowedTools", "allowed_tools"),
    ];
}

impl McpServerUpdateParams {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_type(mut self, server_type: &str) -> Self {
        self.server_type = Some(server_type.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_api_key_ref(mut self, api_key_ref: &str) -> Self {
        self.api_key_ref = Field::Value(api_key_ref.to_string());
        self
    }

    pub fn without_api_key_ref(mut self) -> Self {
        self.api_key_ref = Field::Null;
        self
    }

    pub fn with_allowed_tools(mut self, tools: &[&str]) -> Self {
        self.allowed_tools = Some(tools.iter().map(|t| t.to_string()).collect());
        self
    }
}

/// Query for `GET /ai/mcp_servers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct McpServerListParams {
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub server_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Paginate for McpServerListParams {
    fn get_page(&mut self) -> &mut PageParams {
        &mut self.page
    }
}

impl RequestParams for McpServerListParams {
    fn validate(&self) -> Result<(), Error> {
        self.page.validate()
    }
}

impl McpServerListParams {
    pub fn with_type(mut self, server_type: &str) -> Self {
        self.server_type = Some(server_type.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}
