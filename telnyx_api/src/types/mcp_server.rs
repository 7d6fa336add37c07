use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Model Context Protocol server registered for use by AI assistants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub url: String,
    /// Name of the stored secret holding the server's API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
