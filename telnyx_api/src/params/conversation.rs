use std::collections::HashMap;

use serde::Serialize;

use crate::request::RequestParams;

/// PostgREST-style filter values, e.g. `eq.support` or `gte.2025-01-01`.
pub mod filter {
    pub fn eq(value: &str) -> String {
        format!("eq.{}", value)
    }

    pub fn neq(value: &str) -> String {
        format!("neq.{}", value)
    }

    pub fn gt(value: &str) -> String {
        format!("gt.{}", value)
    }

    pub fn gte(value: &str) -> String {
        format!("gte.{}", value)
    }

    pub fn lt(value: &str) -> String {
        format!("lt.{}", value)
    }

    pub fn lte(value: &str) -> String {
        format!("lte.{}", value)
    }

    /// `*` is the wildcard, e.g. `like("*support*")`.
    pub fn like(pattern: &str) -> String {
        format!("like.{}", pattern)
    }
}

/// Query for `GET /ai/conversations`.
///
/// Each value is a PostgREST filter (see [`filter`]). The `metadata_*` fields
/// go out as `metadata->key` columns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_call_control_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_telnyx_agent_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_telnyx_end_user_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_telnyx_conversation_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// e.g. `created_at.desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Disjunction, e.g. `(name.eq.a,name.eq.b)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<String>,
}

impl RequestParams for ConversationListParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("metadata_assistant_id", "metadata->assistant_id"),
        ("metadata_call_control_id", "metadata->call_control_id"),
        ("metadata_telnyx_agent_target", "metadata->telnyx_agent_target"),
        ("metadata_telnyx_end_user_target", "metadata->telnyx_end_user_target"),
        (
            "metadata_telnyx_conversation_channel",
            "metadata->telnyx_conversation_channel",
        ),
        ("lastMessageAt", "last_message_at"),
        ("createdAt", "created_at"),
    ];
}

impl ConversationListParams {
    pub fn with_id(mut self, filter: &str) -> Self {
        self.id = Some(filter.to_string());
        self
    }

    pub fn with_name(mut self, filter: &str) -> Self {
        self.name = Some(filter.to_string());
        self
    }

    pub fn with_created_at(mut self, filter: &str) -> Self {
        self.created_at = Some(filter.to_string());
        self
    }

    pub fn with_last_message_at(mut self, filter: &str) -> Self {
        self.last_message_at = Some(filter.to_string());
        self
    }

    pub fn with_assistant_id(mut self, filter: &str) -> Self {
        self.metadata_assistant_id = Some(filter.to_string());
        self
    }

    pub fn with_call_control_id(mut self, filter: &str) -> Self {
        self.metadata_call_control_id = Some(filter.to_string());
        self
    }

    pub fn with_agent_target(mut self, filter: &str) -> Self {
        self.metadata_telnyx_agent_target = Some(filter.to_string());
        self
    }

    pub fn with_end_user_target(mut self, filter: &str) -> Self {
        self.metadata_telnyx_end_user_target = Some(filter.to_string());
        self
    }

    pub fn with_conversation_channel(mut self, filter: &str) -> Self {
        self.metadata_telnyx_conversation_channel = Some(filter.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn with_or(mut self, or: &str) -> Self {
        self.or = Some(or.to_string());
        self
    }
}

/// Body for `POST /ai/conversations`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sent as `{}` when explicitly set to an empty map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

impl RequestParams for ConversationCreateParams {}

impl ConversationCreateParams {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_metadata_entry(mut self, key: &str, value: &str) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }
}

/// Body for `PUT /ai/conversations/{id}`. The metadata map replaces the stored one.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationUpdateParams {
    pub metadata: HashMap<String, String>,
}

impl RequestParams for ConversationUpdateParams {}

impl ConversationUpdateParams {
    pub fn new(metadata: HashMap<String, String>) -> Self {
        Self { metadata }
    }
}
