use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{request::RequestParams, types::MessageType, Error};

/// Body for `POST /messages`.
///
/// A sender is required: either `from` or a `messaging_profile_id` whose
/// number pool picks one. Content is required too: `text`, `media_urls`, or both.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageParams {
    /// Destination in E.164 format.
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_failover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_profile_webhooks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_detect: Option<bool>,
    /// Schedules the message instead of sending immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<DateTime<Utc>>,
}

impl RequestParams for SendMessageParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("messagingProfileId", "messaging_profile_id"),
        ("mediaUrls", "media_urls"),
        ("webhookUrl", "webhook_url"),
        ("webhookFailoverUrl", "webhook_failover_url"),
        ("useProfileWebhooks", "use_profile_webhooks"),
        ("autoDetect", "auto_detect"),
        ("sendAt", "send_at"),
    ];

    fn validate(&self) -> Result<(), Error> {
        if self.to.trim().is_empty() {
            return Err(Error::Construction("`to` must not be empty".to_string()));
        }
        if self.from.is_none() && self.messaging_profile_id.is_none() {
            return Err(Error::Construction(
                "either `from` or `messaging_profile_id` is required".to_string(),
            ));
        }
        let has_media = self.media_urls.as_ref().is_some_and(|urls| !urls.is_empty());
        if self.text.is_none() && !has_media {
            return Err(Error::Construction(
                "either `text` or `media_urls` is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl SendMessageParams {
    pub fn new(to: &str) -> Self {
        Self {
            to: to.to_string(),
            from: None,
            messaging_profile_id: None,
            text: None,
            subject: None,
            media_urls: None,
            message_type: None,
            webhook_url: None,
            webhook_failover_url: None,
            use_profile_webhooks: None,
            auto_detect: None,
            send_at: None,
        }
    }

    pub fn with_from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn with_messaging_profile_id(mut self, messaging_profile_id: &str) -> Self {
        self.messaging_profile_id = Some(messaging_profile_id.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_media_url(mut self, url: &str) -> Self {
        self.media_urls
            .get_or_insert_with(Vec::new)
            .push(url.to_string());
        self
    }

    pub fn with_type(mut self, message_type: impl Into<MessageType>) -> Self {
        self.message_type = Some(message_type.into());
        self
    }

    pub fn with_webhook_url(mut self, url: &str) -> Self {
        self.webhook_url = Some(url.to_string());
        self
    }

    pub fn with_webhook_failover_url(mut self, url: &str) -> Self {
        self.webhook_failover_url = Some(url.to_string());
        self
    }

    pub fn with_use_profile_webhooks(mut self, enabled: bool) -> Self {
        self.use_profile_webhooks = Some(enabled);
        self
    }

    pub fn with_auto_detect(mut self, enabled: bool) -> Self {
        self.auto_detect = Some(enabled);
        self
    }

    pub fn with_send_at(mut self, send_at: DateTime<Utc>) -> Self {
        self.send_at = Some(send_at);
        self
    }
}
