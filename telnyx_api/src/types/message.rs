//! Messaging types returned by the `/messages` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::open_enum;

open_enum! {
    /// Message channel.
    pub enum MessageType {
        Sms => "SMS",
        Mms => "MMS",
    }
}

open_enum! {
    pub enum Direction {
        Inbound => "inbound",
        Outbound => "outbound",
    }
}

open_enum! {
    /// Delivery state of one recipient.
    pub enum DeliveryStatus {
        Queued => "queued",
        Sending => "sending",
        Sent => "sent",
        Expired => "expired",
        SendingFailed => "sending_failed",
        DeliveryUnconfirmed => "delivery_unconfirmed",
        Delivered => "delivered",
        DeliveryFailed => "delivery_failed",
    }
}

/// An outbound or inbound SMS/MMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    pub direction: Direction,

    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub from: MessageEndpoint,

    pub to: Vec<MessageEndpoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default)]
    pub media: Vec<MessageMedia>,

    /// Number of segments the text was split into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,

    /// Not known until the message is finalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Carrier errors, passed through unparsed.
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Sender or recipient of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEndpoint {
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageMedia {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    /// Decimal string, e.g. `"0.0051"`.
    pub amount: String,
    pub currency: String,
}
