//! Phone number inventory types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::open_enum;

open_enum! {
    /// Lifecycle state of a number in the account.
    pub enum PhoneNumberStatus {
        PurchasePending => "purchase-pending",
        PurchaseFailed => "purchase-failed",
        PortPending => "port-pending",
        PortFailed => "port-failed",
        Active => "active",
        Deleted => "deleted",
        EmergencyOnly => "emergency-only",
        PortedOut => "ported-out",
        PortOutPending => "port-out-pending",
        ProvisionPending => "provision-pending",
        RequirementInfoUnderReview => "requirement-info-under-review",
        RequirementInfoException => "requirement-info-exception",
    }
}

/// A phone number owned by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// E.164 formatted number.
    pub phone_number: String,

    pub status: PhoneNumberStatus,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Voice connection the number routes to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_profile_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_group_id: Option<String>,

    #[serde(default)]
    pub emergency_enabled: bool,

    #[serde(default)]
    pub call_forwarding_enabled: bool,

    #[serde(default)]
    pub t38_fax_gateway_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
