use serde::Serialize;

use crate::{enums::open_enum, request::RequestParams, types::PhoneNumberStatus, Error, Field};

use super::common::{PageParams, Paginate};

open_enum! {
    /// Sort key for number lists. A leading `-` sorts descending.
    pub enum PhoneNumberSort {
        PurchasedAt => "purchased_at",
        PurchasedAtDesc => "-purchased_at",
        PhoneNumber => "phone_number",
        ConnectionName => "connection_name",
        UsagePaymentMethod => "usage_payment_method",
    }
}

/// Query for `GET /phone_numbers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhoneNumberListParams {
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PhoneNumberFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<PhoneNumberSort>,
}

/// Sent as `filter[...]` query keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhoneNumberFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Matches partial numbers, e.g. `+1312`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PhoneNumberStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_address_id: Option<String>,
}

impl Paginate for PhoneNumberListParams {
    fn get_page(&mut self) -> &mut PageParams {
        &mut self.page
    }
}

impl RequestParams for PhoneNumberListParams {
    fn validate(&self) -> Result<(), Error> {
        self.page.validate()
    }
}

impl PhoneNumberListParams {
    fn filter_mut(&mut self) -> &mut PhoneNumberFilter {
        self.filter.get_or_insert_with(PhoneNumberFilter::default)
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.filter_mut().tag = Some(tag.to_string());
        self
    }

    pub fn with_phone_number(mut self, phone_number: &str) -> Self {
        self.filter_mut().phone_number = Some(phone_number.to_string());
        self
    }

    pub fn with_status(mut self, status: impl Into<PhoneNumberStatus>) -> Self {
        self.filter_mut().status = Some(status.into());
        self
    }

    pub fn with_connection_id(mut self, connection_id: &str) -> Self {
        self.filter_mut().connection_id = Some(connection_id.to_string());
        self
    }

    pub fn with_customer_reference(mut self, customer_reference: &str) -> Self {
        self.filter_mut().customer_reference = Some(customer_reference.to_string());
        self
    }

    pub fn with_emergency_address_id(mut self, emergency_address_id: &str) -> Self {
        self.filter_mut().emergency_address_id = Some(emergency_address_id.to_string());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<PhoneNumberSort>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Body for `PATCH /phone_numbers/{id}`.
///
/// `connection_id` and `billing_group_id` accept an explicit `null` to detach
/// the number, which is different from leaving them untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhoneNumberUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub connection_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub billing_group_id: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_voice_enabled: Option<bool>,
}

impl RequestParams for PhoneNumberUpdateParams {
    const RENAMES: &'static [(&'static str, &'static str)] = &[
        ("connectionId", "connection_id"),
        ("billingGroupId", "billing_group_id"),
        ("customerReference", "customer_reference"),
        ("externalPin", "external_pin"),
        ("hdVoiceEnabled", "hd_voice_enabled"),
    ];
}

impl PhoneNumberUpdateParams {
    /// Replaces the number's tags. An empty list clears them.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_connection_id(mut self, connection_id: &str) -> Self {
        self.connection_id = Field::Value(connection_id.to_string());
        self
    }

    /// Detaches the number from its voice connection.
    pub fn without_connection(mut self) -> Self {
        self.connection_id = Field::Null;
        self
    }

    pub fn with_billing_group_id(mut self, billing_group_id: &str) -> Self {
        self.billing_group_id = Field::Value(billing_group_id.to_string());
        self
    }

    pub fn without_billing_group(mut self) -> Self {
        self.billing_group_id = Field::Null;
        self
    }

    pub fn with_customer_reference(mut self, customer_reference: &str) -> Self {
        self.customer_reference = Some(customer_reference.to_string());
        self
    }

    pub fn with_external_pin(mut self, external_pin: &str) -> Self {
        self.external_pin = Some(external_pin.to_string());
        self
    }

    pub fn with_hd_voice_enabled(mut self, enabled: bool) -> Self {
        self.hd_voice_enabled = Some(enabled);
        self
    }
}
