use chrono::{TimeZone, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use telnyx_api::response::decode_json;
use telnyx_api::types::{
    Balance, Conversation, DeliveryStatus, Direction, McpServer, Media, Message, MessageType,
    PageMeta, PhoneNumber, PhoneNumberStatus, Response, Transcription,
};
use telnyx_api::{Field, RawResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[derive(Deserialize)]
struct Listed<T> {
    data: Vec<T>,
    meta: PageMeta,
}

#[test]
fn deserialize_balance() {
    let json = load_fixture("balance.json");
    let resp: Response<Balance> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.record_type.as_deref(), Some("balance"));
    assert_eq!(resp.data.balance, "300.00");
    assert_eq!(resp.data.credit_limit, "100.00");
    assert_eq!(resp.data.available_credit, "400.00");
    assert_eq!(resp.data.pending.as_deref(), Some("10.00"));
}

#[test]
fn deserialize_phone_numbers_full() {
    let json = load_fixture("phone_numbers.json");
    let resp: Listed<PhoneNumber> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.meta.total_pages, Some(3));
    assert_eq!(resp.meta.total_results, Some(6));

    let number = &resp.data[0];
    assert_eq!(number.phone_number, "+13125550001");
    assert_eq!(number.status, PhoneNumberStatus::Active);
    assert_eq!(number.tags, vec!["support", "chicago"]);
    assert_eq!(number.connection_name.as_deref(), Some("support-sip"));
    assert_eq!(number.billing_group_id, None);
    assert!(number.emergency_enabled);
    assert!(!number.t38_fax_gateway_enabled);
    assert_eq!(
        number.created_at,
        Utc.with_ymd_and_hms(2024, 3, 11, 15, 4, 5).unwrap()
    );
}

#[test]
fn deserialize_phone_numbers_sparse() {
    let json = load_fixture("phone_numbers.json");
    let resp: Listed<PhoneNumber> = serde_json::from_str(&json).unwrap();

    let pending = &resp.data[1];
    assert_eq!(pending.status, PhoneNumberStatus::PurchasePending);
    assert!(pending.tags.is_empty());
    assert_eq!(pending.connection_id, None);
    assert_eq!(pending.purchased_at, None);
    assert!(!pending.call_forwarding_enabled);
}

#[test]
fn unknown_status_is_preserved() {
    let json = r#"{
        "id": "1",
        "phone_number": "+13125550009",
        "status": "quarantined",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let number: PhoneNumber = serde_json::from_str(json).unwrap();
    assert_eq!(
        number.status,
        PhoneNumberStatus::Other("quarantined".to_string())
    );
    assert_eq!(number.status.as_str(), "quarantined");
}

#[test]
fn deserialize_mcp_servers_bare_array() {
    let json = load_fixture("mcp_servers.json");
    let servers: Vec<McpServer> = serde_json::from_str(&json).unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].server_type, "sse");
    assert_eq!(servers[0].api_key_ref.as_deref(), Some("weather_api_key"));
    assert_eq!(
        servers[0].allowed_tools.as_deref(),
        Some(&["get_forecast".to_string()][..])
    );
    assert_eq!(servers[1].api_key_ref, None);
    assert_eq!(servers[1].allowed_tools, None);
}

#[test]
fn deserialize_message() {
    let json = load_fixture("message.json");
    let resp: Response<Message> = serde_json::from_str(&json).unwrap();
    let message = resp.data;

    assert_eq!(message.direction, Direction::Outbound);
    assert_eq!(message.message_type, MessageType::Mms);
    assert_eq!(message.from.phone_number, "+18445550001");
    assert_eq!(message.from.carrier.as_deref(), Some("TELNYX LLC"));
    assert_eq!(message.to.len(), 2);
    assert_eq!(message.to[0].status, Some(DeliveryStatus::Queued));
    assert_eq!(message.parts, Some(1));
    assert_eq!(message.media.len(), 1);
    assert_eq!(message.media[0].size, Some(12345));
    assert_eq!(message.media[0].sha256, None);
    assert_eq!(message.cost, None);
    assert_eq!(message.sent_at, None);
    assert!(message.received_at.is_some());
    assert!(message.errors.is_empty());
}

#[test]
fn unknown_delivery_status_is_preserved() {
    let json = load_fixture("message.json");
    let resp: Response<Message> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        resp.data.to[1].status,
        Some(DeliveryStatus::Other("delivery_pending_review".to_string()))
    );
}

#[test]
fn deserialize_conversations() {
    let json = load_fixture("conversations.json");
    let resp: Response<Vec<Conversation>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);

    let first = &resp.data[0];
    assert_eq!(first.name.as_deref(), Some("support-call"));
    assert_eq!(
        first.metadata.get("assistant_id").map(String::as_str),
        Some("assistant-123")
    );
    assert!(first.last_message_at.is_some());

    let second = &resp.data[1];
    assert_eq!(second.name, None);
    assert!(second.metadata.is_empty());
}

#[test]
fn deserialize_transcription() {
    let json = load_fixture("transcription.json");
    let transcription: Transcription = serde_json::from_str(&json).unwrap();
    assert_eq!(transcription.duration, Some(2.75));
    let segments = transcription.segments.unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1].start, 1.2);
    assert_eq!(segments[1].text, "how can I help?");
}

/// Encodes `value` and decodes it back through the response converter.
fn through_decoder<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_vec(value).unwrap();
    decode_json(RawResponse::new(200, encoded)).unwrap()
}

#[test]
fn phone_numbers_round_trip_through_decoder() {
    let resp: Listed<PhoneNumber> =
        serde_json::from_str(&load_fixture("phone_numbers.json")).unwrap();
    for number in resp.data {
        assert_eq!(through_decoder(&number), number);
    }
    assert_eq!(through_decoder(&resp.meta), resp.meta);
}

#[test]
fn balance_and_mcp_servers_round_trip_through_decoder() {
    let balance: Response<Balance> = serde_json::from_str(&load_fixture("balance.json")).unwrap();
    assert_eq!(through_decoder(&balance), balance);

    let servers: Vec<McpServer> = serde_json::from_str(&load_fixture("mcp_servers.json")).unwrap();
    assert_eq!(through_decoder(&servers), servers);
}

#[test]
fn message_round_trips_through_decoder() {
    let resp: Response<Message> = serde_json::from_str(&load_fixture("message.json")).unwrap();
    let encoded = serde_json::to_value(&resp).unwrap();
    assert_eq!(encoded["data"]["type"], "MMS");
    assert_eq!(through_decoder(&resp), resp);
}

#[test]
fn conversations_round_trip_through_decoder() {
    let resp: Response<Vec<Conversation>> =
        serde_json::from_str(&load_fixture("conversations.json")).unwrap();
    assert_eq!(through_decoder(&resp), resp);
}

#[test]
fn transcription_floats_round_trip_through_decoder() {
    let transcription: Transcription =
        serde_json::from_str(&load_fixture("transcription.json")).unwrap();
    let decoded = through_decoder(&transcription);
    assert_eq!(decoded, transcription);
    assert_eq!(decoded.duration, Some(2.75));
    assert_eq!(decoded.segments.unwrap()[0].end, 1.2);
}

#[test]
fn media_round_trips_through_decoder() {
    let media = Media {
        media_name: "greeting.mp3".to_string(),
        content_type: Some("audio/mpeg".to_string()),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 2, 8, 30, 0).unwrap(),
        expires_at: None,
    };
    assert_eq!(through_decoder(&media), media);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct NumberPatch {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    connection_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    billing_group_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    tags: Field<Vec<String>>,
}

#[test]
fn three_state_fields_round_trip_through_decoder() {
    let patch = NumberPatch {
        connection_id: Field::Absent,
        billing_group_id: Field::Null,
        tags: Field::Value(vec!["support".to_string()]),
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        json!({"billing_group_id": null, "tags": ["support"]})
    );
    assert_eq!(through_decoder(&patch), patch);
}
