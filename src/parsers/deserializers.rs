use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Transcript timestamps appear either as Unix milliseconds or as RFC3339
/// strings, depending on the exporter version. Accept both.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Millis(i64),
        Text(String),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| Error::custom(format!("timestamp {} out of range", ms))),
        RawTimestamp::Text(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp {:?}: {}", s, e))),
    }
}

/// Conversation IDs must be UUIDs; the original spelling is kept after
/// validation.
pub fn deserialize_conversation_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if s.is_empty() {
        return Err(Error::custom("conversation ID is empty"));
    }

    Uuid::parse_str(&s)
        .map_err(|e| Error::custom(format!("conversation ID {:?} is not a UUID: {}", s, e)))?;

    Ok(s)
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::{MessageId, MessageRecord, Sender};

    #[test]
    fn test_message_record_timestamp_integer() {
        let json = r#"{
            "id": 7,
            "body": "hello world",
            "sender": "outgoing",
            "timestamp": 1762076480016,
            "conversationId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;

        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, MessageId(7));
        assert_eq!(record.body, "hello world");
        assert_eq!(record.sender, Sender::Outgoing);

        let expected_ts = DateTime::from_timestamp_millis(1762076480016).unwrap();
        assert_eq!(record.timestamp, expected_ts);
    }

    #[test]
    fn test_message_record_timestamp_rfc3339() {
        let json = r#"{
            "id": 8,
            "body": "reply",
            "sender": "incoming",
            "timestamp": "2025-11-02T09:41:20.016Z",
            "conversationId": "550e8400-e29b-41d4-a716-446655440001"
        }"#;

        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.sender, Sender::Incoming);
        assert_eq!(record.conversation_id, "550e8400-e29b-41d4-a716-446655440001");
    }

    #[test]
    fn test_message_record_invalid_conversation_id() {
        let json = r#"{
            "id": 9,
            "body": "x",
            "sender": "incoming",
            "timestamp": 1000,
            "conversationId": "not-a-uuid"
        }"#;

        let result: Result<MessageRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_record_empty_conversation_id() {
        let json = r#"{
            "id": 10,
            "body": "x",
            "sender": "outgoing",
            "timestamp": 1000,
            "conversationId": ""
        }"#;

        let result: Result<MessageRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_record_invalid_timestamp_type() {
        let json = r#"{
            "id": 11,
            "body": "x",
            "sender": "outgoing",
            "timestamp": true,
            "conversationId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;

        let result: Result<MessageRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_record_timestamp_out_of_range() {
        let json = r#"{
            "id": 12,
            "body": "x",
            "sender": "outgoing",
            "timestamp": 9223372036854775807,
            "conversationId": "550e8400-e29b-41d4-a716-446655440000"
        }"#;

        let result: Result<MessageRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
