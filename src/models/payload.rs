use aws_lambda_events::event::sqs::SqsMessage;
use serde::Serialize;
use serde_json::Value;

/// Leniently parse a record body as JSON.
///
/// Dead-letter bodies are whatever the producer last sent; a missing or
/// malformed body degrades to `Null` instead of failing the record.
pub fn parse_body(raw: Option<&str>) -> Value {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or(Value::Null)
}

/// Payload published to the notification topic for a dead-lettered job.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DlqNotification<'a> {
    pub job_id: &'a str,
    pub record: &'a SqsMessage,
    pub body: &'a Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_json() {
        assert_eq!(parse_body(Some(r#"{"jobId":"j-1"}"#)), json!({"jobId": "j-1"}));
    }

    #[test]
    fn malformed_body_degrades_to_null() {
        assert_eq!(parse_body(Some("not json at all")), Value::Null);
    }

    #[test]
    fn missing_body_degrades_to_null() {
        assert_eq!(parse_body(None), Value::Null);
    }
}
