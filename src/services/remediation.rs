use aws_lambda_events::event::sqs::SqsMessage;
use serde_json::Value;

/// SQS attribute carrying the delivery-attempt counter.
const RECEIVE_COUNT_ATTR: &str = "ApproximateReceiveCount";

/// Identifier locations tried in priority order.
const ID_PATHS: &[&[&str]] = &[&["jobId"], &["id"], &["params", "jobId"], &["job", "id"]];

/// Resolve the job identifier for a dead-lettered record.
///
/// Producers are inconsistent about where the identifier lives, so this walks
/// the known locations in priority order and falls back to the record's own
/// message id. Empty strings do not count as a match; absent or malformed
/// bodies degrade to the fallback.
pub fn resolve_job_id(body: &Value, fallback: &str) -> String {
    ID_PATHS
        .iter()
        .find_map(|path| lookup(body, path))
        .unwrap_or(fallback)
        .to_string()
}

fn lookup<'a>(body: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut cursor = body;
    for key in path {
        cursor = cursor.get(key)?;
    }
    cursor.as_str().filter(|s| !s.is_empty())
}

/// Build the diagnostic stored on the failed job record.
///
/// Embeds the last body seen and the delivery-attempt count so a failure can
/// be triaged without digging through queue history.
pub fn build_error_message(body: &Value, record: &SqsMessage) -> String {
    let receive_count = record
        .attributes
        .get(RECEIVE_COUNT_ATTR)
        .map(String::as_str)
        .unwrap_or("?");
    let last_body = serde_json::to_string(body).unwrap_or_else(|_| "null".to_string());

    format!(
        "Message moved to DLQ after max receives. \
         LastBody={last_body} ApproxReceiveCount={receive_count}"
    )
}

/// Subject line for the failure notice.
pub fn build_subject(job_id: &str) -> String {
    format!("DLQ: job failed {job_id}").trim().to_string()
}
