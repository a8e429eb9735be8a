use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent, SqsMessage};

use crate::app_state::AppState;
use crate::models::payload::{DlqNotification, parse_body};
use crate::services::job_store::StoreError;
use crate::services::notify::NotifyError;
use crate::services::remediation::{build_error_message, build_subject, resolve_job_id};

/// Process one dead-letter batch.
///
/// Records are remediated independently and sequentially; a failure is
/// captured per iteration and reported through the partial-batch response
/// instead of propagating, so the platform redelivers only the records that
/// actually failed. An empty failure list acknowledges the whole batch.
pub async fn process_batch(state: &AppState, event: SqsEvent) -> SqsBatchResponse {
    let mut batch_item_failures = Vec::new();

    tracing::info!(record_count = event.records.len(), "Processing DLQ batch");

    for record in &event.records {
        if let Err(e) = remediate_record(state, record).await {
            let message_id = record.message_id.clone().unwrap_or_default();
            tracing::error!(
                message_id = %message_id,
                error = %e,
                "Failed to remediate DLQ record"
            );
            batch_item_failures.push(BatchItemFailure {
                item_identifier: message_id,
            });
        }
    }

    SqsBatchResponse {
        batch_item_failures,
    }
}

/// Remediate a single dead-lettered record: mark the job failed in the record
/// store, then publish a failure notice. Either step is skipped silently when
/// its target is not configured or no identifier resolves.
async fn remediate_record(state: &AppState, record: &SqsMessage) -> Result<(), RemediationError> {
    let body = parse_body(record.body.as_deref());
    let fallback = record.message_id.as_deref().unwrap_or_default();
    let job_id = resolve_job_id(&body, fallback);

    match &state.store {
        Some(store) if !job_id.is_empty() => {
            let error = build_error_message(&body, record);
            store.mark_failed(&job_id, &error).await?;
            tracing::debug!(job_id = %job_id, "Marked job as failed in record store");
        }
        _ => {
            tracing::debug!(job_id = %job_id, "Skipping record store update");
        }
    }

    if let Some(notifier) = &state.notifier {
        let notice = DlqNotification {
            job_id: &job_id,
            record,
            body: &body,
        };
        let message = serde_json::to_string_pretty(&notice)?;
        notifier.publish(&build_subject(&job_id), &message).await?;
        tracing::debug!(job_id = %job_id, "Published failure notice");
    }

    Ok(())
}

/// Failure of a single record's remediation. Captured per record by
/// [`process_batch`], never raised to the invoking platform.
#[derive(Debug, thiserror::Error)]
pub enum RemediationError {
    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    #[error("Notify error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
