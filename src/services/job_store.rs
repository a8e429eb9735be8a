use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{SecondsFormat, Utc};

use crate::models::job::JobStatus;

/// Record store holding job state, keyed by job id.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Mark a job as failed with a diagnostic, stamping the update time.
    ///
    /// A plain field update with no precondition on prior state; re-applying
    /// it with the same inputs yields the same end state.
    async fn mark_failed(&self, job_id: &str, error: &str) -> Result<(), StoreError>;
}

/// DynamoDB-backed job store.
pub struct DynamoJobStore {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoJobStore {
    pub fn new(config: &aws_config::SdkConfig, table: String) -> Self {
        Self {
            client: aws_sdk_dynamodb::Client::new(config),
            table,
        }
    }
}

#[async_trait]
impl JobStore for DynamoJobStore {
    async fn mark_failed(&self, job_id: &str, error: &str) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        // `status` and `error` are reserved words in update expressions,
        // hence the attribute-name placeholders.
        self.client
            .update_item()
            .table_name(&self.table)
            .key("id", AttributeValue::S(job_id.to_string()))
            .update_expression("SET #status = :failed, #error = :err, #updatedAt = :now")
            .expression_attribute_names("#status", "status")
            .expression_attribute_names("#error", "error")
            .expression_attribute_names("#updatedAt", "updatedAt")
            .expression_attribute_values(
                ":failed",
                AttributeValue::S(JobStatus::Failed.as_str().to_string()),
            )
            .expression_attribute_values(":err", AttributeValue::S(error.to_string()))
            .expression_attribute_values(":now", AttributeValue::S(now))
            .send()
            .await
            .map_err(|e| StoreError::Update(e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("DynamoDB update failed: {0}")]
    Update(String),
}
