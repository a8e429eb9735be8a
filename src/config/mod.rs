use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// DynamoDB jobs table name. When unset the record-store update step is
    /// skipped entirely.
    pub ddb_jobs_table: Option<String>,

    /// SNS topic ARN for failure notices. When unset the notification step is
    /// skipped entirely.
    pub notify_topic_arn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
