use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing_subscriber::EnvFilter;

use dlq_remediator::{
    app_state::AppState,
    config::AppConfig,
    handler,
    services::{
        job_store::{DynamoJobStore, JobStore},
        notify::{Notifier, SnsNotifier},
    },
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting DLQ remediator");

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration");

    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let store = config
        .ddb_jobs_table
        .map(|table| Arc::new(DynamoJobStore::new(&aws_config, table)) as Arc<dyn JobStore>);
    let notifier = config
        .notify_topic_arn
        .map(|arn| Arc::new(SnsNotifier::new(&aws_config, arn)) as Arc<dyn Notifier>);

    if store.is_none() && notifier.is_none() {
        tracing::warn!(
            "Neither DDB_JOBS_TABLE nor NOTIFY_TOPIC_ARN is set, records will only be logged"
        );
    }

    let state = AppState::new(store, notifier);
    let state_ref = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SqsEvent>| async move {
        Ok::<_, Error>(handler::process_batch(state_ref, event.payload).await)
    }))
    .await
}
