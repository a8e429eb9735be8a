use std::sync::Arc;

use crate::services::{job_store::JobStore, notify::Notifier};

/// Shared service handles passed to the batch handler.
///
/// Either target may be absent; presence is decided once at startup from the
/// environment, so the per-record path only checks the `Option`.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn JobStore>>,
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn JobStore>>, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self { store, notifier }
    }
}
