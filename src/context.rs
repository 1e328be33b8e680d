//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::inflight::{InFlight, Operation};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Data-access layer, built from `AppConfig`
    pub api: ApiClient,
    /// Requests currently on the wire, per task
    inflight: StoredValue<InFlight>,
}

impl AppContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            inflight: StoredValue::new(InFlight::new()),
        }
    }

    /// Claim the request slot for `(task_id, op)`
    pub fn try_begin(&self, task_id: &str, op: Operation) -> bool {
        let started = self.inflight.try_update_value(|f| f.try_begin(task_id, op)).unwrap_or(false);
        if !started {
            log::debug!("dropping {:?} on {}: request already in flight", op, task_id);
        }
        started
    }

    pub fn finish(&self, task_id: &str, op: Operation) {
        self.inflight.update_value(|f| f.finish(task_id, op));
    }
}

/// Get the app context (provided by `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
