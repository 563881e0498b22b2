use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::{self, RecordSource};
use crate::commands::settings::default_settings;
use crate::config::AppConfig;
use crate::error::PlanUpError;
use crate::models::notification::Notification;

/// Session state shared by every command.
pub struct AppState {
    pub config: AppConfig,
    pub records: Arc<dyn RecordSource>,
    notifications: Mutex<Vec<Notification>>,
    settings: Mutex<Value>,
    search_generation: AtomicU64,
}

impl AppState {
    pub fn new(config: AppConfig, records: Arc<dyn RecordSource>) -> Self {
        Self {
            config,
            records,
            notifications: Mutex::new(catalog::notifications()),
            settings: Mutex::new(default_settings()),
            search_generation: AtomicU64::new(0),
        }
    }

    /// Registers a new search request; any earlier one still in flight becomes stale.
    pub fn begin_search(&self) -> u64 {
        self.search_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest_search(&self, generation: u64) -> bool {
        self.search_generation.load(Ordering::SeqCst) == generation
    }

    pub fn notifications(&self) -> Result<MutexGuard<'_, Vec<Notification>>, PlanUpError> {
        self.notifications
            .lock()
            .map_err(|_| PlanUpError::LockPoisoned("notifications"))
    }

    pub fn settings(&self) -> Result<MutexGuard<'_, Value>, PlanUpError> {
        self.settings
            .lock()
            .map_err(|_| PlanUpError::LockPoisoned("settings"))
    }
}
