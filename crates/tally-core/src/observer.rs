//! Observers notified after every successful calculation.
//!
//! The engine holds shared references and invokes observers synchronously in
//! registration order. A failing observer is logged and skipped; it never
//! aborts the operation that triggered it.

use anyhow::Result;
use tracing::{debug, info};

use crate::calculation::Calculation;
use crate::persistence::HistoryStore;

/// Receives every calculation the engine records.
pub trait HistoryObserver: Send + Sync {
    /// Observer name used in log messages.
    fn name(&self) -> &str;

    /// Called after `latest` has been appended to `history`.
    fn on_calculation(&self, latest: &Calculation, history: &[Calculation]) -> Result<()>;
}

/// Logs each calculation through the tracing subscriber.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl HistoryObserver for LoggingObserver {
    fn name(&self) -> &str {
        "logging"
    }

    fn on_calculation(&self, latest: &Calculation, _history: &[Calculation]) -> Result<()> {
        info!(calculation = %latest, "Calculation performed");
        Ok(())
    }
}

/// Rewrites the history file after each calculation when enabled.
pub struct AutoSaveObserver {
    store: Box<dyn HistoryStore>,
    enabled: bool,
}

impl AutoSaveObserver {
    pub fn new(store: Box<dyn HistoryStore>, enabled: bool) -> Self {
        Self { store, enabled }
    }
}

impl HistoryObserver for AutoSaveObserver {
    fn name(&self) -> &str {
        "auto_save"
    }

    fn on_calculation(&self, _latest: &Calculation, history: &[Calculation]) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.store.save(history)?;
        debug!(entries = history.len(), "History auto-saved");
        Ok(())
    }
}
