//! Tabular persistence for the calculation history.
//!
//! One CSV row per calculation, columns `operation, operand1, operand2,
//! result, timestamp`. Numeric columns hold decimal text so nothing passes
//! through binary floating point on the way to disk or back.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::calculation::{Calculation, CalculationRecord};
use tally_types::{TallyError, TallyResult};

pub(crate) const HISTORY_COLUMNS: [&str; 5] =
    ["operation", "operand1", "operand2", "result", "timestamp"];

/// The engine's contract toward durable storage.
pub trait HistoryStore: Send + Sync {
    /// Writes the full history, replacing any previous contents. An empty
    /// history writes an empty table.
    fn save(&self, history: &[Calculation]) -> TallyResult<()>;

    /// Reads the full history. A missing file or an empty table is an empty
    /// history; anything unreadable is an `Operation` error.
    fn load(&self) -> TallyResult<Vec<Calculation>>;
}

/// CSV-backed history store.
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryStore for CsvHistoryStore {
    fn save(&self, history: &[Calculation]) -> TallyResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                TallyError::operation(format!("Failed to create history directory: {err}"))
            })?;
        }
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|err| TallyError::operation(format!("Failed to open history file: {err}")))?;
        // Header is written explicitly so an empty history still yields a
        // well-formed table.
        writer
            .write_record(HISTORY_COLUMNS)
            .and_then(|()| {
                for calculation in history {
                    writer.serialize(calculation.to_record())?;
                }
                writer.flush().map_err(csv::Error::from)
            })
            .map_err(|err| TallyError::operation(format!("Failed to write history file: {err}")))?;
        debug!(entries = history.len(), path = %self.path.display(), "History saved");
        Ok(())
    }

    fn load(&self) -> TallyResult<Vec<Calculation>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No history file, starting empty");
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|err| TallyError::operation(format!("Failed to open history file: {err}")))?;
        let mut history = Vec::new();
        for row in reader.deserialize::<CalculationRecord>() {
            let record = row.map_err(|err| {
                TallyError::operation(format!("Failed to read history file: {err}"))
            })?;
            history.push(Calculation::from_record(&record)?);
        }
        debug!(entries = history.len(), path = %self.path.display(), "History loaded");
        Ok(history)
    }
}
