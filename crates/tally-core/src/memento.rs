//! Memento snapshots of the calculation history.
//!
//! Every snapshot owns a full copy of the history at capture time, so later
//! mutation of the live list never alters a memento already sitting on the
//! undo or redo stack.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    Calculation, CalculationRecord, format_timestamp, now, parse_timestamp,
};
use tally_types::TallyResult;

/// An immutable, timestamped snapshot of the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct Memento {
    history: Vec<Calculation>,
    timestamp: NaiveDateTime,
}

/// Serialized form of a memento: one record per history entry plus the
/// capture time as ISO-8601 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MementoSnapshot {
    pub history: Vec<CalculationRecord>,
    pub timestamp: String,
}

impl Memento {
    /// Captures an independent copy of the given history, timestamped now.
    pub fn capture(history: &[Calculation]) -> Self {
        Self { history: history.to_vec(), timestamp: now() }
    }

    /// Captures a copy with an explicit timestamp.
    pub fn capture_at(history: &[Calculation], timestamp: NaiveDateTime) -> Self {
        Self { history: history.to_vec(), timestamp }
    }

    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Consumes the memento, yielding the captured history.
    pub(crate) fn into_history(self) -> Vec<Calculation> {
        self.history
    }

    /// The serialized form of this memento.
    pub fn snapshot(&self) -> MementoSnapshot {
        MementoSnapshot {
            history: self.history.iter().map(Calculation::to_record).collect(),
            timestamp: format_timestamp(self.timestamp),
        }
    }

    /// Reconstructs a memento from its serialized form.
    ///
    /// The timestamp must be ISO-8601, with or without fractional seconds;
    /// fractional precision is preserved exactly and is zero when absent.
    pub fn from_snapshot(snapshot: &MementoSnapshot) -> TallyResult<Self> {
        let history = snapshot
            .history
            .iter()
            .map(Calculation::from_record)
            .collect::<TallyResult<Vec<_>>>()?;
        Ok(Self { history, timestamp: parse_timestamp(&snapshot.timestamp)? })
    }
}
