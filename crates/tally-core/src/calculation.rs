//! The calculation entity: one arithmetic operation, frozen at creation.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_ops::OperationPlugin;
use tally_types::{TallyError, TallyResult};

/// ISO-8601 without offset; `%.f` prints fractional seconds only when present
/// and accepts their absence when parsing.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub(crate) fn parse_timestamp(text: &str) -> TallyResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|err| TallyError::operation(format!("Invalid timestamp '{text}': {err}")))
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// An immutable record of one arithmetic operation: its display name, both
/// operands, the computed result, and the moment it was performed.
#[derive(Debug, Clone)]
pub struct Calculation {
    operation: String,
    operand1: Decimal,
    operand2: Decimal,
    result: Decimal,
    timestamp: NaiveDateTime,
}

/// Flat text row shared by the history file and memento snapshots. Operands
/// and result are decimal text so the round trip never goes through binary
/// floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub operation: String,
    pub operand1: String,
    pub operand2: String,
    pub result: String,
    pub timestamp: String,
}

impl Calculation {
    /// Computes a new record through the given strategy, timestamped now.
    ///
    /// Domain violations reported by the strategy propagate unchanged.
    pub fn perform(
        strategy: &dyn OperationPlugin,
        operand1: Decimal,
        operand2: Decimal,
    ) -> TallyResult<Self> {
        let result = strategy.compute(operand1, operand2)?;
        Ok(Self {
            operation: strategy.display_name().to_string(),
            operand1,
            operand2,
            result,
            timestamp: now(),
        })
    }

    /// Reassembles a record from its persisted text form, trusting the stored
    /// result rather than recomputing it.
    pub fn from_record(record: &CalculationRecord) -> TallyResult<Self> {
        Ok(Self {
            operation: record.operation.clone(),
            operand1: parse_field("operand1", &record.operand1)?,
            operand2: parse_field("operand2", &record.operand2)?,
            result: parse_field("result", &record.result)?,
            timestamp: parse_timestamp(&record.timestamp)?,
        })
    }

    /// The persisted text form of this calculation.
    pub fn to_record(&self) -> CalculationRecord {
        CalculationRecord {
            operation: self.operation.clone(),
            operand1: self.operand1.to_string(),
            operand2: self.operand2.to_string(),
            result: self.result.to_string(),
            timestamp: format_timestamp(self.timestamp),
        }
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn operand1(&self) -> Decimal {
        self.operand1
    }

    pub fn operand2(&self) -> Decimal {
        self.operand2
    }

    pub fn result(&self) -> Decimal {
        self.result
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

fn parse_field(field: &str, text: &str) -> TallyResult<Decimal> {
    Decimal::from_str(text)
        .map_err(|_| TallyError::operation(format!("Invalid decimal value '{text}' in {field}")))
}

// Equality over the four value fields; the timestamp records when, not what.
impl PartialEq for Calculation {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation
            && self.operand1 == other.operand1
            && self.operand2 == other.operand2
            && self.result == other.result
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.operand1, self.operand2, self.result
        )
    }
}
