#![deny(warnings)]
//! Core functionality for the Tally calculator.
//!
//! This crate owns the mutable session state: the calculation history, the
//! memento-based undo/redo stacks, observer notification, and the contract
//! toward the tabular history file. Arithmetic itself lives in `tally-ops`;
//! the interactive shell lives in `tally-cli`.

/// Immutable record of a single arithmetic operation
pub mod calculation;
/// Session configuration with environment overrides
pub mod config;
/// History engine with undo/redo and observer notification
pub mod engine;
/// Timestamped snapshots of the history list
pub mod memento;
/// Observers notified on every successful calculation
pub mod observer;
/// Tabular on-disk representation of the history
pub mod persistence;

pub use calculation::{Calculation, CalculationRecord};
pub use config::CalculatorConfig;
pub use engine::Calculator;
pub use memento::{Memento, MementoSnapshot};
pub use observer::{AutoSaveObserver, HistoryObserver, LoggingObserver};
pub use persistence::{CsvHistoryStore, HistoryStore};
