//! The history engine: a single calculator session.
//!
//! Owns the live history list, the undo/redo stacks of mementos, the
//! registered observers, and the currently selected operation strategy.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::calculation::{Calculation, CalculationRecord};
use crate::config::CalculatorConfig;
use crate::memento::Memento;
use crate::observer::HistoryObserver;
use crate::persistence::{CsvHistoryStore, HistoryStore};
use tally_ops::OperationPlugin;
use tally_types::{TallyError, TallyResult, parse_operand};

/// Core session engine with a bounded, undoable calculation history.
pub struct Calculator {
    config: CalculatorConfig,
    store: Box<dyn HistoryStore>,
    history: Vec<Calculation>,
    undo_stack: Vec<Memento>,
    redo_stack: Vec<Memento>,
    observers: Vec<Arc<dyn HistoryObserver>>,
    operation: Option<Box<dyn OperationPlugin>>,
}

impl Calculator {
    /// Creates an engine persisting to the CSV file named by the config.
    pub fn new(config: CalculatorConfig) -> TallyResult<Self> {
        let store = Box::new(CsvHistoryStore::new(config.history_file()));
        Self::with_store(config, store)
    }

    /// Creates an engine over an explicit history store.
    pub fn with_store(
        config: CalculatorConfig,
        store: Box<dyn HistoryStore>,
    ) -> TallyResult<Self> {
        config.validate()?;
        info!(
            max_history_size = config.max_history_size,
            auto_save = config.auto_save,
            "Calculator initialized with configuration"
        );
        Ok(Self {
            config,
            store,
            history: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            observers: Vec::new(),
            operation: None,
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The live history, oldest first.
    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Registers an observer. Re-registering the same observer is a no-op.
    pub fn add_observer(&mut self, observer: Arc<dyn HistoryObserver>) {
        let duplicate = self.observers.iter().any(|existing| Arc::ptr_eq(existing, &observer));
        if duplicate {
            debug!(observer = observer.name(), "Observer already registered");
            return;
        }
        debug!(observer = observer.name(), "Observer registered");
        self.observers.push(observer);
    }

    /// Deregisters an observer. Removing one that was never registered is a
    /// no-op.
    pub fn remove_observer(&mut self, observer: &Arc<dyn HistoryObserver>) {
        self.observers.retain(|existing| !Arc::ptr_eq(existing, observer));
    }

    /// Replaces the active operation strategy. History is untouched.
    pub fn set_operation(&mut self, strategy: Box<dyn OperationPlugin>) {
        debug!(operation = strategy.display_name(), "Operation strategy set");
        self.operation = Some(strategy);
    }

    /// Runs the active strategy over two operand texts.
    ///
    /// On success the pre-mutation history goes onto the undo stack, the new
    /// calculation is appended (evicting from the front once over capacity),
    /// the redo trail is invalidated, and observers are notified in
    /// registration order.
    #[instrument(skip(self))]
    pub fn perform_operation(&mut self, operand1: &str, operand2: &str) -> TallyResult<Decimal> {
        let strategy = self
            .operation
            .as_deref()
            .ok_or_else(|| TallyError::operation("No operation set"))?;
        let a = parse_operand(operand1)?;
        let b = parse_operand(operand2)?;
        let calculation = Calculation::perform(strategy, a, b)?;
        let result = calculation.result();

        self.undo_stack.push(Memento::capture(&self.history));
        self.history.push(calculation);
        self.trim_history();
        self.redo_stack.clear();
        self.notify_observers();

        info!(result = %result, "Operation performed");
        Ok(result)
    }

    /// Restores the history to its state before the last mutation. Returns
    /// `false` and leaves everything untouched when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(memento) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(Memento::capture(&self.history));
        self.history = memento.into_history();
        debug!(entries = self.history.len(), "Undo applied");
        true
    }

    /// Reapplies the most recently undone mutation. Returns `false` and
    /// leaves everything untouched when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(memento) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(Memento::capture(&self.history));
        self.history = memento.into_history();
        debug!(entries = self.history.len(), "Redo applied");
        true
    }

    /// Empties the history and both stacks. Irreversible.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        info!("History cleared");
    }

    /// One display line per history entry, oldest first.
    pub fn show_history(&self) -> Vec<String> {
        self.history.iter().map(Calculation::to_string).collect()
    }

    /// The tabular view of the history, one record per entry.
    pub fn history_records(&self) -> Vec<CalculationRecord> {
        self.history.iter().map(Calculation::to_record).collect()
    }

    /// Writes the history through the persistence adapter. An empty history
    /// still writes an empty table.
    #[instrument(skip(self))]
    pub fn save_history(&self) -> TallyResult<()> {
        self.store.save(&self.history)?;
        info!(entries = self.history.len(), "History saved");
        Ok(())
    }

    /// Replaces the history with the persisted table, trimming if the file
    /// holds more entries than the configured capacity. A missing or empty
    /// file yields an empty history.
    #[instrument(skip(self))]
    pub fn load_history(&mut self) -> TallyResult<()> {
        self.history = self.store.load()?;
        self.trim_history();
        info!(entries = self.history.len(), "History loaded");
        Ok(())
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.config.max_history_size {
            let evicted = self.history.remove(0);
            debug!(calculation = %evicted, "Evicted oldest history entry");
        }
    }

    fn notify_observers(&self) {
        let Some(latest) = self.history.last() else {
            return;
        };
        for observer in &self.observers {
            if let Err(err) = observer.on_calculation(latest, &self.history) {
                warn!(observer = observer.name(), error = %err, "Observer notification failed");
            }
        }
    }
}
