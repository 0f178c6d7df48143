//! Session configuration.
//!
//! Defaults first, then environment overrides, then whatever the CLI layer
//! sets explicitly.

use std::path::PathBuf;

use tally_types::{TallyError, TallyResult};

/// Runtime configuration for one calculator session.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Directory holding the history subdirectory
    pub base_dir: PathBuf,
    /// Capacity bound on the history list; oldest entries are evicted first
    pub max_history_size: usize,
    /// Whether the auto-save observer rewrites the history file on every
    /// calculation
    pub auto_save: bool,
    /// Decimal places shown for results in the REPL
    pub precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { base_dir: PathBuf::from("."), max_history_size: 1000, auto_save: true, precision: 10 }
    }
}

impl CalculatorConfig {
    /// Creates a configuration rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into(), ..Self::default() }
    }

    /// Creates a configuration from environment variables, keeping defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_dir) = std::env::var("CALCULATOR_BASE_DIR") {
            config.base_dir = PathBuf::from(base_dir);
        }
        if let Ok(size) = std::env::var("CALCULATOR_MAX_HISTORY_SIZE") {
            if let Ok(val) = size.parse() {
                config.max_history_size = val;
            }
        }
        if let Ok(auto_save) = std::env::var("CALCULATOR_AUTO_SAVE") {
            config.auto_save = auto_save.to_lowercase() == "true" || auto_save == "1";
        }
        if let Ok(precision) = std::env::var("CALCULATOR_PRECISION") {
            if let Ok(val) = precision.parse() {
                config.precision = val;
            }
        }

        config
    }

    /// Directory holding the history file.
    pub fn history_dir(&self) -> PathBuf {
        self.base_dir.join("history")
    }

    /// Path of the CSV history file.
    pub fn history_file(&self) -> PathBuf {
        self.history_dir().join("calculator_history.csv")
    }

    /// Rejects configurations the engine cannot honour.
    pub fn validate(&self) -> TallyResult<()> {
        if self.max_history_size == 0 {
            return Err(TallyError::validation("max_history_size must be at least 1"));
        }
        Ok(())
    }
}
