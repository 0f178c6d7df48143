#![deny(warnings)]
//! Interactive shell for the Tally calculator.
//!
//! The shell is deliberately thin glue: it prompts, dispatches commands to
//! the history engine, and reports the boolean or error outcomes. All session
//! semantics live in `tally-core`.

/// The read-eval-print loop and its command dispatch
pub mod repl;
