#![deny(warnings)]
//! Tally Types
//!
//! This crate defines the types shared across the Tally calculator workspace
//! (currently `tally-ops` and `tally-core`): the structured error type and the
//! operand parsing helper. Keeping them here eliminates circular dependencies
//! between the operation plugins and the history engine.

mod error;
mod value;

pub use error::{TallyError, TallyResult};
pub use value::parse_operand;
