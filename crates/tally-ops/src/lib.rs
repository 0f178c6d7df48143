#![deny(warnings)]
//! The operation strategy ecosystem for the Tally calculator.
//!
//! This crate provides the `OperationPlugin` trait, the registry of built-in
//! arithmetic operations, and a factory for constructing a strategy by its
//! command name. The history engine invokes whichever strategy is currently
//! selected; it never knows which concrete operation it is running.

pub mod built_in;
mod plugin;
mod plugin_manager;

pub use plugin::OperationPlugin;
pub use plugin_manager::PluginManager;

use crate::built_in::{
    add::AddOperation, divide::DivideOperation, multiply::MultiplyOperation,
    power::PowerOperation, root::RootOperation, subtract::SubtractOperation,
};
use tally_types::{TallyError, TallyResult};

/// Construct a single operation strategy by its command name.
///
/// Unknown names are `Operation` errors so the REPL can report them without
/// special-casing.
pub fn create_operation(name: &str) -> TallyResult<Box<dyn OperationPlugin>> {
    match name {
        "add" => Ok(Box::new(AddOperation)),
        "subtract" => Ok(Box::new(SubtractOperation)),
        "multiply" => Ok(Box::new(MultiplyOperation)),
        "divide" => Ok(Box::new(DivideOperation)),
        "power" => Ok(Box::new(PowerOperation)),
        "root" => Ok(Box::new(RootOperation)),
        other => Err(TallyError::operation(format!("Unknown operation '{other}'"))),
    }
}
