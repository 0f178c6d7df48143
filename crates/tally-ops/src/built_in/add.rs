//! Addition operation.

use rust_decimal::Decimal;

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

#[derive(Debug, Default)]
pub struct AddOperation;

impl OperationPlugin for AddOperation {
    fn name(&self) -> &str {
        "add"
    }

    fn display_name(&self) -> &str {
        "Addition"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        operand1.checked_add(operand2).ok_or_else(|| {
            TallyError::operation_in("Addition", "Result exceeds the representable decimal range")
        })
    }
}
