//! Subtraction operation.

use rust_decimal::Decimal;

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

#[derive(Debug, Default)]
pub struct SubtractOperation;

impl OperationPlugin for SubtractOperation {
    fn name(&self) -> &str {
        "subtract"
    }

    fn display_name(&self) -> &str {
        "Subtraction"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        operand1.checked_sub(operand2).ok_or_else(|| {
            TallyError::operation_in(
                "Subtraction",
                "Result exceeds the representable decimal range",
            )
        })
    }
}
