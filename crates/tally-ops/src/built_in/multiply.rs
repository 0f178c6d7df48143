//! Multiplication operation.

use rust_decimal::Decimal;

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

#[derive(Debug, Default)]
pub struct MultiplyOperation;

impl OperationPlugin for MultiplyOperation {
    fn name(&self) -> &str {
        "multiply"
    }

    fn display_name(&self) -> &str {
        "Multiplication"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        operand1.checked_mul(operand2).ok_or_else(|| {
            TallyError::operation_in(
                "Multiplication",
                "Result exceeds the representable decimal range",
            )
        })
    }
}
