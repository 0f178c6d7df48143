//! Division operation.

use rust_decimal::Decimal;

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

#[derive(Debug, Default)]
pub struct DivideOperation;

impl OperationPlugin for DivideOperation {
    fn name(&self) -> &str {
        "divide"
    }

    fn display_name(&self) -> &str {
        "Division"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        if operand2.is_zero() {
            return Err(TallyError::operation_in("Division", "Division by zero is not allowed"));
        }
        operand1.checked_div(operand2).ok_or_else(|| {
            TallyError::operation_in("Division", "Result exceeds the representable decimal range")
        })
    }
}
