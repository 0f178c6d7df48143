//! Exponentiation operation.
//!
//! Integer exponents are computed exactly; fractional exponents fall back to
//! the decimal `powd` approximation, which is undefined for negative bases.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

#[derive(Debug, Default)]
pub struct PowerOperation;

impl OperationPlugin for PowerOperation {
    fn name(&self) -> &str {
        "power"
    }

    fn display_name(&self) -> &str {
        "Power"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        if operand2.fract().is_zero() {
            let exponent = operand2.to_i64().ok_or_else(|| {
                TallyError::operation_in("Power", format!("Exponent {operand2} is out of range"))
            })?;
            return operand1.checked_powi(exponent).ok_or_else(|| {
                TallyError::operation_in("Power", "Result exceeds the representable decimal range")
            });
        }
        if operand1.is_sign_negative() {
            return Err(TallyError::operation_in(
                "Power",
                "Negative base with a fractional exponent is undefined",
            ));
        }
        operand1.checked_powd(operand2).ok_or_else(|| {
            TallyError::operation_in("Power", "Result exceeds the representable decimal range")
        })
    }
}
