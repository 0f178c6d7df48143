//! N-th root operation.
//!
//! Computed as `operand1 ^ (1 / operand2)`. The decimal power function is an
//! approximation for fractional exponents, so results are rounded back to a
//! fixed scale; perfect roots come out exact (`root(16, 2) == 4`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::plugin::OperationPlugin;
use tally_types::{TallyError, TallyResult};

/// Decimal places kept after the approximate power step.
const ROOT_SCALE: u32 = 12;

#[derive(Debug, Default)]
pub struct RootOperation;

impl OperationPlugin for RootOperation {
    fn name(&self) -> &str {
        "root"
    }

    fn display_name(&self) -> &str {
        "Root"
    }

    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal> {
        if operand2.is_zero() {
            return Err(TallyError::operation_in("Root", "Zeroth root is undefined"));
        }
        if operand1.is_zero() {
            if operand2.is_sign_negative() {
                return Err(TallyError::operation_in(
                    "Root",
                    "Negative-degree root of zero is undefined",
                ));
            }
            return Ok(Decimal::ZERO);
        }
        if operand1.is_sign_negative() {
            // Odd integer degrees preserve the sign; everything else is a
            // domain violation.
            let odd_degree = operand2.fract().is_zero()
                && operand2.to_i64().is_some_and(|d| d % 2 != 0);
            if !odd_degree {
                return Err(TallyError::operation_in(
                    "Root",
                    "Cannot calculate even root of a negative number",
                ));
            }
            return self.compute(-operand1, operand2).map(|r| -r);
        }

        if operand2 == Decimal::TWO {
            let raw = operand1.sqrt().ok_or_else(|| {
                TallyError::operation_in("Root", "Square root is undefined for this value")
            })?;
            return Ok(raw.round_dp(ROOT_SCALE).normalize());
        }

        let exponent = Decimal::ONE.checked_div(operand2).ok_or_else(|| {
            TallyError::operation_in("Root", format!("Degree {operand2} is out of range"))
        })?;
        let raw = operand1.checked_powd(exponent).ok_or_else(|| {
            TallyError::operation_in("Root", "Result exceeds the representable decimal range")
        })?;
        Ok(raw.round_dp(ROOT_SCALE).normalize())
    }
}
