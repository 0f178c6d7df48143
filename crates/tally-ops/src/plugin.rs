use rust_decimal::Decimal;
use tally_types::TallyResult;

/// A trait for arithmetic operation strategies.
/// Operations are stateless and thread-safe.
pub trait OperationPlugin: Send + Sync {
    /// The command name used for registry lookup (e.g. `"add"`).
    fn name(&self) -> &str;

    /// The display name recorded in history entries (e.g. `"Addition"`).
    fn display_name(&self) -> &str;

    /// Performs the calculation.
    ///
    /// Domain violations (division by zero, even root of a negative number)
    /// are surfaced as `Operation` errors.
    fn compute(&self, operand1: Decimal, operand2: Decimal) -> TallyResult<Decimal>;
}

impl std::fmt::Debug for dyn OperationPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OperationPlugin({})", self.name())
    }
}
