//! Built-in arithmetic operations.

// Elementary arithmetic
pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

// Exponentiation
pub mod power;
pub mod root;
