//! Behaviour of the built-in operation strategies and the registry.

use std::str::FromStr;

use rust_decimal::Decimal;
use tally_ops::{PluginManager, create_operation};

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
}

#[test]
fn addition_computes_exact_decimals() {
    let op = create_operation("add").unwrap();
    assert_eq!(op.display_name(), "Addition");
    assert_eq!(op.compute(dec("2"), dec("3")).unwrap(), dec("5"));
    assert_eq!(op.compute(dec("0.1"), dec("0.2")).unwrap(), dec("0.3"));
}

#[test]
fn subtraction_computes_exact_decimals() {
    let op = create_operation("subtract").unwrap();
    assert_eq!(op.display_name(), "Subtraction");
    assert_eq!(op.compute(dec("5"), dec("2")).unwrap(), dec("3"));
    assert_eq!(op.compute(dec("2"), dec("5")).unwrap(), dec("-3"));
}

#[test]
fn multiplication_computes_exact_decimals() {
    let op = create_operation("multiply").unwrap();
    assert_eq!(op.compute(dec("4"), dec("5")).unwrap(), dec("20"));
    assert_eq!(op.compute(dec("1.5"), dec("0.4")).unwrap(), dec("0.60"));
}

#[test]
fn division_keeps_decimal_precision() {
    let op = create_operation("divide").unwrap();
    assert_eq!(op.compute(dec("10"), dec("4")).unwrap(), dec("2.5"));
    assert_eq!(op.compute(dec("20"), dec("4")).unwrap(), dec("5"));
}

#[test]
fn division_by_zero_is_an_operation_error() {
    let op = create_operation("divide").unwrap();
    let err = op.compute(dec("1"), dec("0")).unwrap_err();
    assert_eq!(err.category(), "operation");
    assert!(err.to_string().contains("Division by zero"));
}

#[test]
fn power_handles_integer_exponents() {
    let op = create_operation("power").unwrap();
    assert_eq!(op.display_name(), "Power");
    assert_eq!(op.compute(dec("2"), dec("3")).unwrap(), dec("8"));
    assert_eq!(op.compute(dec("3"), dec("2")).unwrap(), dec("9"));
    assert_eq!(op.compute(dec("2"), dec("-2")).unwrap(), dec("0.25"));
    assert_eq!(op.compute(dec("-2"), dec("3")).unwrap(), dec("-8"));
}

#[test]
fn power_rejects_fractional_exponent_on_negative_base() {
    let op = create_operation("power").unwrap();
    let err = op.compute(dec("-4"), dec("0.5")).unwrap_err();
    assert_eq!(err.category(), "operation");
}

#[test]
fn root_extracts_perfect_roots_exactly() {
    let op = create_operation("root").unwrap();
    assert_eq!(op.display_name(), "Root");
    assert_eq!(op.compute(dec("16"), dec("2")).unwrap(), dec("4"));
    assert_eq!(op.compute(dec("25"), dec("2")).unwrap(), dec("5"));
    assert_eq!(op.compute(dec("0"), dec("2")).unwrap(), dec("0"));
}

#[test]
fn cube_root_is_accurate_to_root_scale() {
    let op = create_operation("root").unwrap();
    let result = op.compute(dec("27"), dec("3")).unwrap();
    assert!((result - dec("3")).abs() <= dec("0.000000001"), "got {result}");
}

#[test]
fn odd_root_of_negative_number_keeps_the_sign() {
    let op = create_operation("root").unwrap();
    let result = op.compute(dec("-27"), dec("3")).unwrap();
    assert!((result + dec("3")).abs() <= dec("0.000000001"), "got {result}");
}

#[test]
fn even_root_of_negative_number_is_an_operation_error() {
    let op = create_operation("root").unwrap();
    let err = op.compute(dec("-16"), dec("2")).unwrap_err();
    assert!(err.to_string().contains("even root"));
}

#[test]
fn zeroth_root_is_an_operation_error() {
    let op = create_operation("root").unwrap();
    let err = op.compute(dec("16"), dec("0")).unwrap_err();
    assert_eq!(err.category(), "operation");
}

#[test]
fn registry_resolves_every_built_in() {
    let manager = PluginManager::with_built_ins();
    assert_eq!(
        manager.names(),
        vec!["add", "divide", "multiply", "power", "root", "subtract"]
    );
    let add = manager.get("add").unwrap();
    assert_eq!(add.compute(dec("1"), dec("1")).unwrap(), dec("2"));
    assert!(manager.get("modulo").is_none());
}

#[test]
fn unknown_operation_name_is_an_operation_error() {
    let err = create_operation("modulo").unwrap_err();
    assert!(err.to_string().contains("Unknown operation"));
}
