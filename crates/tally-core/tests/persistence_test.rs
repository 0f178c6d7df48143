//! CSV history store behaviour and the engine's save/load contract.

use std::fs;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tally_core::{
    AutoSaveObserver, Calculator, CalculatorConfig, CsvHistoryStore, HistoryStore,
};
use tally_ops::create_operation;
use tempfile::TempDir;

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).unwrap()
}

fn temp_calculator(temp_dir: &TempDir) -> Calculator {
    let config =
        CalculatorConfig { auto_save: false, ..CalculatorConfig::new(temp_dir.path()) };
    Calculator::new(config).unwrap()
}

#[test]
fn save_then_load_round_trips_the_history() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut calc = temp_calculator(&temp_dir);
    calc.set_operation(create_operation("add").unwrap());
    calc.perform_operation("0.1", "0.2").unwrap();
    calc.set_operation(create_operation("divide").unwrap());
    calc.perform_operation("1", "3").unwrap();
    calc.save_history().unwrap();

    let mut restored = temp_calculator(&temp_dir);
    restored.load_history().unwrap();
    assert_eq!(restored.history(), calc.history());
    assert_eq!(restored.history()[0].result(), dec("0.3"));
    assert_eq!(restored.history()[1].result(), dec("0.3333333333333333333333333333"));
}

#[test]
fn loaded_results_are_trusted_not_recomputed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "operation,operand1,operand2,result,timestamp\n\
         Addition,2,3,99,2024-01-15T10:30:00\n",
    )
    .unwrap();

    let mut calc = Calculator::new(config).unwrap();
    calc.load_history().unwrap();
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.history()[0].result(), dec("99"));
}

#[test]
fn loading_a_missing_file_yields_empty_history() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut calc = temp_calculator(&temp_dir);
    calc.load_history().unwrap();
    assert!(calc.history().is_empty());
}

#[test]
fn loading_a_zero_byte_file_yields_empty_history() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();

    let mut calc = Calculator::new(config).unwrap();
    calc.load_history().unwrap();
    assert!(calc.history().is_empty());
}

#[test]
fn loading_a_header_only_table_yields_empty_history() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "operation,operand1,operand2,result,timestamp\n").unwrap();

    let mut calc = Calculator::new(config).unwrap();
    calc.load_history().unwrap();
    assert!(calc.history().is_empty());
}

#[test]
fn corrupt_rows_surface_as_operation_errors() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "operation,operand1,operand2,result,timestamp\n\
         Addition,two,3,5,2024-01-15T10:30:00\n",
    )
    .unwrap();

    let mut calc = Calculator::new(config).unwrap();
    let err = calc.load_history().unwrap_err();
    assert_eq!(err.category(), "operation");
}

#[test]
fn saving_an_empty_history_writes_an_empty_table() {
    let temp_dir = tempfile::tempdir().unwrap();
    let calc = temp_calculator(&temp_dir);
    calc.save_history().unwrap();

    let contents =
        fs::read_to_string(calc.config().history_file()).unwrap();
    assert_eq!(contents.trim_end(), "operation,operand1,operand2,result,timestamp");
}

#[test]
fn load_trims_a_table_that_exceeds_capacity() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut table = String::from("operation,operand1,operand2,result,timestamp\n");
    for i in 1..=5 {
        table.push_str(&format!("Addition,{i},1,{},2024-01-15T10:30:0{i}\n", i + 1));
    }
    fs::write(&path, table).unwrap();

    let mut calc =
        Calculator::new(CalculatorConfig { max_history_size: 2, ..config }).unwrap();
    calc.load_history().unwrap();
    assert_eq!(calc.history().len(), 2);
    // Oldest rows are evicted first.
    assert_eq!(calc.history()[0].operand1(), dec("4"));
    assert_eq!(calc.history()[1].operand1(), dec("5"));
}

#[test]
fn auto_save_observer_rewrites_the_file_per_calculation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();

    let mut calc = Calculator::new(config).unwrap();
    calc.add_observer(Arc::new(AutoSaveObserver::new(
        Box::new(CsvHistoryStore::new(path.clone())),
        true,
    )));
    calc.set_operation(create_operation("add").unwrap());
    calc.perform_operation("2", "3").unwrap();

    let store = CsvHistoryStore::new(path);
    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].result(), dec("5"));
}

#[test]
fn disabled_auto_save_observer_never_writes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = CalculatorConfig::new(temp_dir.path());
    let path = config.history_file();

    let mut calc = Calculator::new(config).unwrap();
    calc.add_observer(Arc::new(AutoSaveObserver::new(
        Box::new(CsvHistoryStore::new(path.clone())),
        false,
    )));
    calc.set_operation(create_operation("add").unwrap());
    calc.perform_operation("2", "3").unwrap();

    assert!(!path.exists());
}
