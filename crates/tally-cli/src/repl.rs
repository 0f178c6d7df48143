//! The interactive calculator session.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use rust_decimal::Decimal;

use tally_core::{
    AutoSaveObserver, Calculator, CalculatorConfig, CsvHistoryStore, LoggingObserver,
};
use tally_ops::{PluginManager, create_operation};

/// Builds the engine with the standard observers and runs a session over
/// stdin/stdout until `exit` or end of input.
pub fn run(config: CalculatorConfig) -> Result<()> {
    let mut calculator = Calculator::new(config.clone())?;
    calculator.add_observer(Arc::new(LoggingObserver));
    calculator.add_observer(Arc::new(AutoSaveObserver::new(
        Box::new(CsvHistoryStore::new(config.history_file())),
        config.auto_save,
    )));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut calculator, stdin.lock(), &mut stdout)
}

/// Drives one session over arbitrary input/output streams.
///
/// History is loaded up front and saved again on the way out; end of input
/// behaves like `exit`.
pub fn run_session<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: R,
    out: &mut W,
) -> Result<()> {
    let operations = PluginManager::with_built_ins();
    let mut lines = input.lines();

    if let Err(err) = calculator.load_history() {
        writeln!(out, "Warning: could not load history: {err}")?;
    }
    writeln!(out, "Calculator started. Type 'help' for commands.")?;

    loop {
        write!(out, "\nEnter command: ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let command = line?.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "help" => print_help(out, &operations)?,
            "exit" => break,
            "history" => {
                let entries = calculator.show_history();
                if entries.is_empty() {
                    writeln!(out, "No calculations in history")?;
                } else {
                    writeln!(out, "\nCalculation History:")?;
                    for (index, entry) in entries.iter().enumerate() {
                        writeln!(out, "{}. {}", index + 1, entry)?;
                    }
                }
            }
            "clear" => {
                calculator.clear_history();
                writeln!(out, "History cleared")?;
            }
            "undo" => {
                let outcome =
                    if calculator.undo() { "Operation undone" } else { "Nothing to undo" };
                writeln!(out, "{outcome}")?;
            }
            "redo" => {
                let outcome =
                    if calculator.redo() { "Operation redone" } else { "Nothing to redo" };
                writeln!(out, "{outcome}")?;
            }
            "save" => match calculator.save_history() {
                Ok(()) => writeln!(out, "History saved successfully")?,
                Err(err) => writeln!(out, "Error saving history: {err}")?,
            },
            "load" => match calculator.load_history() {
                Ok(()) => writeln!(out, "History loaded successfully")?,
                Err(err) => writeln!(out, "Error loading history: {err}")?,
            },
            name if operations.get(name).is_some() => {
                run_operation(calculator, name, &mut lines, out)?;
            }
            other => {
                writeln!(out, "Unknown command: '{other}'. Type 'help' for available commands.")?;
            }
        }
    }

    match calculator.save_history() {
        Ok(()) => writeln!(out, "History saved successfully.")?,
        Err(err) => writeln!(out, "Warning: could not save history: {err}")?,
    }
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn run_operation<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    name: &str,
    lines: &mut io::Lines<R>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\nEnter numbers (or 'cancel' to abort):")?;
    let Some(first) = prompt_operand(lines, out, "First number: ")? else {
        writeln!(out, "Operation cancelled")?;
        return Ok(());
    };
    let Some(second) = prompt_operand(lines, out, "Second number: ")? else {
        writeln!(out, "Operation cancelled")?;
        return Ok(());
    };

    calculator.set_operation(create_operation(name)?);
    match calculator.perform_operation(&first, &second) {
        Ok(result) => {
            let precision = calculator.config().precision;
            writeln!(out, "\nResult: {}", format_result(result, precision))?;
        }
        Err(err) => writeln!(out, "Error: {err}")?,
    }
    Ok(())
}

/// Prompts for one operand; `cancel` (or end of input) aborts.
fn prompt_operand<R: BufRead, W: Write>(
    lines: &mut io::Lines<R>,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let Some(line) = lines.next() else { return Ok(None) };
    let text = line?.trim().to_string();
    if text.eq_ignore_ascii_case("cancel") {
        return Ok(None);
    }
    Ok(Some(text))
}

fn format_result(result: Decimal, precision: u32) -> Decimal {
    if result.scale() > precision { result.round_dp(precision).normalize() } else { result }
}

fn print_help<W: Write>(out: &mut W, operations: &PluginManager) -> Result<()> {
    writeln!(out, "\nAvailable commands:")?;
    for name in operations.names() {
        if let Some(operation) = operations.get(name) {
            writeln!(out, "  {:<9} {} of two numbers", name, operation.display_name())?;
        }
    }
    writeln!(out, "  history   Show calculation history")?;
    writeln!(out, "  clear     Clear calculation history")?;
    writeln!(out, "  undo      Undo the last calculation")?;
    writeln!(out, "  redo      Redo the last undone calculation")?;
    writeln!(out, "  save      Save history to file")?;
    writeln!(out, "  load      Load history from file")?;
    writeln!(out, "  help      Show this message")?;
    writeln!(out, "  exit      Save history and quit")?;
    Ok(())
}
