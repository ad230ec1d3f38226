use crate::core::menu::{self, NumberFormat};
use crate::core::ConfigProvider;
use crate::domain::model::{Arity, Evaluation, Operands, Operation};
use crate::utils::error::{CalcError, Result};
use std::io::{BufRead, Write};

/// One pass of the interactive calculator: menu, choice, operands, result.
///
/// Invalid choices, unparsable numbers and arithmetic failures are reported on
/// `output` and end the pass with `Ok(None)`. Only I/O and JSON encoding
/// failures surface as `Err`.
pub struct Session<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Session<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<Evaluation>> {
        write!(output, "{}", menu::render_menu())?;
        let choice = prompt(input, output, &menu::prompt_choice())?;

        let operation = match menu::parse_choice(&choice) {
            Ok(operation) => operation,
            Err(e) => {
                tracing::warn!("Rejected menu choice: {}", e);
                writeln!(output, "Invalid operation choice")?;
                return Ok(None);
            }
        };
        tracing::info!("Selected {}", operation.label());

        let operands = match read_operands(operation, input, output) {
            Ok(operands) => operands,
            Err(CalcError::InvalidInput { input, reason }) => {
                tracing::warn!("Rejected operand '{}': {}", input, reason);
                writeln!(output, "Input error: '{}' is not a valid number", input)?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match menu::evaluate(operation, operands) {
            Ok(evaluation) => {
                self.report(&evaluation, output)?;
                Ok(Some(evaluation))
            }
            Err(e) if e.is_arithmetic() => {
                tracing::warn!("{} failed: {}", operation.label(), e);
                self.report_error(operation, &e, output)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn report<W: Write>(&self, evaluation: &Evaluation, output: &mut W) -> Result<()> {
        if self.config.json_output() {
            writeln!(output, "{}", serde_json::to_string(evaluation)?)?;
        } else {
            let fmt = NumberFormat {
                precision: self.config.precision(),
            };
            writeln!(output, "{}", menu::format_evaluation(evaluation, fmt))?;
        }
        Ok(())
    }

    fn report_error<W: Write>(
        &self,
        operation: Operation,
        error: &CalcError,
        output: &mut W,
    ) -> Result<()> {
        if self.config.json_output() {
            let body = serde_json::json!({
                "operation": operation,
                "error": error.to_string(),
            });
            writeln!(output, "{}", body)?;
        } else {
            writeln!(output, "Error: {}", error)?;
        }
        Ok(())
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<String> {
    write!(output, "{}", text)?;
    output.flush()?;
    let mut bytes = Vec::new();
    input.read_until(b'\n', &mut bytes)?;
    // undecodable bytes stay in the line so the parsers reject them as bad input
    Ok(String::from_utf8(bytes).unwrap_or_else(|e| {
        tracing::warn!("Input is not valid UTF-8: {}", e.utf8_error());
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    }))
}

fn read_operands<R: BufRead, W: Write>(
    operation: Operation,
    input: &mut R,
    output: &mut W,
) -> Result<Operands> {
    match operation.arity() {
        Arity::TwoReals => {
            let a = menu::parse_real(&prompt(input, output, "Enter the first number: ")?)?;
            let b = menu::parse_real(&prompt(input, output, "Enter the second number: ")?)?;
            Ok(Operands::Pair(a, b))
        }
        Arity::OneInteger => {
            let n = menu::parse_integer(&prompt(input, output, "Enter an integer: ")?)?;
            Ok(Operands::Integer(n))
        }
        Arity::OneReal => {
            let n = menu::parse_real(&prompt(input, output, "Enter a number: ")?)?;
            Ok(Operands::Real(n))
        }
    }
}
