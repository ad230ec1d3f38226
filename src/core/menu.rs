use crate::core::operations;
use crate::domain::model::{Evaluation, Operands, Operation, Outcome};
use crate::utils::error::{CalcError, Result};

pub const TITLE: &str = "Math calculator";

pub fn render_menu() -> String {
    let mut menu = format!("{}\nAvailable operations:\n", TITLE);
    for op in Operation::ALL {
        menu.push_str(&format!("{}. {}\n", op.number(), op.label()));
    }
    menu
}

pub fn prompt_choice() -> String {
    format!("Select an operation (1-{}): ", Operation::ALL.len())
}

pub fn parse_choice(input: &str) -> Result<Operation> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Operation::from_number)
        .ok_or_else(|| CalcError::InvalidChoice {
            choice: trimmed.to_string(),
        })
}

pub fn parse_real(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed.parse::<f64>().map_err(|e| CalcError::InvalidInput {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })
}

pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| CalcError::InvalidInput {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Dispatches an operation. The operand shape must match [`Operation::arity`].
pub fn evaluate(operation: Operation, operands: Operands) -> Result<Evaluation> {
    let outcome = match (operation, operands) {
        (Operation::Add, Operands::Pair(a, b)) => Outcome::Real(operations::add(a, b)),
        (Operation::Subtract, Operands::Pair(a, b)) => Outcome::Real(operations::subtract(a, b)),
        (Operation::Multiply, Operands::Pair(a, b)) => Outcome::Real(operations::multiply(a, b)),
        (Operation::Divide, Operands::Pair(a, b)) => Outcome::Real(operations::divide(a, b)?),
        (Operation::Power, Operands::Pair(a, b)) => Outcome::Real(operations::power(a, b)?),
        (Operation::Factorial, Operands::Integer(n)) => {
            Outcome::Integer(operations::factorial(n)?)
        }
        (Operation::IsPrime, Operands::Integer(n)) => Outcome::Prime(operations::is_prime(n)),
        (Operation::Fibonacci, Operands::Integer(n)) => {
            Outcome::Integer(operations::fibonacci(n)?)
        }
        (Operation::Percent, Operands::Real(n)) => Outcome::Percent(operations::percent(n)),
        (operation, operands) => {
            return Err(CalcError::InvalidInput {
                input: format!("{:?}", operands),
                reason: format!("wrong operands for {}", operation.label()),
            })
        }
    };

    tracing::debug!(?operation, ?operands, ?outcome, "evaluated");

    Ok(Evaluation {
        operation,
        operands,
        outcome,
    })
}

/// Display options for result lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: Option<usize>,
}

impl NumberFormat {
    /// Integral values keep a trailing `.0` unless a fixed precision is set.
    pub fn real(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => format!("{:?}", value),
        }
    }
}

pub fn format_evaluation(evaluation: &Evaluation, fmt: NumberFormat) -> String {
    let op = evaluation.operation;
    match (evaluation.operands, evaluation.outcome) {
        (Operands::Pair(a, b), Outcome::Real(r)) => format!(
            "Result: {} {} {} = {}",
            fmt.real(a),
            op.symbol().unwrap_or("?"),
            fmt.real(b),
            fmt.real(r)
        ),
        (Operands::Integer(n), Outcome::Integer(r)) if op == Operation::Factorial => {
            format!("Factorial of {} = {}", n, r)
        }
        (Operands::Integer(n), Outcome::Integer(r)) => format!("Fibonacci number F({}) = {}", n, r),
        (Operands::Integer(n), Outcome::Prime(true)) => format!("Number {} is prime", n),
        (Operands::Integer(n), Outcome::Prime(false)) => format!("Number {} is not prime", n),
        (Operands::Real(n), Outcome::Percent(Some(r))) => format!("{}% = {}", fmt.real(n), fmt.real(r)),
        (Operands::Real(n), Outcome::Percent(None)) => {
            format!("{}% has no percentage value (negative input)", fmt.real(n))
        }
        (operands, outcome) => format!("{:?} {:?} = {:?}", op, operands, outcome),
    }
}
