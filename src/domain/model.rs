use serde::{Deserialize, Serialize};

/// The menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Factorial,
    IsPrime,
    Fibonacci,
    Percent,
}

/// What an operation reads from the user before it can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    TwoReals,
    OneInteger,
    OneReal,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Factorial,
        Operation::IsPrime,
        Operation::Fibonacci,
        Operation::Percent,
    ];

    /// 1-based position in the menu.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|op| *op == self)
            .map(|idx| idx + 1)
            .unwrap_or_default()
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Exponentiation",
            Operation::Factorial => "Factorial",
            Operation::IsPrime => "Primality test",
            Operation::Fibonacci => "Fibonacci number",
            Operation::Percent => "Percentage",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => Arity::TwoReals,
            Operation::Factorial | Operation::IsPrime | Operation::Fibonacci => Arity::OneInteger,
            Operation::Percent => Arity::OneReal,
        }
    }

    /// Infix symbol for the binary operations.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("+"),
            Operation::Subtract => Some("-"),
            Operation::Multiply => Some("*"),
            Operation::Divide => Some("/"),
            Operation::Power => Some("^"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operands {
    Pair(f64, f64),
    Integer(i64),
    Real(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Real(f64),
    Integer(u128),
    Prime(bool),
    /// `None` when the input had no percentage (negative input).
    Percent(Option<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub operands: Operands,
    pub outcome: Outcome,
}
