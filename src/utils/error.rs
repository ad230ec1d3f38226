use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero is not possible")]
    DivisionByZero,

    #[error("{message}")]
    Domain { message: String },

    #[error("Result of {operation} is out of range")]
    Overflow { operation: String },

    #[error("Invalid operation choice: '{choice}'")]
    InvalidChoice { choice: String },

    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn domain(message: impl Into<String>) -> Self {
        CalcError::Domain {
            message: message.into(),
        }
    }

    /// Errors raised by the operations themselves, as opposed to bad input or I/O.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionByZero | CalcError::Domain { .. } | CalcError::Overflow { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(_) => "Could not read from or write to the terminal".to_string(),
            CalcError::SerializationError(_) => "Could not encode the result as JSON".to_string(),
            CalcError::ConfigValidationError { field, .. }
            | CalcError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value '{}' is not usable", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "Use a non-zero divisor",
            CalcError::Domain { .. } => "Pick an input inside the operation's domain",
            CalcError::Overflow { .. } => "Use a smaller input",
            CalcError::InvalidChoice { .. } => "Enter a number from 1 to 9",
            CalcError::InvalidInput { .. } => "Enter a plain decimal number, e.g. 42 or 3.5",
            CalcError::IoError(_) => "Check that stdin and stdout are available",
            CalcError::SerializationError(_) => "Run again without --json",
            CalcError::ConfigValidationError { .. } | CalcError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or pass the value on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
