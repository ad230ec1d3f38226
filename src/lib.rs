pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, Settings};
pub use crate::core::{operations, session::Session};
pub use crate::domain::model::{Evaluation, Operands, Operation, Outcome};
pub use crate::utils::error::{CalcError, Result};
