pub mod menu;
pub mod operations;
pub mod session;

pub use crate::domain::model::{Evaluation, Operands, Operation, Outcome};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
