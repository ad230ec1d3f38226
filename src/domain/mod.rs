// Domain layer: calculator data types and the config port. No I/O here.

pub mod model;
pub mod ports;
