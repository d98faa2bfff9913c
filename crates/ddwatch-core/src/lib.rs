pub mod config;
pub mod error;
pub mod field;
pub mod log_reader;
pub mod status;
pub mod trigger;

pub use error::{Result, StatusError};
