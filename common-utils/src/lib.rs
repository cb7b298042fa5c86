//! # Common utils
//!
//! This library provides functionality needed by both the fixture synthesiser and the TLD stats
//! application: dates, records, record files and the shared error type.

pub mod date_utils;
pub mod error;
pub mod file_utils;
pub mod parsing_utils;

pub use error::{PipelineError, Result};
