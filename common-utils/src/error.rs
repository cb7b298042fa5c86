//! # Errors
//!
//! The error type shared by the generation, ingestion and aggregation steps of the pipeline.
//!

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while generating, loading or aggregating records.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A caller supplied parameter is out of its domain (negative count, reversed range, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading the input or writing one of the output files failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a record file could not be turned into a record.
    #[error("Malformed record on line {line}: {reason}")]
    DataIntegrity { line: u64, reason: String },

    /// The aggregation window did not select a single record, so there is nothing to rank.
    #[error("No records fall within the aggregation window")]
    EmptyResult,
}

impl PipelineError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        PipelineError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
