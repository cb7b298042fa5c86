//! # Parsing utils
//!
//! This module contains the record type shared by all applications and the functionality to read
//! record files (`<prefix>.txt`) back into memory.
//!

use log::warn;
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};

use crate::date_utils::DateStamp;
use crate::error::{PipelineError, Result};

/// One line of a record file: the day a URL was logged and the URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub date: DateStamp,
    pub url: String,
}

impl Record {
    pub fn new(date: DateStamp, url: String) -> Self {
        Self { date, url }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.url)
    }
}

/// What to do with a line that does not describe a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Fail the whole load on the first malformed line.
    Abort,
    /// Log a warning and continue with the next line.
    Skip,
}

impl Default for MalformedLinePolicy {
    fn default() -> Self {
        MalformedLinePolicy::Abort
    }
}

/// Produces a buffered reader with a predefined buffer capacity over a record file.
pub fn customised_record_reader<P: AsRef<Path>>(
    path: P,
    buffer_capacity: usize,
) -> Result<BufReader<File>> {
    let file = File::open(path.as_ref()).map_err(|e| PipelineError::io(path.as_ref(), e))?;
    Ok(BufReader::with_capacity(buffer_capacity, file))
}

// Turns the fields of one line into a Record.
fn record_from_fields(fields: &[&str]) -> std::result::Result<Record, String> {
    match fields {
        [date, url] => Ok(Record::new(DateStamp::from_dmy(date)?, url.to_string())),
        other => Err(format!("expected 2 fields but found {}", other.len())),
    }
}

/// Loads every record of the given record file, in file order.
///
/// The date and the URL may be separated by any run of spaces and tabs. Blank lines are ignored. Lines
/// that do not consist of exactly a DD/MM/YYYY date and a URL are handled according to the given policy.
pub fn load_dataset<P: AsRef<Path>>(path: P, policy: MalformedLinePolicy) -> Result<Vec<Record>> {
    const BUFFER_CAPACITY: usize = 8 * 2usize.pow(10);
    let path = path.as_ref();
    let reader = customised_record_reader(path, BUFFER_CAPACITY)?;
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx as u64 + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => PipelineError::DataIntegrity {
                line: line_number,
                reason: "the line is not valid UTF-8".to_string(),
            },
            _ => PipelineError::io(path, e),
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        match record_from_fields(&fields) {
            Ok(record) => records.push(record),
            Err(reason) => match policy {
                MalformedLinePolicy::Abort => {
                    return Err(PipelineError::DataIntegrity {
                        line: line_number,
                        reason,
                    })
                }
                MalformedLinePolicy::Skip => warn!(
                    "skipping line {} of {:?}: {}",
                    line_number,
                    path.as_os_str(),
                    reason
                ),
            },
        }
    }
    Ok(records)
}
