use std::{convert::TryFrom, path::Path};

use common_utils::{
    date_utils::{DateRange, FilterWindow},
    PipelineError, Result,
};
use log::info;
use rand::Rng;
use tld_stats::{EmissionSummary, ReportFormat};

pub mod generation;

/// Converts a requested number of records, which may come from an untyped source, into a count.
pub fn record_count(requested: i64) -> Result<usize> {
    usize::try_from(requested).map_err(|_| {
        PipelineError::invalid_argument(format!(
            "the number of records must not be negative, got {}",
            requested
        ))
    })
}

/// Generates `num_records` synthetic records dated within the range and writes them, together with the
/// ranked TLD report over the window, to `<prefix>.txt` and `<prefix>.out`.
pub fn run<T: Rng, P: AsRef<Path>>(
    prefix: P,
    range: &DateRange,
    num_records: usize,
    window: FilterWindow,
    format: ReportFormat,
    rng: &mut T,
) -> Result<EmissionSummary> {
    info!(
        "generating {} records between {} and {}",
        num_records,
        range.start(),
        range.end()
    );
    let records = generation::generate_dataset(range, num_records, rng);
    tld_stats::aggregate_and_emit(&records, prefix, window, format)
}
