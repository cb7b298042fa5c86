use std::{
    io::BufWriter,
    path::{Path, PathBuf},
};

use log::info;

pub mod configuration;
mod extracting;
mod sorting;
mod writing;

use common_utils::{
    date_utils::FilterWindow,
    file_utils::{OutputPaths, StagedFile},
    parsing_utils::{MalformedLinePolicy, Record},
    PipelineError, Result,
};
pub use configuration::ReportFormat;
pub use extracting::TldStats;
pub use sorting::RankedTld;
use writing::ReportLine;

const WRITER_CAPACITY: usize = 400_000;
const FLUSH_THRESHOLD: usize = 4000;

/// What a successful call to [`aggregate_and_emit`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionSummary {
    /// The number of TLD occurrences the report is based on.
    pub total: u64,
    /// The number of lines written to the records file.
    pub records_written: usize,
    /// The records file followed by the report file.
    pub paths: (PathBuf, PathBuf),
}

/// What a successful call to [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// The number of TLD occurrences the report is based on.
    pub total: u64,
    /// The number of records read from the records file.
    pub records_read: usize,
    /// The report file.
    pub path: PathBuf,
}

/// Counts the TLDs of the records admitted by the window and ranks them from least to most frequent.
pub fn aggregate(records: &[Record], window: FilterWindow) -> Result<(TldStats, Vec<RankedTld>)> {
    let stats = TldStats::from_records(records, window);
    if stats.is_empty() {
        return Err(PipelineError::EmptyResult);
    }
    let ranked = sorting::rank_tlds(&stats);
    Ok((stats, ranked))
}

// Writes all lines into a staged file, leaving it uncommitted.
fn stage_lines<L: std::fmt::Display, I: IntoIterator<Item = L>>(
    target: &Path,
    lines: I,
) -> Result<StagedFile> {
    let mut staged = StagedFile::create(target)?;
    {
        let mut buf_writer = BufWriter::with_capacity(WRITER_CAPACITY, staged.as_file_mut());
        writing::write_records(&mut buf_writer, lines, FLUSH_THRESHOLD)
            .and_then(|_| buf_writer.get_ref().sync_all())
            .map_err(|e| PipelineError::io(target, e))?;
    }
    Ok(staged)
}

// Stages the ranked report lines for the given target.
fn stage_report(
    target: &Path,
    ranked: &[RankedTld],
    total: u64,
    format: ReportFormat,
) -> Result<StagedFile> {
    stage_lines(
        target,
        ranked
            .iter()
            .map(|ranked_tld| ReportLine::new(ranked_tld, total, format)),
    )
}

/// Writes every record to `<prefix>.txt` and the ranked TLD percentages of the records admitted by the
/// window to `<prefix>.out`.
///
/// The records file always holds all records in the given order; only the report is restricted by the
/// window. A window that admits no record yields [`PipelineError::EmptyResult`] and writes nothing.
///
/// Both files are fully written to temporary files before either of them replaces its destination, and
/// each replacement is an atomic rename. The pair is not replaced atomically: if moving the report into
/// place fails, the error is returned while `<prefix>.txt` already holds the new records and
/// `<prefix>.out` still holds its previous contents.
pub fn aggregate_and_emit<P: AsRef<Path>>(
    records: &[Record],
    prefix: P,
    window: FilterWindow,
    format: ReportFormat,
) -> Result<EmissionSummary> {
    let paths = OutputPaths::from_prefix(prefix);
    let (stats, ranked) = aggregate(records, window)?;
    let total = stats.count();
    info!(
        "{} of {} records contribute to the report over {} distinct TLDs",
        total,
        records.len(),
        ranked.len()
    );

    let records_file = stage_lines(paths.records.as_path(), records.iter())?;
    let report_file = stage_report(paths.report.as_path(), &ranked, total, format)?;
    let records_path = records_file.commit()?;
    let report_path = report_file.commit()?;
    info!(
        "wrote {:?} and {:?}",
        records_path.as_os_str(),
        report_path.as_os_str()
    );

    Ok(EmissionSummary {
        total,
        records_written: records.len(),
        paths: (records_path, report_path),
    })
}

/// Reads the records saved under `<prefix>.txt` and rewrites only the report `<prefix>.out` for the
/// given window. The records file is left exactly as it was, including any lines the policy skipped.
pub fn run<P: AsRef<Path>>(
    prefix: P,
    window: FilterWindow,
    format: ReportFormat,
    policy: MalformedLinePolicy,
) -> Result<ReportSummary> {
    let paths = OutputPaths::from_prefix(prefix);
    println!("loading records from {:?}", paths.records.as_os_str());
    let records = common_utils::parsing_utils::load_dataset(paths.records.as_path(), policy)?;
    println!("loaded {} records, aggregating", records.len());
    let (stats, ranked) = aggregate(&records, window)?;
    let total = stats.count();
    let path = stage_report(paths.report.as_path(), &ranked, total, format)?.commit()?;
    info!("wrote {:?}", path.as_os_str());
    Ok(ReportSummary {
        total,
        records_read: records.len(),
        path,
    })
}
