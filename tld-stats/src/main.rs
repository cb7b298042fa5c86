use anyhow::{Context, Result};
use common_utils::{
    date_utils::{DateStamp, FilterWindow},
    parsing_utils::MalformedLinePolicy,
};
use structopt::StructOpt;
use tld_stats::ReportFormat;

/// Rewrites the ranked TLD report <prefix>.out from the records saved in <prefix>.txt.
#[derive(StructOpt)]
struct Cli {
    /// The path prefix of the record file to read and the files to write
    #[structopt(parse(from_os_str))]
    prefix: std::path::PathBuf,

    /// Only count records logged on or after this date (DD/MM/YYYY)
    #[structopt(long)]
    window_start: Option<DateStamp>,

    /// Only count records logged on or before this date (DD/MM/YYYY)
    #[structopt(long)]
    window_end: Option<DateStamp>,

    /// The layout of the report lines
    #[structopt(short, long, default_value = "padded", possible_values = ReportFormat::VARIANTS)]
    format: ReportFormat,

    /// Skip lines that are not of the form "DD/MM/YYYY url" instead of giving up
    #[structopt(long)]
    skip_malformed: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let window = FilterWindow::from_bounds(args.window_start, args.window_end)?;
    let policy = if args.skip_malformed {
        MalformedLinePolicy::Skip
    } else {
        MalformedLinePolicy::Abort
    };
    let summary = tld_stats::run(args.prefix.as_path(), window, args.format, policy)
        .with_context(|| {
            format!(
                "Failed to produce the TLD report for {:?}",
                args.prefix.as_os_str()
            )
        })?;
    println!(
        "The report has been saved as {:?}",
        summary.path.as_os_str()
    );
    println!("{}", summary.total);
    Ok(())
}
