use anyhow::{Context, Result};
use common_utils::date_utils::{DateRange, DateStamp, FilterWindow};
use rand::prelude::*;
use rand_pcg::Pcg64;
use structopt::StructOpt;
use tld_stats::ReportFormat;

/// Produces synthetic (date, URL) records in <prefix>.txt and their ranked TLD percentages in <prefix>.out.
#[derive(StructOpt)]
struct Cli {
    /// The path prefix of the two files to write
    #[structopt(parse(from_os_str))]
    prefix: std::path::PathBuf,

    /// The earliest date a record may have (DD/MM/YYYY)
    #[structopt(long, default_value = "12/01/1999")]
    start: DateStamp,

    /// The latest date a record may have (DD/MM/YYYY)
    #[structopt(long, default_value = "20/02/2020")]
    end: DateStamp,

    /// The number of records to generate
    #[structopt(short, long, default_value = "200000", allow_hyphen_values = true)]
    number_of_records: i64,

    /// Only count records logged on or after this date in the report (DD/MM/YYYY)
    #[structopt(long)]
    window_start: Option<DateStamp>,

    /// Only count records logged on or before this date in the report (DD/MM/YYYY)
    #[structopt(long)]
    window_end: Option<DateStamp>,

    /// The layout of the report lines
    #[structopt(short, long, default_value = "padded", possible_values = ReportFormat::VARIANTS)]
    format: ReportFormat,

    /// Set seed to get reproducible results on consecutive runs
    #[structopt(short = "s", long = "seed", default_value = "1")]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::from_args();
    let range = DateRange::new(args.start, args.end)?;
    let num_records = fixture_synthesiser::record_count(args.number_of_records)?;
    let window = FilterWindow::from_bounds(args.window_start, args.window_end)?;
    let prefix = &args.prefix;
    common_utils::file_utils::ensure_parent_directory(prefix).with_context(|| {
        format!(
            "Could not create the directory for {:?}. Please make sure that it can be created.",
            prefix.as_os_str()
        )
    })?;
    let mut rng = Pcg64::seed_from_u64(args.seed);
    let summary = fixture_synthesiser::run(
        prefix,
        &range,
        num_records,
        window,
        args.format,
        &mut rng,
    )
    .with_context(|| "The creation of the synthetic records failed")?;
    println!(
        "The files have been successfully written as {:?} and {:?}",
        summary.paths.0.as_os_str(),
        summary.paths.1.as_os_str()
    );
    println!("{}", summary.total);
    Ok(())
}
