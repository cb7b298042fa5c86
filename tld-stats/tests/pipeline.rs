use common_utils::{
    date_utils::{DateRange, FilterWindow},
    parsing_utils::{load_dataset, MalformedLinePolicy, Record},
    PipelineError,
};
use tld_stats::{aggregate_and_emit, ReportFormat};

fn record(date: &str, url: &str) -> Record {
    Record::new(date.parse().unwrap(), url.to_string())
}

fn sample_records() -> Vec<Record> {
    vec![
        record("01/01/2020", "www.a.com"),
        record("02/01/2020", "www.b.com"),
        record("03/01/2020", "www.c.org"),
    ]
}

#[test]
fn example_scenario_without_window() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("test");
    let summary = aggregate_and_emit(
        &sample_records(),
        &prefix,
        FilterWindow::All,
        ReportFormat::Padded,
    )
    .unwrap();
    assert_eq!(3, summary.total);
    assert_eq!(3, summary.records_written);
    assert_eq!(
        " 33.33 org\n 66.67 com\n",
        std::fs::read_to_string(dir.path().join("test.out")).unwrap()
    );
    assert_eq!(
        "01/01/2020 www.a.com\n02/01/2020 www.b.com\n03/01/2020 www.c.org\n",
        std::fs::read_to_string(dir.path().join("test.txt")).unwrap()
    );
}

#[test]
fn window_restricts_the_report_but_not_the_records_file() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("narrow");
    let window = FilterWindow::Within(DateRange::from_dmy("02/01/2020", "03/01/2020").unwrap());
    let summary =
        aggregate_and_emit(&sample_records(), &prefix, window, ReportFormat::WithCount).unwrap();
    assert_eq!(2, summary.total);
    assert_eq!(
        "50.00 com 1\n50.00 org 1\n",
        std::fs::read_to_string(&summary.paths.1).unwrap()
    );
    assert_eq!(
        3,
        std::fs::read_to_string(&summary.paths.0).unwrap().lines().count()
    );
}

#[test]
fn window_boundaries_are_inclusive() {
    let dir = tempfile::tempdir().unwrap();
    let window = FilterWindow::Within(DateRange::from_dmy("03/01/2020", "03/01/2020").unwrap());
    let summary = aggregate_and_emit(
        &sample_records(),
        dir.path().join("edge"),
        window,
        ReportFormat::Padded,
    )
    .unwrap();
    assert_eq!(1, summary.total);
    assert_eq!(
        "100.00 org\n",
        std::fs::read_to_string(&summary.paths.1).unwrap()
    );
}

#[test]
fn window_outside_all_dates_is_an_empty_result_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let window = FilterWindow::Within(DateRange::from_dmy("01/01/2021", "31/12/2021").unwrap());
    let result = aggregate_and_emit(
        &sample_records(),
        dir.path().join("empty"),
        window,
        ReportFormat::Padded,
    );
    assert!(matches!(result, Err(PipelineError::EmptyResult)));
    assert_eq!(0, std::fs::read_dir(dir.path()).unwrap().count());
}

#[test]
fn emitting_twice_gives_identical_reports() {
    let dir = tempfile::tempdir().unwrap();
    let records: Vec<Record> = (1..=28)
        .flat_map(|day| {
            let date = format!("{:02}/02/2019", day);
            vec![
                record(&date, &format!("www.d{}.com", day)),
                record(&date, &format!("www.e{}.co.uk", day % 5)),
                record(&date, "www.f.io"),
            ]
        })
        .collect();
    let prefix = dir.path().join("again");
    let first = aggregate_and_emit(&records, &prefix, FilterWindow::All, ReportFormat::Padded)
        .unwrap();
    let first_report = std::fs::read(&first.paths.1).unwrap();
    let second = aggregate_and_emit(&records, &prefix, FilterWindow::All, ReportFormat::Padded)
        .unwrap();
    assert_eq!(first_report, std::fs::read(&second.paths.1).unwrap());
}

#[test]
fn written_records_load_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample_records();
    let summary = aggregate_and_emit(
        &records,
        dir.path().join("round"),
        FilterWindow::All,
        ReportFormat::Padded,
    )
    .unwrap();
    let loaded = load_dataset(&summary.paths.0, MalformedLinePolicy::Abort).unwrap();
    assert_eq!(records, loaded);
}

#[test]
fn run_rewrites_the_report_from_the_saved_records() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("saved");
    aggregate_and_emit(
        &sample_records(),
        &prefix,
        FilterWindow::All,
        ReportFormat::Padded,
    )
    .unwrap();
    let window = FilterWindow::Within(DateRange::from_dmy("01/01/2020", "02/01/2020").unwrap());
    let summary = tld_stats::run(
        &prefix,
        window,
        ReportFormat::WithCount,
        MalformedLinePolicy::Abort,
    )
    .unwrap();
    assert_eq!(2, summary.total);
    assert_eq!(3, summary.records_read);
    assert_eq!(dir.path().join("saved.out"), summary.path);
    assert_eq!(
        "100.00 com 2\n",
        std::fs::read_to_string(&summary.path).unwrap()
    );
}

#[test]
fn run_leaves_the_records_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("in");
    let contents = "01/01/2020 www.a.com\nbroken line here\n02/01/2020\t  www.b.org\n";
    std::fs::write(dir.path().join("in.txt"), contents).unwrap();
    let summary = tld_stats::run(
        &prefix,
        FilterWindow::All,
        ReportFormat::Padded,
        MalformedLinePolicy::Skip,
    )
    .unwrap();
    assert_eq!(2, summary.total);
    assert_eq!(2, summary.records_read);
    assert_eq!(
        contents,
        std::fs::read_to_string(dir.path().join("in.txt")).unwrap()
    );
    assert_eq!(
        " 50.00 com\n 50.00 org\n",
        std::fs::read_to_string(dir.path().join("in.out")).unwrap()
    );
}

#[test]
fn report_that_cannot_be_replaced_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("blocked");
    // A directory in place of the report makes the final rename fail.
    std::fs::create_dir(dir.path().join("blocked.out")).unwrap();
    let result = aggregate_and_emit(
        &sample_records(),
        &prefix,
        FilterWindow::All,
        ReportFormat::Padded,
    );
    assert!(matches!(result, Err(PipelineError::Io { .. })));
    assert!(dir.path().join("blocked.out").is_dir());
    assert_eq!(
        3,
        std::fs::read_to_string(dir.path().join("blocked.txt"))
            .unwrap()
            .lines()
            .count()
    );
    // No temporary files are left behind.
    assert_eq!(2, std::fs::read_dir(dir.path()).unwrap().count());
}
