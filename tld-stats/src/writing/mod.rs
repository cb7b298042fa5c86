// This module contains functionality related to formatting and writing of records and ranked TLD report lines.
use std::{
    fmt::{Display, Formatter},
    io::{BufWriter, Write},
};

use crate::{configuration::ReportFormat, sorting::RankedTld};

// Write items from an iterator, one line per item.
// the BufWriter will be told to flush when the difference between the buffers internal capacity and the buffered data
// is below the given flush_threshold.
pub(crate) fn write_records<W: Write, Record: Display, I: IntoIterator<Item = Record>>(
    buf_writer: &mut BufWriter<W>,
    record_iterator: I,
    flush_threshold: usize,
) -> std::io::Result<()> {
    for record in record_iterator {
        if buf_writer.capacity() - buf_writer.buffer().len() < flush_threshold {
            buf_writer.flush()?;
        }
        writeln!(buf_writer, "{}", record)?;
    }
    buf_writer.flush()
}

// This struct corresponds to a line in the "<prefix>.out" file.
#[derive(PartialEq, Debug)]
pub(crate) struct ReportLine<'a> {
    ranked: &'a RankedTld,
    total: u64,
    format: ReportFormat,
}

impl<'a> ReportLine<'a> {
    pub(crate) fn new(ranked: &'a RankedTld, total: u64, format: ReportFormat) -> Self {
        Self {
            ranked,
            total,
            format,
        }
    }

    // The share of the total as a percentage rounded to two decimals, ties to even.
    pub(crate) fn percentage(&self) -> f64 {
        let percentage = self.ranked.count as f64 / self.total as f64 * 100.0;
        round_to_cents(percentage)
    }
}

// Rounds to two decimals by the exact value of the float rather than by its product with 100, which may
// land on a half when the value itself lies just beside one. Exact halves go to the even neighbour.
fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    // The rounding error of the multiplication, exact thanks to the fused multiply add.
    let error = value.mul_add(100.0, -scaled);
    let floor = scaled.floor();
    let cents = if scaled - floor != 0.5 {
        scaled.round()
    } else if error < 0.0 {
        floor
    } else if error > 0.0 {
        floor + 1.0
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    cents / 100.0
}

impl Display for ReportLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.format {
            ReportFormat::Padded => write!(f, "{:>6.2} {}", self.percentage(), self.ranked.tld),
            ReportFormat::WithCount => write!(
                f,
                "{:.2} {} {}",
                self.percentage(),
                self.ranked.tld,
                self.ranked.count
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(tld: &str, count: u64) -> RankedTld {
        RankedTld {
            tld: tld.to_string(),
            count,
        }
    }

    #[test]
    fn padded_lines_are_right_justified() {
        let org = ranked("org", 1);
        let com = ranked("com", 2);
        let all = ranked("com", 3);
        assert_eq!(" 33.33 org", ReportLine::new(&org, 3, ReportFormat::Padded).to_string());
        assert_eq!(" 66.67 com", ReportLine::new(&com, 3, ReportFormat::Padded).to_string());
        assert_eq!("100.00 com", ReportLine::new(&all, 3, ReportFormat::Padded).to_string());
    }

    #[test]
    fn count_lines_carry_the_raw_count() {
        let org = ranked("org", 1);
        let small = ranked("qa", 1);
        assert_eq!("33.33 org 1", ReportLine::new(&org, 3, ReportFormat::WithCount).to_string());
        assert_eq!("0.50 qa 1", ReportLine::new(&small, 200, ReportFormat::WithCount).to_string());
    }

    #[test]
    fn rounding_follows_the_exact_share() {
        let line = |count, total| {
            let tld = ranked("co", count);
            ReportLine::new(&tld, total, ReportFormat::WithCount).to_string()
        };
        // 23/160 * 100 is stored just below 14.375.
        assert_eq!("14.37 co 23", line(23, 160));
        // 1/32 and 3/32 give exact halves which go to the even neighbour.
        assert_eq!("3.12 co 1", line(1, 32));
        assert_eq!("9.38 co 3", line(3, 32));
        assert_eq!("15.62 co 5", line(5, 32));
        assert_eq!("66.67 co 2", line(2, 3));
    }

    #[test]
    fn write_records_writes_one_line_per_item() {
        let mut buf_writer = BufWriter::with_capacity(16, Vec::new());
        write_records(&mut buf_writer, vec!["a", "bb", "ccc"], 4).unwrap();
        assert_eq!(b"a\nbb\nccc\n".to_vec(), buf_writer.into_inner().unwrap());
    }
}
