//! # Date utilities
//!
//! This module yields utilities for dates represented as strings of the form DD/MM/YYYY,
//! together with the inclusive ranges used for generation bounds and aggregation windows.
//!

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PipelineError, Result};

/// The chrono format string matching DD/MM/YYYY.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap());

/// A calendar date without a time of day, written as DD/MM/YYYY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateStamp {
    date: NaiveDate,
}

impl DateStamp {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parses a string of the form DD/MM/YYYY.
    ///
    /// Single digit days or months, two digit years and dates that do not exist
    /// (such as 29/02/2019) are rejected.
    pub fn from_dmy(date_dmy: &str) -> std::result::Result<Self, String> {
        if !DATE_SHAPE.is_match(date_dmy) {
            return Err(format!(
                "the string {:?} is not of the form DD/MM/YYYY",
                date_dmy
            ));
        }
        NaiveDate::parse_from_str(date_dmy, DATE_FORMAT)
            .map(Self::new)
            .map_err(|_| format!("{:?} is not a valid calendar date", date_dmy))
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for DateStamp {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dmy(s).map_err(PipelineError::InvalidArgument)
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format(DATE_FORMAT))
    }
}

/// An inclusive range of dates. The start never lies after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateStamp,
    end: DateStamp,
}

impl DateRange {
    pub fn new(start: DateStamp, end: DateStamp) -> Result<Self> {
        if end < start {
            return Err(PipelineError::invalid_argument(format!(
                "the range ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Builds a range from two strings of the form DD/MM/YYYY.
    pub fn from_dmy(start: &str, end: &str) -> Result<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> DateStamp {
        self.start
    }

    pub fn end(&self) -> DateStamp {
        self.end
    }

    pub fn contains(&self, date: DateStamp) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Restricts which records contribute to a TLD report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterWindow {
    /// Every record counts.
    All,
    /// Only records dated within the range count.
    Within(DateRange),
}

impl FilterWindow {
    /// Builds a window from optional bounds. Either both or neither must be present.
    pub fn from_bounds(start: Option<DateStamp>, end: Option<DateStamp>) -> Result<Self> {
        match (start, end) {
            (None, None) => Ok(FilterWindow::All),
            (Some(start), Some(end)) => Ok(FilterWindow::Within(DateRange::new(start, end)?)),
            _ => Err(PipelineError::invalid_argument(
                "an aggregation window needs both a start and an end date",
            )),
        }
    }

    pub fn admits(&self, date: DateStamp) -> bool {
        match self {
            FilterWindow::All => true,
            FilterWindow::Within(range) => range.contains(date),
        }
    }
}

impl Default for FilterWindow {
    fn default() -> Self {
        FilterWindow::All
    }
}
