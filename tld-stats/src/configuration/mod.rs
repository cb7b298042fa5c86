// This module holds the settings that shape the TLD report: which layout its lines use.
use std::{fmt, str::FromStr};

/// The layout of a line in `<prefix>.out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// The percentage right justified in six characters, then the TLD: ` 33.33 org`
    Padded,
    /// The percentage, the TLD and the raw count: `33.33 org 1`
    WithCount,
}

impl ReportFormat {
    /// The names accepted on the command line.
    pub const VARIANTS: &'static [&'static str] = &["padded", "with-count"];
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Padded
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "padded" => Ok(ReportFormat::Padded),
            "with-count" => Ok(ReportFormat::WithCount),
            other => Err(format!(
                "unknown report format {:?}, expected one of {:?}",
                other,
                Self::VARIANTS
            )),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Padded => write!(f, "padded"),
            ReportFormat::WithCount => write!(f, "with-count"),
        }
    }
}
