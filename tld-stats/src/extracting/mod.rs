// This module contains functionality enabling extraction of TLD occurrence counts from records.
use std::collections::HashMap;

use common_utils::{
    date_utils::{DateStamp, FilterWindow},
    parsing_utils::Record,
};

// Returns the part of the URL after its final dot, provided there is one and it is followed by something.
pub(crate) fn extract_tld(url: &str) -> Option<&str> {
    let last_dot = url.rfind('.')?;
    let tld = &url[last_dot + 1..];
    if tld.is_empty() {
        None
    } else {
        Some(tld)
    }
}

/// Occurrence counts of TLDs among the records that fall within a window.
#[derive(Debug, Clone)]
pub struct TldStats {
    window: FilterWindow,
    counts: HashMap<String, u64>,
    total: u64,
}

impl TldStats {
    pub fn new(window: FilterWindow) -> Self {
        Self {
            window,
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Counts one occurrence of the TLD if the date lies within the window.
    /// Returns whether the occurrence was counted.
    pub fn add(&mut self, tld: &str, date: DateStamp) -> bool {
        if !self.window.admits(date) {
            return false;
        }
        if let Some(count) = self.counts.get_mut(tld) {
            *count += 1;
        } else {
            self.counts.insert(tld.to_string(), 1);
        }
        self.total += 1;
        true
    }

    /// Counts the TLD of the record's URL. Records without an extractable TLD are not counted.
    pub fn add_record(&mut self, record: &Record) -> bool {
        match extract_tld(record.url.as_str()) {
            Some(tld) => self.add(tld, record.date),
            None => false,
        }
    }

    pub fn from_records<'a, I: IntoIterator<Item = &'a Record>>(
        records: I,
        window: FilterWindow,
    ) -> Self {
        let mut stats = Self::new(window);
        for record in records {
            stats.add_record(record);
        }
        stats
    }

    /// The number of counted occurrences over all TLDs.
    pub fn count(&self) -> u64 {
        self.total
    }

    pub fn get(&self, tld: &str) -> Option<u64> {
        self.counts.get(tld).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub(crate) fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }
}
