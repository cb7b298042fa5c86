use itertools::Itertools;

use crate::extracting::TldStats;

/// A TLD together with the number of times it was counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTld {
    pub tld: String,
    pub count: u64,
}

// Orders the TLDs from least to most frequent. TLDs with equal counts are ordered lexicographically.
pub(crate) fn rank_tlds(stats: &TldStats) -> Vec<RankedTld> {
    stats
        .counts()
        .iter()
        .sorted_by(|(tld_x, count_x), (tld_y, count_y)| {
            count_x.cmp(count_y).then_with(|| tld_x.cmp(tld_y))
        })
        .map(|(tld, count)| RankedTld {
            tld: tld.clone(),
            count: *count,
        })
        .collect()
}
