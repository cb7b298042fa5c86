//! Random generation of URLs, dates and whole record sets. Every function draws from the random number
//! generator it is handed, so a seeded generator reproduces its output exactly.

use chrono::Duration;
use common_utils::{
    date_utils::{DateRange, DateStamp},
    parsing_utils::Record,
};
use rand::Rng;
use std::iter;

pub mod date_generation;
pub mod url_generation;

pub use date_generation::generate_date;
pub use url_generation::generate_url;

/// Produces `num_records` independent records with dates drawn from the range, in generation order.
pub fn generate_dataset<T: Rng>(range: &DateRange, num_records: usize, rng: &mut T) -> Vec<Record> {
    iter::repeat_with(|| {
        let date = generate_date(range, rng);
        Record::new(date, generate_url(rng))
    })
    .take(num_records)
    .collect()
}
