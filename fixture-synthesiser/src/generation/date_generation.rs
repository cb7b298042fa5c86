use super::*;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Produces a date within the range by drawing a second uniformly from the span between the starts of the
/// first and the last day and truncating it to its date.
///
/// The last day of the range is never drawn unless the range consists of a single day, in which case that
/// day is returned.
pub fn generate_date<T: Rng>(range: &DateRange, rng: &mut T) -> DateStamp {
    let start = range.start().naive_date();
    let span_seconds = range
        .end()
        .naive_date()
        .signed_duration_since(start)
        .num_seconds();
    if span_seconds <= 0 {
        return range.start();
    }
    let offset_seconds = rng.gen_range(0..span_seconds);
    DateStamp::new(start + Duration::days(offset_seconds / SECONDS_PER_DAY))
}
