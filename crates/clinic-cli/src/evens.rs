//! Even-number counter.

use std::ops::RangeInclusive;

/// Count the even integers in `range`. An inverted range counts zero.
pub fn count_evens(range: RangeInclusive<i64>) -> usize {
    range.filter(|n| n % 2 == 0).count()
}
