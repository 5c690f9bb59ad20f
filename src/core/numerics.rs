//! Core number derivation from a calendar date.

use crate::core::reduce::{digit_sum, reduce_digit};
use crate::domain::model::{CalendarDate, CoreNumbers};

/// Compute the profile's core numbers.
///
/// Personality = reduce(day + month + year). The bridge is the year's digit
/// sum plus Personality, kept unreduced for display; Life Value is the
/// bridge reduced to a single digit.
pub fn compute_core_numbers(date: &CalendarDate) -> CoreNumbers {
    let total = i64::from(date.day) + i64::from(date.month) + i64::from(date.year);
    let personality = reduce_digit(total);

    let year_digit_sum = digit_sum(u64::from(date.year.unsigned_abs())) as u32;
    let bridge = year_digit_sum + u32::from(personality);
    let life_value = reduce_digit(i64::from(bridge));

    CoreNumbers {
        personality,
        bridge,
        life_value,
    }
}
