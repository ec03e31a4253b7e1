use crate::consts::{DAY_NAMES, MONTH_NAMES};
use crate::convert::ConversionResult;

/// Formats a conversion as `"<DayName>, <day> <MonthName> <year> AH"`.
pub fn format(result: &ConversionResult) -> String {
    result.to_string()
}

/// Weekday name for a Sunday-first index, `None` outside `0..=6`.
pub fn day_name(weekday: usize) -> Option<&'static str> {
    DAY_NAMES.get(weekday).copied()
}

/// Hijri month name for a zero-based index, `None` outside `0..=11`.
pub fn month_name(month: usize) -> Option<&'static str> {
    MONTH_NAMES.get(month).copied()
}
