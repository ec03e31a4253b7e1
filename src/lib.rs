//! Gregorian → tabular Islamic (Hijri) date conversion.
//!
//! A civil date is turned into an astronomical Julian Day Number, which is
//! then placed in the tabular ("Kuwaiti") Hijri calendar: 30-year cycles of
//! 10631 days with a fixed leap-year pattern. The result also carries the
//! weekday and the Gregorian date recomputed from the day number.
//!
//! ```
//! use tabular_hijri::{convert, format, CivilDate};
//!
//! let result = convert(CivilDate::new(2012, 12, 25));
//! assert_eq!(format(&result), "Thulatha, 12 Safar 1434 AH");
//! ```
//!
//! Conversion never fails. Input is not validated unless you ask for it with
//! [`CivilDate::try_new`] or by parsing.

mod clock;
mod consts;
mod convert;
mod error;
mod format;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use convert::{
    ConversionResult, convert, convert_with_epoch, gregorian_from_jdn, hijri_from_jdn,
    julian_day_number, weekday,
};
pub use error::CalendarError;
pub use format::{day_name, format, month_name};
pub use types::{
    CivilDate, GregorianDate, HijriDate, HijriEpoch, JulianDayNumber, days_in_month, is_leap_year,
};

/// Formatted Hijri date for `date`, or for today's local date when `None`.
///
/// ```
/// use tabular_hijri::{islamic_date, CivilDate};
///
/// let text = islamic_date(Some(CivilDate::new(2000, 1, 1)));
/// assert_eq!(text, "Sabt, 25 Ramadan 1420 AH");
/// ```
pub fn islamic_date(date: Option<CivilDate>) -> String {
    islamic_date_with_clock(&SystemClock, date)
}

/// Full conversion result for `date`, or for today's local date when `None`.
pub fn islamic_date_parts(date: Option<CivilDate>) -> ConversionResult {
    islamic_date_parts_with_clock(&SystemClock, date)
}

/// Like [`islamic_date`], reading "today" from `clock`.
pub fn islamic_date_with_clock<C: Clock + ?Sized>(clock: &C, date: Option<CivilDate>) -> String {
    format(&islamic_date_parts_with_clock(clock, date))
}

/// Like [`islamic_date_parts`], reading "today" from `clock`.
pub fn islamic_date_parts_with_clock<C: Clock + ?Sized>(
    clock: &C,
    date: Option<CivilDate>,
) -> ConversionResult {
    convert(date.unwrap_or_else(|| clock.today()))
}
