//! Civil date → Julian Day Number → tabular Hijri date.
//!
//! All intermediate arithmetic is done in `f64` with `floor`, the way the
//! Kuwaiti algorithm is usually published. The results are exact integers, so
//! they are narrowed only at the end.

use crate::consts::{
    CYCLE_DAYS, CYCLE_YEARS, MEAN_YEAR, MONTH_DIVISOR, MONTH_OFFSET,
    MONTH_START_FACTOR, REFORM_GAP_DAYS, REFORM_LAST_JULIAN_DAY, REFORM_MONTH, REFORM_YEAR,
    YEAR_SHIFT,
};
use crate::prelude::*;
use crate::types::{CivilDate, GregorianDate, HijriDate, HijriEpoch, JulianDayNumber};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Everything one conversion produces.
///
/// Serializes flat, with the field names `gregorian_day`, `gregorian_month`,
/// `gregorian_year`, `julian_day`, `weekday`, `hijri_day`, `hijri_month`,
/// `hijri_year`. Displays as the formatted Hijri date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", hijri)]
#[serde(from = "FlatResult", into = "FlatResult")]
pub struct ConversionResult {
    /// Input date recomputed from the Julian Day Number (zero-based month)
    pub gregorian: GregorianDate,
    pub julian_day: JulianDayNumber,
    pub hijri: HijriDate,
}

impl ConversionResult {
    pub const fn gregorian_day(&self) -> u8 {
        self.gregorian.day
    }

    /// Zero-based month of the recomputed Gregorian date
    pub const fn gregorian_month(&self) -> u8 {
        self.gregorian.month
    }

    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian.year
    }

    pub const fn julian_day(&self) -> JulianDayNumber {
        self.julian_day
    }

    /// Sunday-first weekday index, `0..=6`
    pub const fn weekday(&self) -> u8 {
        self.hijri.weekday
    }

    pub const fn hijri_day(&self) -> u8 {
        self.hijri.day
    }

    /// Zero-based Hijri month, `0..=11`
    pub const fn hijri_month(&self) -> u8 {
        self.hijri.month
    }

    pub const fn hijri_year(&self) -> i32 {
        self.hijri.year
    }
}

#[derive(Serialize, Deserialize)]
struct FlatResult {
    gregorian_day:   u8,
    gregorian_month: u8,
    gregorian_year:  i32,
    julian_day:      JulianDayNumber,
    weekday:         u8,
    hijri_day:       u8,
    hijri_month:     u8,
    hijri_year:      i32,
}

impl From<ConversionResult> for FlatResult {
    fn from(r: ConversionResult) -> Self {
        Self {
            gregorian_day:   r.gregorian.day,
            gregorian_month: r.gregorian.month,
            gregorian_year:  r.gregorian.year,
            julian_day:      r.julian_day,
            weekday:         r.hijri.weekday,
            hijri_day:       r.hijri.day,
            hijri_month:     r.hijri.month,
            hijri_year:      r.hijri.year,
        }
    }
}

impl From<FlatResult> for ConversionResult {
    fn from(f: FlatResult) -> Self {
        Self {
            gregorian:  GregorianDate {
                year:  f.gregorian_year,
                month: f.gregorian_month,
                day:   f.gregorian_day,
            },
            julian_day: f.julian_day,
            hijri:      HijriDate {
                year:    f.hijri_year,
                month:   f.hijri_month,
                day:     f.hijri_day,
                weekday: f.weekday,
            },
        }
    }
}

/// Converts a civil date using the astronomical Hijri epoch.
///
/// Never fails. Impossible dates (January 32, month 13, …) are converted as
/// the arithmetic dictates; the result is well-formed but meaningless.
///
/// ```
/// use tabular_hijri::{convert, CivilDate};
///
/// let r = convert(CivilDate::new(2000, 1, 1));
/// assert_eq!(r.julian_day().get(), 2_451_545);
/// assert_eq!((r.hijri_year(), r.hijri_month(), r.hijri_day()), (1420, 8, 25));
/// ```
pub fn convert(date: CivilDate) -> ConversionResult {
    convert_with_epoch(date, HijriEpoch::Astronomical)
}

/// Converts a civil date counting Hijri days from the given epoch.
pub fn convert_with_epoch(date: CivilDate, epoch: HijriEpoch) -> ConversionResult {
    let julian_day = julian_day_number(date);
    let gregorian = gregorian_from_jdn(julian_day);
    let hijri = hijri_from_jdn(julian_day, epoch);

    trace!(
        %date,
        %julian_day,
        %epoch,
        hijri_year = hijri.year,
        hijri_month = hijri.month,
        hijri_day = hijri.day,
        "converted civil date"
    );

    ConversionResult {
        gregorian,
        julian_day,
        hijri,
    }
}

/// Julian Day Number of a civil date.
///
/// Dates before 1583 are reckoned in the Julian calendar, except that in
/// 1582 any day after 4 October is shifted ten days as if Gregorian. The
/// days 5..=14 October 1582 therefore land on the same numbers as 25 September
/// ..= 4 October; they are not rejected.
pub fn julian_day_number(date: CivilDate) -> JulianDayNumber {
    let mut y = f64::from(date.year);
    let mut m = f64::from(date.month);
    let day = f64::from(date.day);

    // March-based year: January and February belong to the previous year.
    if date.month < 3 {
        y -= 1.0;
        m += 12.0;
    }

    let b = reform_correction(y, m, date.day);
    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.0;

    JulianDayNumber::new(to_int(jd))
}

/// Gregorian leap-day correction for a March-based year `y` and month `m`.
fn reform_correction(y: f64, m: f64, day: u8) -> f64 {
    let reform_year = f64::from(REFORM_YEAR);
    let reform_month = f64::from(REFORM_MONTH);
    let gap = -REFORM_GAP_DAYS;

    if y == reform_year {
        if m > reform_month {
            return gap;
        }
        if m == reform_month {
            return if day > REFORM_LAST_JULIAN_DAY { gap } else { 0.0 };
        }
        return 0.0;
    }
    if y < reform_year {
        return 0.0;
    }

    let a = (y / 100.0).floor();
    2.0 - a + (a / 4.0).floor()
}

/// Recovers the calendar date from a Julian Day Number.
///
/// Days after 4 October 1582 come back Gregorian, earlier days Julian.
pub fn gregorian_from_jdn(jdn: JulianDayNumber) -> GregorianDate {
    #[allow(clippy::cast_precision_loss)]
    let jd = jdn.get() as f64;

    let b = if jdn.is_gregorian() {
        let a = ((jd - 1_867_216.25) / 36_524.25).floor();
        1.0 + a - (a / 4.0).floor()
    } else {
        0.0
    };

    let bb = jd + b + 1524.0;
    let mut cc = ((bb - 122.1) / 365.25).floor();
    let dd = (365.25 * cc).floor();
    let ee = ((bb - dd) / 30.6001).floor();

    let day = (bb - dd) - (30.6001 * ee).floor();
    // ee runs 4..=15 over March..February
    let month = if ee > 13.0 {
        cc += 1.0;
        ee - 13.0
    } else {
        ee - 1.0
    };
    let year = cc - 4716.0;

    GregorianDate {
        year:  to_i32(year),
        month: to_small(month - 1.0),
        day:   to_small(day),
    }
}

/// Sunday-first weekday index (`0` = Ahad) of a Julian Day Number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn weekday(jdn: JulianDayNumber) -> u8 {
    // rem_euclid keeps the index in 0..=6 even for negative day numbers
    (jdn.get() + 1).rem_euclid(7) as u8
}

/// Tabular Hijri date of a Julian Day Number.
pub fn hijri_from_jdn(jdn: JulianDayNumber, epoch: HijriEpoch) -> HijriDate {
    #[allow(clippy::cast_precision_loss)]
    let mut z = (jdn.get() - epoch.jdn()) as f64;

    let cyc = (z / CYCLE_DAYS).floor();
    z -= CYCLE_DAYS * cyc;

    let j = ((z - YEAR_SHIFT) / MEAN_YEAR).floor();
    #[allow(clippy::cast_precision_loss)]
    let year = CYCLE_YEARS as f64 * cyc + j;

    z -= (j * MEAN_YEAR + YEAR_SHIFT).floor();

    // Day 355 of a leap year would otherwise compute as month 13.
    let month = ((z + MONTH_OFFSET) / MONTH_DIVISOR).floor().min(12.0);
    let day = z - (MONTH_START_FACTOR * month - 29.0).floor();

    HijriDate {
        year:    to_i32(year),
        month:   to_small(month - 1.0),
        day:     to_small(day),
        weekday: weekday(jdn),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_int(value: f64) -> i64 {
    value as i64
}

#[allow(clippy::cast_possible_truncation)]
fn to_i32(value: f64) -> i32 {
    value as i32
}

// Month and day indices are bounded by the algorithm (at most 30).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_small(value: f64) -> u8 {
    value as u8
}
