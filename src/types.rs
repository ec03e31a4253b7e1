use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAY_NAMES, EPOCH_ASTRONOMICAL, EPOCH_CIVIL, ERA_SUFFIX,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
    MONTH_NAMES, REFORM_FIRST_GREGORIAN_DAY, REFORM_LAST_JULIAN_DAY, REFORM_MONTH, REFORM_YEAR,
    SLASH_SEPARATOR,
};
use crate::prelude::*;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A civil calendar date: Julian calendar up to 4 October 1582, Gregorian
/// from 15 October 1582.
///
/// `month` is 1-based. Construction through [`CivilDate::new`] performs no
/// validation; an impossible date such as January 32 still converts, it just
/// yields a meaningless result. Use [`CivilDate::try_new`] or [`FromStr`] when
/// the input comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CivilDate {
    /// Creates a date without checking it.
    #[inline]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, rejecting anything that is not a real calendar day.
    ///
    /// February follows the Julian leap rule through 1582 and the Gregorian
    /// rule afterwards. The ten days dropped by the 1582 reform are rejected.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a month outside `1..=12`, a
    /// day outside the month, or a day in 5..=14 October 1582.
    pub fn try_new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDate { year, month, day };
        if month == 0 || month > MAX_MONTH || day < MIN_DAY {
            return Err(invalid);
        }
        if day > days_in_month(year, month) {
            return Err(invalid);
        }
        if is_reform_gap(year, month, day) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// Returns true if the date names a real day (see [`CivilDate::try_new`]).
    pub fn is_valid(&self) -> bool {
        Self::try_new(self.year, self.month, self.day).is_ok()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year, self.month, self.day
        )
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(SLASH_SEPARATOR);
        let separator = match (has_hyphen, has_slash) {
            (true, true) => {
                return Err(CalendarError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {SLASH_SEPARATOR})"
                )));
            },
            (true, false) => DATE_SEPARATOR,
            (false, true) => SLASH_SEPARATOR,
            (false, false) => {
                return Err(CalendarError::InvalidFormat(format!(
                    "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {trimmed}"
                )));
            },
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        };

        Self::try_new(parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

/// Parses one unsigned numeric component, keeping the raw text in the error.
fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl From<chrono::NaiveDate> for CivilDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Astronomical Julian Day Number: whole days counted from the Julian epoch
/// (1 January 4713 BC, proleptic Julian calendar).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// True for days reckoned in the Gregorian calendar (15 October 1582 onwards).
    #[inline]
    pub const fn is_gregorian(self) -> bool {
        self.0 > crate::consts::LAST_JULIAN_JDN
    }
}

/// A Gregorian (or pre-reform Julian) date recovered from a Julian Day Number.
///
/// `month` is zero-based (`0` = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Converts back to a 1-based [`CivilDate`].
    pub const fn to_civil(self) -> CivilDate {
        CivilDate::new(self.year, self.month + 1, self.day)
    }
}

/// A date in the tabular Islamic calendar.
///
/// `month` is zero-based (`0` = Muharram) and always in `0..=11`. `day` is in
/// `1..=30`. `weekday` is Sunday-first, `0..=6`. `year` is not clamped and is
/// zero or negative for days before the Hijra.
///
/// Displays as `"<DayName>, <day> <MonthName> <year> AH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
}

impl HijriDate {
    /// Name of the Hijri month, e.g. `"Ramadan"`.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month) % MONTH_NAMES.len()]
    }

    /// Name of the weekday, e.g. `"Jumuah"`.
    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[usize::from(self.weekday) % DAY_NAMES.len()]
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} {} {ERA_SUFFIX}",
            self.day_name(),
            self.day,
            self.month_name(),
            self.year
        )
    }
}

/// Which day the tabular count starts from.
///
/// The astronomical epoch (1 Muharram 1 AH on Thursday 15 July 622) is the default and
/// the one [`crate::convert`] uses. The civil epoch starts a day later, so every
/// civil-epoch Hijri date is one day behind its astronomical counterpart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HijriEpoch {
    #[default]
    #[display(fmt = "astronomical")]
    Astronomical,
    #[display(fmt = "civil")]
    Civil,
}

impl HijriEpoch {
    /// Julian Day Number of day zero of the tabular count under this epoch
    pub const fn jdn(self) -> i64 {
        match self {
            Self::Astronomical => EPOCH_ASTRONOMICAL,
            Self::Civil => EPOCH_CIVIL,
        }
    }
}

impl FromStr for HijriEpoch {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astronomical" => Ok(Self::Astronomical),
            "civil" => Ok(Self::Civil),
            _ => Err(CalendarError::InvalidEpoch(s.to_owned())),
        }
    }
}

// Helper functions

/// Leap year under the calendar in force for `year`: Julian through 1582,
/// Gregorian afterwards.
pub const fn is_leap_year(year: i32) -> bool {
    if year <= REFORM_YEAR {
        return year.rem_euclid(LEAP_YEAR_CYCLE) == 0;
    }
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

const fn is_reform_gap(year: i32, month: u8, day: u8) -> bool {
    year == REFORM_YEAR
        && month == REFORM_MONTH
        && day > REFORM_LAST_JULIAN_DAY
        && day < REFORM_FIRST_GREGORIAN_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::civil;

    #[test]
    fn test_civil_new_is_permissive() {
        let date = CivilDate::new(2024, 1, 32);
        assert_eq!((date.year, date.month, date.day), (2024, 1, 32));
        assert!(!date.is_valid());
    }

    #[test]
    fn test_try_new_cases() {
        struct TestCase {
            year:        i32,
            month:       u8,
            day:         u8,
            valid:       bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                month:       2,
                day:         29,
                valid:       true,
                description: "Gregorian leap day",
            },
            TestCase {
                year:        2023,
                month:       2,
                day:         29,
                valid:       false,
                description: "Gregorian common year",
            },
            TestCase {
                year:        1900,
                month:       2,
                day:         29,
                valid:       false,
                description: "Gregorian century not divisible by 400",
            },
            TestCase {
                year:        1500,
                month:       2,
                day:         29,
                valid:       true,
                description: "Julian century leap day",
            },
            TestCase {
                year:        1582,
                month:       10,
                day:         4,
                valid:       true,
                description: "last Julian day",
            },
            TestCase {
                year:        1582,
                month:       10,
                day:         5,
                valid:       false,
                description: "first day of the reform gap",
            },
            TestCase {
                year:        1582,
                month:       10,
                day:         14,
                valid:       false,
                description: "last day of the reform gap",
            },
            TestCase {
                year:        1582,
                month:       10,
                day:         15,
                valid:       true,
                description: "first Gregorian day",
            },
            TestCase {
                year:        2024,
                month:       0,
                day:         1,
                valid:       false,
                description: "month zero",
            },
            TestCase {
                year:        2024,
                month:       13,
                day:         1,
                valid:       false,
                description: "month thirteen",
            },
            TestCase {
                year:        2024,
                month:       4,
                day:         31,
                valid:       false,
                description: "April 31",
            },
            TestCase {
                year:        2024,
                month:       1,
                day:         0,
                valid:       false,
                description: "day zero",
            },
        ];

        for case in &cases {
            let result = CivilDate::try_new(case.year, case.month, case.day);
            assert_eq!(
                result.is_ok(),
                case.valid,
                "{}-{}-{} ({})",
                case.year,
                case.month,
                case.day,
                case.description
            );
            if !case.valid {
                assert!(matches!(result, Err(CalendarError::InvalidDate { .. })));
            }
        }
    }

    #[test]
    fn test_parse_iso_and_slash() {
        assert_eq!("2012-12-25".parse::<CivilDate>().unwrap(), civil(2012, 12, 25));
        assert_eq!("2012/12/25".parse::<CivilDate>().unwrap(), civil(2012, 12, 25));
        assert_eq!(" 2000 / 01 / 01 ".parse::<CivilDate>().unwrap(), civil(2000, 1, 1));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<CivilDate>(), Err(CalendarError::EmptyInput)));
        assert!(matches!("   ".parse::<CivilDate>(), Err(CalendarError::EmptyInput)));
        assert!(matches!("2012".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("2012-12".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!(
            "2012-12/25".parse::<CivilDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2012-12-25-01".parse::<CivilDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!("2012-XX-25".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!("2012-+1-25".parse::<CivilDate>(), Err(CalendarError::InvalidFormat(_))));
        assert!(matches!(
            "2024-02-30".parse::<CivilDate>(),
            Err(CalendarError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(civil(2012, 12, 25).to_string(), "2012-12-25");
        assert_eq!(civil(622, 7, 16).to_string(), "0622-07-16");
    }

    #[test]
    fn test_serde_civil_date() {
        let date = civil(2012, 12, 25);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2012-12-25""#);
        let parsed: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<CivilDate, _> = serde_json::from_str(r#""2023-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_naive_date() {
        let naive = chrono::NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert_eq!(CivilDate::from(naive), civil(2026, 10, 15));
    }

    #[test]
    fn test_julian_day_number_newtype() {
        let jdn = JulianDayNumber::from(2_451_545);
        assert_eq!(jdn.get(), 2_451_545);
        assert_eq!(*jdn, 2_451_545);
        assert_eq!(jdn.to_string(), "2451545");
        let raw: i64 = jdn.into();
        assert_eq!(raw, 2_451_545);
        assert_eq!(serde_json::to_string(&jdn).unwrap(), "2451545");
    }

    #[test]
    fn test_julian_day_number_regime() {
        assert!(!JulianDayNumber::new(2_299_160).is_gregorian());
        assert!(JulianDayNumber::new(2_299_161).is_gregorian());
    }

    #[test]
    fn test_gregorian_to_civil() {
        let g = GregorianDate {
            year:  2012,
            month: 11,
            day:   25,
        };
        assert_eq!(g.to_civil(), civil(2012, 12, 25));
    }

    #[test]
    fn test_hijri_names() {
        let h = HijriDate {
            year:    1445,
            month:   8,
            day:     1,
            weekday: 5,
        };
        assert_eq!(h.month_name(), "Ramadan");
        assert_eq!(h.day_name(), "Jumuah");
        assert_eq!(h.to_string(), "Jumuah, 1 Ramadan 1445 AH");
    }

    #[test]
    fn test_epoch_parse_and_display() {
        assert_eq!("civil".parse::<HijriEpoch>().unwrap(), HijriEpoch::Civil);
        assert_eq!(
            " Astronomical ".parse::<HijriEpoch>().unwrap(),
            HijriEpoch::Astronomical
        );
        assert!(matches!(
            "lunar".parse::<HijriEpoch>(),
            Err(CalendarError::InvalidEpoch(_))
        ));
        assert_eq!(HijriEpoch::Civil.to_string(), "civil");
        assert_eq!(HijriEpoch::default(), HijriEpoch::Astronomical);
        assert_eq!(HijriEpoch::Civil.jdn() - HijriEpoch::Astronomical.jdn(), 1);
    }

    #[test]
    fn test_epoch_serde() {
        assert_eq!(serde_json::to_string(&HijriEpoch::Civil).unwrap(), r#""civil""#);
        let parsed: HijriEpoch = serde_json::from_str(r#""astronomical""#).unwrap();
        assert_eq!(parsed, HijriEpoch::Astronomical);
    }

    #[test]
    fn test_is_leap_year_regimes() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(1500), "Julian rule before the reform");
        assert!(is_leap_year(1300), "Julian rule before the reform");
        assert!(!is_leap_year(1582));
        assert!(is_leap_year(-4), "astronomical year numbering");
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
