// The floating-point literals below are fitted values. They must keep their
// exact precision: changing any of them changes which day a Hijri month or
// year begins on.

/// Day zero of the tabular count, astronomical reckoning. 1 Muharram 1 AH
/// falls 355 days later, on Thursday 15 July 622 (Julian).
pub const EPOCH_ASTRONOMICAL: i64 = 1_948_084;
/// Day zero of the tabular count, civil reckoning. 1 Muharram 1 AH falls on
/// Friday 16 July 622 (Julian).
pub const EPOCH_CIVIL: i64 = 1_948_085;

/// Days in one 30-year tabular cycle (19 common years of 354 days, 11 leap years of 355).
pub const CYCLE_DAYS: f64 = 10631.0;
/// Hijri years per tabular cycle
pub const CYCLE_YEARS: i64 = 30;
/// Mean tabular year length, `10631 / 30`
pub const MEAN_YEAR: f64 = 10631.0 / 30.0;
/// Epoch alignment offset, `8.01 / 60` of a day
pub const YEAR_SHIFT: f64 = 8.01 / 60.0;

/// Offset added to the day-of-year before dividing by [`MONTH_DIVISOR`]
pub const MONTH_OFFSET: f64 = 28.5001;
/// Alternating 30/29 month length used to locate the month
pub const MONTH_DIVISOR: f64 = 29.5;
/// Month length used to find the first day of a located month
pub const MONTH_START_FACTOR: f64 = 29.5001;

/// Last Julian Day Number still reckoned in the Julian calendar (4 Oct 1582).
pub const LAST_JULIAN_JDN: i64 = 2_299_160;
/// Year of the Gregorian reform
pub const REFORM_YEAR: i32 = 1582;
/// Month of the Gregorian reform (October, 1-based)
pub const REFORM_MONTH: u8 = 10;
/// Last Julian-calendar day of the reform month
pub const REFORM_LAST_JULIAN_DAY: u8 = 4;
/// First Gregorian day of the reform month
pub const REFORM_FIRST_GREGORIAN_DAY: u8 = 15;
/// Days dropped by the reform
pub const REFORM_GAP_DAYS: f64 = 10.0;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// First day of month
pub const MIN_DAY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Weekday names, Sunday first. Indexed by [`crate::HijriDate::weekday`].
pub const DAY_NAMES: [&str; 7] = ["Ahad", "Ithnin", "Thulatha", "Arbaa", "Khams", "Jumuah", "Sabt"];

/// Hijri month names, Muharram first. Indexed by [`crate::HijriDate::month`].
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi'ul Awwal",
    "Rabi'ul Akhir",
    "Jumadal Ula",
    "Jumadal Akhira",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhul Qa'ada",
    "Dhul Hijja",
];

/// Era marker appended to formatted Hijri dates
pub const ERA_SUFFIX: &str = "AH";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator accepted when parsing (`2012/12/25`)
pub const SLASH_SEPARATOR: char = '/';
