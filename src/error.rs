/// Error type for the validation and parsing boundary.
///
/// Conversion itself never fails; these only surface when a caller asks for a
/// checked date (`CivilDate::try_new`), parses text, or deserializes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year/month/day triple does not name a real calendar day.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Text did not have the shape of a date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    /// Unknown Hijri epoch name.
    #[error("Invalid epoch: {0} (expected 'astronomical' or 'civil')")]
    InvalidEpoch(String),
}
