//! Source of "today" for the conversions that default to the current date.

use crate::types::CivilDate;
use tracing::debug;

/// Supplies the current civil date.
pub trait Clock {
    fn today(&self) -> CivilDate;
}

/// Reads the host's local date through chrono.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CivilDate {
        let today = chrono::Local::now().date_naive();
        debug!(%today, "read local date");
        today.into()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CivilDate);

impl Clock for FixedClock {
    fn today(&self) -> CivilDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CivilDate {
        (**self).today()
    }
}
