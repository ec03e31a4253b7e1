use crate::CivilDate;

pub fn civil(year: i32, month: u8, day: u8) -> CivilDate {
    CivilDate::new(year, month, day)
}
