//! Date bookkeeping for the daily loop.
//!
//! The reference-ET collaborator is driven by day-of-year and year length;
//! both are derived leap-aware from the calendar date.

use chrono::{Datelike, NaiveDate};

/// Per-day calendar measures derived once at the top of each daily update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateMeasures {
    pub date: NaiveDate,
    /// 1-based ordinal day (Jan 1 = 1).
    pub day_of_year: u32,
    /// 365 or 366.
    pub days_in_year: u32,
}

impl DateMeasures {
    pub fn for_date(date: NaiveDate) -> Self {
        let days_in_year = if date.leap_year() { 366 } else { 365 };
        Self {
            date,
            day_of_year: date.ordinal(),
            days_in_year,
        }
    }

    /// True on January 1, the day the growing-degree-day accumulator resets.
    pub fn is_first_of_year(&self) -> bool {
        self.date.month() == 1 && self.date.day() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn ordinal_day_is_one_based() {
        let m = DateMeasures::for_date(d(2001, 1, 1));
        assert_eq!(m.day_of_year, 1);
        assert_eq!(m.days_in_year, 365);
    }

    #[test]
    fn leap_year_has_366_days() {
        let m = DateMeasures::for_date(d(2000, 12, 31));
        assert_eq!(m.day_of_year, 366);
        assert_eq!(m.days_in_year, 366);
    }

    #[test]
    fn century_non_leap() {
        let m = DateMeasures::for_date(d(1900, 3, 1));
        assert_eq!(m.days_in_year, 365);
        assert_eq!(m.day_of_year, 60);
    }

    #[test]
    fn first_of_year_detection() {
        assert!(DateMeasures::for_date(d(1995, 1, 1)).is_first_of_year());
        assert!(!DateMeasures::for_date(d(1995, 1, 2)).is_first_of_year());
        assert!(!DateMeasures::for_date(d(1995, 12, 31)).is_first_of_year());
    }
}
