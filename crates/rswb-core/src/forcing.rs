//! Validated daily climate forcing for one cell.
//!
//! The external driver supplies one row per calendar day: min/max/mean air
//! temperature and gross precipitation. Validation happens once at
//! construction; the daily loop then reads by index without re-checking.

use chrono::NaiveDate;

use crate::error::{SwbError, SwbResult};

/// One day's climate inputs.
#[derive(Debug, Clone, Copy)]
pub struct DailyForcing {
    pub date: NaiveDate,
    pub tmin_c: f64,
    pub tmax_c: f64,
    pub tmean_c: f64,
    pub gross_precip_mm: f64,
}

/// Validated climate series for a multi-year run.
///
/// All arrays must have the same length, contain no NaN values, and the
/// dates must be strictly increasing. Gross precipitation must be >= 0.
#[derive(Debug, Clone)]
pub struct ClimateSeries {
    pub dates: Vec<NaiveDate>,
    pub tmin_c: Vec<f64>,
    pub tmax_c: Vec<f64>,
    pub tmean_c: Vec<f64>,
    pub gross_precip_mm: Vec<f64>,
}

impl ClimateSeries {
    pub fn new(
        dates: Vec<NaiveDate>,
        tmin_c: Vec<f64>,
        tmax_c: Vec<f64>,
        tmean_c: Vec<f64>,
        gross_precip_mm: Vec<f64>,
    ) -> SwbResult<Self> {
        if dates.is_empty() {
            return Err(SwbError::InvalidForcing("series is empty".to_string()));
        }
        for (name, arr) in [
            ("tmin_c", &tmin_c),
            ("tmax_c", &tmax_c),
            ("tmean_c", &tmean_c),
            ("gross_precip_mm", &gross_precip_mm),
        ] {
            if arr.len() != dates.len() {
                return Err(SwbError::InvalidForcing(format!(
                    "{} length {} does not match date length {}",
                    name,
                    arr.len(),
                    dates.len()
                )));
            }
            if arr.iter().any(|v| v.is_nan()) {
                return Err(SwbError::InvalidForcing(format!(
                    "{} contains NaN values",
                    name
                )));
            }
        }
        if gross_precip_mm.iter().any(|&p| p < 0.0) {
            return Err(SwbError::InvalidForcing(
                "gross_precip_mm contains negative values".to_string(),
            ));
        }
        if dates.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SwbError::InvalidForcing(
                "dates are not strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            dates,
            tmin_c,
            tmax_c,
            tmean_c,
            gross_precip_mm,
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn get(&self, i: usize) -> DailyForcing {
        DailyForcing {
            date: self.dates[i],
            tmin_c: self.tmin_c[i],
            tmax_c: self.tmax_c[i],
            tmean_c: self.tmean_c[i],
            gross_precip_mm: self.gross_precip_mm[i],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = DailyForcing> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn valid_series() -> ClimateSeries {
        ClimateSeries::new(
            vec![d(2000, 1, 1), d(2000, 1, 2), d(2000, 1, 3)],
            vec![-5.0, -2.0, 0.0],
            vec![2.0, 4.0, 6.0],
            vec![-1.5, 1.0, 3.0],
            vec![0.0, 10.0, 2.5],
        )
        .unwrap()
    }

    #[test]
    fn valid_construction() {
        let s = valid_series();
        assert_eq!(s.len(), 3);
        let day = s.get(1);
        assert_eq!(day.date, d(2000, 1, 2));
        assert_eq!(day.gross_precip_mm, 10.0);
    }

    #[test]
    fn rejects_empty() {
        let r = ClimateSeries::new(vec![], vec![], vec![], vec![], vec![]);
        assert!(matches!(r, Err(SwbError::InvalidForcing(_))));
    }

    #[test]
    fn rejects_length_mismatch() {
        let r = ClimateSeries::new(
            vec![d(2000, 1, 1), d(2000, 1, 2)],
            vec![0.0],
            vec![1.0, 2.0],
            vec![0.5, 1.0],
            vec![0.0, 0.0],
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_nan() {
        let r = ClimateSeries::new(
            vec![d(2000, 1, 1)],
            vec![f64::NAN],
            vec![1.0],
            vec![0.5],
            vec![0.0],
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_negative_precip() {
        let r = ClimateSeries::new(
            vec![d(2000, 1, 1)],
            vec![0.0],
            vec![1.0],
            vec![0.5],
            vec![-1.0],
        );
        assert!(r.is_err());
    }

    #[test]
    fn rejects_unordered_dates() {
        let r = ClimateSeries::new(
            vec![d(2000, 1, 2), d(2000, 1, 1)],
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![0.5, 0.5],
            vec![0.0, 0.0],
        );
        assert!(r.is_err());
    }

    #[test]
    fn iter_yields_all_days() {
        let s = valid_series();
        let days: Vec<DailyForcing> = s.iter().collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].tmean_c, 3.0);
    }
}
