//! Thornthwaite-Mather soil-moisture retention curve.
//!
//! Two interchangeable representations of the same relationship between
//! accumulated potential water loss (APWL) and retained soil moisture:
//! a power-law fit of the published retention tables (Thornthwaite and
//! Mather, 1957, Table 10), and a nearest-row lookup against an externally
//! supplied table. Both directions (apwl -> moisture, moisture -> apwl) are
//! required by the depletion models.

use std::f64::consts::LN_10;

use crate::error::{SwbError, SwbResult};

/// Regression slope of the millimeter retention-table fit.
pub const TM_SLOPE_TERM_MM: f64 = 0.539815721014123;

/// Regression exponent of the retention-table fit.
pub const TM_EXPONENT_TERM: f64 = -1.03678439421169;

/// Soil moisture [mm] retained at a given APWL, from the curve fit.
///
/// Returns 0 for a non-positive reservoir size.
pub fn soil_moisture_mm(max_soil_moisture: f64, apwl: f64) -> f64 {
    if max_soil_moisture > 0.0 {
        max_soil_moisture
            * 10f64.powf(-TM_SLOPE_TERM_MM * apwl * max_soil_moisture.powf(TM_EXPONENT_TERM))
    } else {
        0.0
    }
}

/// APWL [mm] implied by a soil-moisture value, the inverse of the curve fit.
pub fn accumulated_potential_water_loss_mm(max_soil_moisture: f64, soil_moisture: f64) -> f64 {
    if max_soil_moisture > 0.0 {
        -(soil_moisture.ln() - max_soil_moisture.ln())
            / (LN_10 * TM_SLOPE_TERM_MM * max_soil_moisture.powf(TM_EXPONENT_TERM))
    } else {
        0.0
    }
}

/// Externally supplied retention table: paired APWL / soil-moisture columns.
///
/// APWL must be strictly increasing and soil moisture non-increasing.
/// Read-only after construction; share across cells with `Arc`.
#[derive(Debug, Clone)]
pub struct RetentionTable {
    apwl_mm: Vec<f64>,
    soil_moisture_mm: Vec<f64>,
}

impl RetentionTable {
    pub fn new(apwl_mm: Vec<f64>, soil_moisture_mm: Vec<f64>) -> SwbResult<Self> {
        if apwl_mm.len() != soil_moisture_mm.len() {
            return Err(SwbError::InvalidRetentionTable(format!(
                "apwl column length {} does not match soil-moisture column length {}",
                apwl_mm.len(),
                soil_moisture_mm.len()
            )));
        }
        if apwl_mm.len() < 2 {
            return Err(SwbError::InvalidRetentionTable(
                "table must have at least two rows".to_string(),
            ));
        }
        if apwl_mm.iter().chain(&soil_moisture_mm).any(|v| v.is_nan()) {
            return Err(SwbError::InvalidRetentionTable(
                "table contains NaN values".to_string(),
            ));
        }
        if apwl_mm.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SwbError::InvalidRetentionTable(
                "apwl column is not strictly increasing".to_string(),
            ));
        }
        if soil_moisture_mm.windows(2).any(|w| w[1] > w[0]) {
            return Err(SwbError::InvalidRetentionTable(
                "soil-moisture column is not non-increasing".to_string(),
            ));
        }
        Ok(Self {
            apwl_mm,
            soil_moisture_mm,
        })
    }

    /// Synthesize a table by sampling the curve fit at a fixed APWL step.
    pub fn from_curve_fit(
        max_soil_moisture: f64,
        apwl_max: f64,
        apwl_step: f64,
    ) -> SwbResult<Self> {
        if max_soil_moisture <= 0.0 || apwl_max <= 0.0 || apwl_step <= 0.0 {
            return Err(SwbError::InvalidRetentionTable(
                "curve-fit sampling requires positive reservoir, range, and step".to_string(),
            ));
        }
        let n = (apwl_max / apwl_step).floor() as usize + 1;
        let apwl: Vec<f64> = (0..n).map(|i| i as f64 * apwl_step).collect();
        let sm: Vec<f64> = apwl
            .iter()
            .map(|&a| soil_moisture_mm(max_soil_moisture, a))
            .collect();
        Self::new(apwl, sm)
    }

    pub fn len(&self) -> usize {
        self.apwl_mm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apwl_mm.is_empty()
    }

    /// Soil moisture of the row whose APWL is nearest the query.
    pub fn soil_moisture_at(&self, apwl: f64) -> f64 {
        self.soil_moisture_mm[nearest_index(&self.apwl_mm, apwl)]
    }

    /// APWL of the row whose soil moisture is nearest the query.
    pub fn apwl_at(&self, soil_moisture: f64) -> f64 {
        self.apwl_mm[nearest_index(&self.soil_moisture_mm, soil_moisture)]
    }
}

/// Index of the first row minimizing absolute difference to `target`.
///
/// Ties resolve to the earliest row, keeping lookups deterministic.
fn nearest_index(column: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_diff = (column[0] - target).abs();
    for (i, v) in column.iter().enumerate().skip(1) {
        let diff = (v - target).abs();
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curve_full_reservoir_at_zero_apwl() {
        assert_relative_eq!(soil_moisture_mm(300.0, 0.0), 300.0);
    }

    #[test]
    fn curve_decreases_with_apwl() {
        let s0 = soil_moisture_mm(300.0, 10.0);
        let s1 = soil_moisture_mm(300.0, 50.0);
        let s2 = soil_moisture_mm(300.0, 200.0);
        assert!(s0 > s1 && s1 > s2);
        assert!(s2 > 0.0);
    }

    #[test]
    fn curve_zero_reservoir() {
        assert_eq!(soil_moisture_mm(0.0, 50.0), 0.0);
        assert_eq!(accumulated_potential_water_loss_mm(0.0, 50.0), 0.0);
    }

    #[test]
    fn forward_inverse_roundtrip() {
        for apwl in [0.0, 5.0, 25.0, 80.0, 150.0, 280.0] {
            let sm = soil_moisture_mm(300.0, apwl);
            let back = accumulated_potential_water_loss_mm(300.0, sm);
            assert_relative_eq!(back, apwl, epsilon = 1e-9);
        }
    }

    #[test]
    fn table_rejects_length_mismatch() {
        let r = RetentionTable::new(vec![0.0, 1.0], vec![300.0]);
        assert!(r.is_err());
    }

    #[test]
    fn table_rejects_non_monotonic_apwl() {
        let r = RetentionTable::new(vec![0.0, 2.0, 1.0], vec![300.0, 290.0, 280.0]);
        assert!(r.is_err());
    }

    #[test]
    fn table_rejects_increasing_moisture() {
        let r = RetentionTable::new(vec![0.0, 1.0, 2.0], vec![300.0, 310.0, 280.0]);
        assert!(r.is_err());
    }

    #[test]
    fn nearest_lookup_both_directions() {
        let t = RetentionTable::new(
            vec![0.0, 10.0, 20.0, 30.0],
            vec![300.0, 280.0, 262.0, 245.0],
        )
        .unwrap();
        assert_eq!(t.soil_moisture_at(9.0), 280.0);
        assert_eq!(t.soil_moisture_at(24.0), 262.0);
        assert_eq!(t.apwl_at(279.0), 10.0);
        assert_eq!(t.apwl_at(300.0), 0.0);
    }

    #[test]
    fn nearest_tie_takes_first_row() {
        // 15.0 is equidistant from rows at 10 and 20.
        let t = RetentionTable::new(
            vec![0.0, 10.0, 20.0],
            vec![300.0, 280.0, 262.0],
        )
        .unwrap();
        assert_eq!(t.soil_moisture_at(15.0), 280.0);
    }

    #[test]
    fn sampled_table_tracks_curve_within_resolution() {
        let t = RetentionTable::from_curve_fit(300.0, 400.0, 1.0).unwrap();
        for apwl in [0.0, 13.0, 77.0, 201.0] {
            let from_table = t.soil_moisture_at(apwl);
            let from_curve = soil_moisture_mm(300.0, apwl);
            assert!((from_table - from_curve).abs() < 1.0);
        }
    }

    #[test]
    fn table_idempotence_within_resolution() {
        let t = RetentionTable::from_curve_fit(300.0, 400.0, 1.0).unwrap();
        for apwl in [0.0, 10.0, 40.0, 120.0] {
            let sm = t.soil_moisture_at(apwl);
            let back = t.apwl_at(sm);
            assert!((back - apwl).abs() <= 1.0);
        }
    }
}
