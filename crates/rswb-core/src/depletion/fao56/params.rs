/// FAO-56 crop parameters.
///
/// The Kcb curve describes canopy development; the remaining values
/// parameterize the soil-evaporation layer (REW/TEW), the stress onset
/// (tabulated depletion fraction), and the climate inputs to the Kc_max
/// adjustment.
use serde::{Deserialize, Serialize};

use crate::crop::kcb::KcbCurve;
use crate::error::{SwbError, SwbResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParameters {
    pub kcb: KcbCurve,
    /// Mean mature plant height [m].
    pub mean_plant_height_m: f64,
    /// Tabulated depletion fraction p (Table 22), before ET adjustment.
    pub depletion_fraction: f64,
    /// Readily evaporable water from the surface layer [mm].
    pub readily_evaporable_water_mm: f64,
    /// Total evaporable water from the surface layer [mm].
    pub total_evaporable_water_mm: f64,
    /// Minimum expected fraction of soil covered by canopy.
    pub min_covered_soil_fraction: f64,
    /// Mean wind speed at 2 m used in the Kc_max adjustment [m/s].
    pub wind_speed_m_s: f64,
    /// Mean daily minimum relative humidity for the Kc_max adjustment [%].
    pub rh_min_pct: f64,
}

impl CropParameters {
    pub fn validate(&self) -> SwbResult<()> {
        self.kcb.validate()?;
        if !(self.depletion_fraction > 0.0 && self.depletion_fraction < 1.0) {
            return Err(SwbError::InvalidParameter(format!(
                "depletion_fraction must be in (0, 1), got {}",
                self.depletion_fraction
            )));
        }
        if self.readily_evaporable_water_mm < 0.0 {
            return Err(SwbError::InvalidParameter(format!(
                "readily_evaporable_water_mm must be >= 0, got {}",
                self.readily_evaporable_water_mm
            )));
        }
        if self.total_evaporable_water_mm < self.readily_evaporable_water_mm {
            return Err(SwbError::InvalidParameter(format!(
                "total_evaporable_water_mm ({}) must be >= readily_evaporable_water_mm ({})",
                self.total_evaporable_water_mm, self.readily_evaporable_water_mm
            )));
        }
        if self.mean_plant_height_m <= 0.0 {
            return Err(SwbError::InvalidParameter(format!(
                "mean_plant_height_m must be positive, got {}",
                self.mean_plant_height_m
            )));
        }
        if !(0.0..=1.0).contains(&self.min_covered_soil_fraction) {
            return Err(SwbError::InvalidParameter(format!(
                "min_covered_soil_fraction must be in [0, 1], got {}",
                self.min_covered_soil_fraction
            )));
        }
        Ok(())
    }
}
