/// Cell configuration.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cell::constants::DEFAULT_INITIAL_STORAGE_PERCENT;
use crate::depletion::fao56::CropParameters;
use crate::depletion::CalculationMethod;
use crate::error::{SwbError, SwbResult};
use crate::retention::RetentionTable;

fn default_initial_storage_percent() -> f64 {
    DEFAULT_INITIAL_STORAGE_PERCENT
}

/// Static inputs for one cell. `validate()` enforces the cross-field
/// requirements the individual types cannot express: the table method needs
/// a retention table, the FAO-56 method needs crop parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellParameters {
    /// Latitude used by the reference-ET solar geometry [deg].
    pub latitude: f64,
    /// Available water capacity of the soil column [mm/m].
    pub available_water_capacity: f64,
    /// Effective rooting depth [m].
    pub rooting_depth: f64,
    pub calculation_method: CalculationMethod,
    /// Share of capacity the soil storage starts at [%].
    #[serde(default = "default_initial_storage_percent")]
    pub initial_storage_percent: f64,
    /// Required when `calculation_method` is `Table`.
    #[serde(skip)]
    pub retention_table: Option<Arc<RetentionTable>>,
    /// Required when `calculation_method` is `Fao56TwoStage`.
    pub crop: Option<CropParameters>,
}

impl CellParameters {
    pub fn validate(&self) -> SwbResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SwbError::InvalidParameter(format!(
                "latitude must be in [-90, 90], got {}",
                self.latitude
            )));
        }
        if self.available_water_capacity <= 0.0 || !self.available_water_capacity.is_finite() {
            return Err(SwbError::InvalidParameter(format!(
                "available_water_capacity must be positive, got {}",
                self.available_water_capacity
            )));
        }
        if self.rooting_depth <= 0.0 || !self.rooting_depth.is_finite() {
            return Err(SwbError::InvalidParameter(format!(
                "rooting_depth must be positive, got {}",
                self.rooting_depth
            )));
        }
        if !(0.0..=100.0).contains(&self.initial_storage_percent) {
            return Err(SwbError::InvalidParameter(format!(
                "initial_storage_percent must be in [0, 100], got {}",
                self.initial_storage_percent
            )));
        }
        match self.calculation_method {
            CalculationMethod::Table if self.retention_table.is_none() => {
                return Err(SwbError::MissingRetentionTable);
            }
            CalculationMethod::Fao56TwoStage => match &self.crop {
                None => return Err(SwbError::MissingCropParameters),
                Some(crop) => crop.validate()?,
            },
            _ => {}
        }
        Ok(())
    }

    /// Capacity of the root-zone reservoir [mm].
    pub fn soil_storage_max(&self) -> f64 {
        self.rooting_depth * self.available_water_capacity
    }
}
