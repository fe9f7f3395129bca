/// Cell state carried between days.
use crate::depletion::fao56::Fao56State;
use crate::error::{SwbError, SwbResult};

use super::params::CellParameters;

#[derive(Debug, Clone)]
pub struct CellState {
    /// Root-zone reservoir capacity [mm].
    pub soil_storage_max: f64,
    /// Current root-zone storage [mm].
    pub soil_storage: f64,
    /// Snowpack water equivalent [mm].
    pub snow_storage: f64,
    /// Accumulated potential water loss [mm]; meaningful for the
    /// retention-curve variants, zero otherwise.
    pub apwl: f64,
    /// Growing-degree-day accumulator, reset each January 1 [deg C day].
    pub gdd: f64,
    pub fao56: Fao56State,
}

impl CellState {
    /// Initial state from the cell configuration.
    ///
    /// The exponential decay divides by the reservoir capacity, so a
    /// non-positive capacity is rejected here rather than left to produce
    /// NaN mid-run.
    pub fn initialize(params: &CellParameters) -> SwbResult<Self> {
        let soil_storage_max = params.soil_storage_max();
        if soil_storage_max <= 0.0 || !soil_storage_max.is_finite() {
            return Err(SwbError::NonPositiveStorageMax(soil_storage_max));
        }
        let storage_fraction = params.initial_storage_percent / 100.0;
        let fao56 = match &params.crop {
            Some(crop) => Fao56State::initialize(crop, storage_fraction),
            None => Fao56State::default(),
        };
        Ok(Self {
            soil_storage_max,
            soil_storage: soil_storage_max * storage_fraction,
            snow_storage: 0.0,
            apwl: 0.0,
            gdd: 0.0,
            fao56,
        })
    }
}
