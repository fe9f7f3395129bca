/// Daily water-balance orchestration for one cell.
///
/// - `WaterBalanceCell::new()`: validate configuration, resolve the
///   depletion variant
/// - `step()`: execute a single day in the strict phase order
/// - `run()`: execute over a climate series
use std::sync::Arc;

use chrono::NaiveDate;

use super::constants::STORAGE_RECONCILIATION_TOL_MM;
use super::fluxes::{DailyFluxes, DailyFluxesTimeseries};
use super::params::CellParameters;
use super::processes;
use super::state::CellState;
use crate::calendar::DateMeasures;
use crate::crop::gdd::{gdd_increment, GDD_BASE_C, GDD_CAP_C};
use crate::depletion::fao56::{self, CropParameters};
use crate::depletion::{exponential, thornthwaite, CalculationMethod, DepletionOutcome};
use crate::error::{SwbError, SwbResult};
use crate::et::ReferenceEt;
use crate::forcing::ClimateSeries;
use crate::retention::RetentionTable;

/// Depletion variant resolved at construction, so `step()` never has to
/// re-check that the table or crop parameters exist.
#[derive(Debug, Clone)]
enum DepletionSelector {
    Exponential,
    ClosedForm,
    Table(Arc<RetentionTable>),
    Fao56(Box<CropParameters>),
}

/// One model cell: configuration, reference-ET collaborator, persistent
/// state, and the accumulated daily records.
#[derive(Debug)]
pub struct WaterBalanceCell<E: ReferenceEt> {
    params: CellParameters,
    et: E,
    state: CellState,
    depletion: DepletionSelector,
    records: DailyFluxesTimeseries,
}

impl<E: ReferenceEt> WaterBalanceCell<E> {
    pub fn new(params: CellParameters, et: E) -> SwbResult<Self> {
        params.validate()?;
        let state = CellState::initialize(&params)?;
        let depletion = match params.calculation_method {
            CalculationMethod::Exponential => DepletionSelector::Exponential,
            CalculationMethod::ClosedForm => DepletionSelector::ClosedForm,
            CalculationMethod::Table => {
                // validate() guarantees presence
                let table = params
                    .retention_table
                    .clone()
                    .ok_or(SwbError::MissingRetentionTable)?;
                DepletionSelector::Table(table)
            }
            CalculationMethod::Fao56TwoStage => {
                let crop = params
                    .crop
                    .clone()
                    .ok_or(SwbError::MissingCropParameters)?;
                DepletionSelector::Fao56(Box::new(crop))
            }
        };
        log::debug!(
            "cell initialized: method={}, storage_max={:.1} mm, initial storage={:.1} mm",
            params.calculation_method,
            state.soil_storage_max,
            state.soil_storage
        );
        Ok(Self {
            params,
            et,
            state,
            depletion,
            records: DailyFluxesTimeseries::with_capacity(366),
        })
    }

    /// Execute one day and append its record.
    pub fn step(
        &mut self,
        date: NaiveDate,
        tmin_c: f64,
        tmax_c: f64,
        tmean_c: f64,
        gross_precip: f64,
    ) {
        // 1. Calendar bookkeeping
        let measures = DateMeasures::for_date(date);
        if measures.is_first_of_year() {
            self.state.gdd = 0.0;
        }

        // 2. Precipitation partitioning
        let (rainfall, snowfall) =
            processes::partition_daily_precip(gross_precip, tmin_c, tmax_c, tmean_c);

        // 3. Snowpack
        let potential_melt = processes::potential_snowmelt(tmean_c, tmax_c);
        let (snow_storage, snowmelt) =
            processes::update_snow_storage(self.state.snow_storage, snowfall, potential_melt);
        self.state.snow_storage = snow_storage;

        // 4. Reference ET
        let pet = self.et.reference_et(
            measures.day_of_year,
            measures.days_in_year,
            self.params.latitude,
            tmin_c,
            tmax_c,
            tmean_c,
        );

        // 5. Snapshot prior storage
        let previous_storage = self.state.soil_storage;

        // 6. Growing degree days (the reset day does not accumulate)
        if !measures.is_first_of_year() {
            self.state.gdd += gdd_increment(tmin_c, tmax_c, GDD_BASE_C, GDD_CAP_C);
        }

        // 7. Depletion model
        let outcome = match &self.depletion {
            DepletionSelector::Exponential => {
                let (p_minus_pet, actual_et) = exponential::actual_et(
                    rainfall,
                    snowmelt,
                    pet,
                    previous_storage,
                    self.state.soil_storage_max,
                );
                DepletionOutcome {
                    p_minus_pet,
                    actual_et,
                    apwl: 0.0,
                    model_storage: None,
                }
            }
            DepletionSelector::ClosedForm => {
                let (p_minus_pet, apwl, actual_et, storage) =
                    thornthwaite::actual_et_closed_form(rainfall, snowmelt, pet, previous_storage);
                DepletionOutcome {
                    p_minus_pet,
                    actual_et,
                    apwl,
                    model_storage: Some(storage),
                }
            }
            DepletionSelector::Table(table) => {
                let (p_minus_pet, apwl, actual_et, storage) = thornthwaite::actual_et_table(
                    rainfall,
                    snowmelt,
                    pet,
                    previous_storage,
                    table,
                );
                DepletionOutcome {
                    p_minus_pet,
                    actual_et,
                    apwl,
                    model_storage: Some(storage),
                }
            }
            DepletionSelector::Fao56(crop) => {
                let kcb = crop.kcb.value(date, self.state.gdd);
                let (p_minus_pet, actual_et) = fao56::actual_et(
                    crop,
                    &mut self.state.fao56,
                    kcb,
                    pet,
                    rainfall,
                    snowmelt,
                    previous_storage,
                    self.state.soil_storage_max,
                    self.params.rooting_depth,
                    self.params.available_water_capacity,
                );
                DepletionOutcome {
                    p_minus_pet,
                    actual_et,
                    apwl: 0.0,
                    model_storage: None,
                }
            }
        };

        // 8. Mass-balance closure; the identity-derived storage is
        // authoritative, a diverging model-internal storage is a
        // data-quality signal.
        let balance_storage = previous_storage + rainfall + snowmelt - outcome.actual_et;
        if let Some(model_storage) = outcome.model_storage {
            let gap = (balance_storage - model_storage).abs();
            if gap > STORAGE_RECONCILIATION_TOL_MM {
                log::warn!(
                    "{}: storage mismatch of {:.4} mm between mass balance ({:.4}) and \
                     depletion model ({:.4})",
                    date,
                    gap,
                    balance_storage,
                    model_storage
                );
            }
        }

        // 9. Infiltration excess
        let (soil_storage, net_infiltration) =
            processes::apply_storage_capacity(balance_storage, self.state.soil_storage_max);
        self.state.soil_storage = soil_storage;
        self.state.apwl = outcome.apwl;

        // 10. Record the day
        self.records.push(
            date,
            &DailyFluxes {
                previous_storage,
                storage: soil_storage,
                rainfall,
                snow_storage: self.state.snow_storage,
                snowfall,
                snowmelt,
                potential_snowmelt: potential_melt,
                pet,
                p_minus_pet: outcome.p_minus_pet,
                actual_et: outcome.actual_et,
                net_infiltration,
                apwl: outcome.apwl,
                gdd: self.state.gdd,
            },
        );
    }

    /// `step()` with calendar-component inputs; rejects impossible dates
    /// with a diagnostic instead of panicking.
    pub fn step_ymd(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        tmin_c: f64,
        tmax_c: f64,
        tmean_c: f64,
        gross_precip: f64,
    ) -> SwbResult<()> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(SwbError::InvalidDate { year, month, day })?;
        self.step(date, tmin_c, tmax_c, tmean_c, gross_precip);
        Ok(())
    }

    /// Run every day of a validated climate series.
    pub fn run(&mut self, series: &ClimateSeries) {
        for forcing in series.iter() {
            self.step(
                forcing.date,
                forcing.tmin_c,
                forcing.tmax_c,
                forcing.tmean_c,
                forcing.gross_precip_mm,
            );
        }
    }

    pub fn state(&self) -> &CellState {
        &self.state
    }

    pub fn params(&self) -> &CellParameters {
        &self.params
    }

    pub fn records(&self) -> &DailyFluxesTimeseries {
        &self.records
    }

    pub fn into_records(self) -> DailyFluxesTimeseries {
        self.records
    }
}
