/// Daily output record for one cell.
///
/// The derive generates `DailyFluxesTimeseries`, a columnar accumulator
/// with one `Vec<f64>` per field plus the date column, and the delimited
/// export used to dump a run.
use rswb_macros::Fluxes;

#[derive(Debug, Clone, Copy, Fluxes)]
#[fluxes(timeseries_name = "DailyFluxesTimeseries")]
pub struct DailyFluxes {
    /// Soil storage at the start of the day [mm].
    pub previous_storage: f64,
    /// Soil storage at the end of the day, after the capacity clamp [mm].
    pub storage: f64,
    pub rainfall: f64,
    pub snow_storage: f64,
    pub snowfall: f64,
    pub snowmelt: f64,
    pub potential_snowmelt: f64,
    pub pet: f64,
    pub p_minus_pet: f64,
    pub actual_et: f64,
    /// Water pushed below the root zone by the capacity clamp [mm].
    pub net_infiltration: f64,
    pub apwl: f64,
    pub gdd: f64,
}
