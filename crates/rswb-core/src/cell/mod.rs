/// Daily soil-water-balance cell.
///
/// One cell couples precipitation partitioning, a degree-day snowpack,
/// reference ET, and a configurable depletion model into a single daily
/// state transition, then closes the day with the mass-balance identity and
/// the infiltration-excess clamp.
pub mod constants;
pub mod fluxes;
pub mod params;
pub mod processes;
pub mod run;
pub mod state;

pub use fluxes::{DailyFluxes, DailyFluxesTimeseries};
pub use params::CellParameters;
pub use run::WaterBalanceCell;
pub use state::CellState;
