//! Daily soil-water-balance model.
//!
//! Each cell advances one day at a time: gross precipitation is split into
//! rain and snow, the snowpack accumulates and melts on a degree-day index,
//! reference ET is supplied by a pluggable collaborator, and one of four
//! interchangeable depletion models converts the day's supply and demand
//! into actual ET. The controller closes the daily mass balance, clamps
//! storage to capacity, and records the day's fluxes.

pub mod calendar;
pub mod cell;
pub mod crop;
pub mod depletion;
pub mod error;
pub mod et;
pub mod forcing;
pub mod metrics;
pub mod retention;

pub use cell::{CellParameters, CellState, DailyFluxes, DailyFluxesTimeseries, WaterBalanceCell};
pub use depletion::CalculationMethod;
pub use error::{SwbError, SwbResult};
pub use et::{ConstantEt, HargreavesSamani, ReferenceEt};
pub use forcing::{ClimateSeries, DailyForcing};
pub use retention::RetentionTable;
