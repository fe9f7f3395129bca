//! Constants for the daily cell water balance.

/// Freezing point on the Fahrenheit scale used by the phase-partition
/// threshold [deg F].
pub const FREEZING_PT_DEG_F: f64 = 32.0;

/// Degree-day melt index applied to the daily maximum temperature
/// [mm / deg C].
pub const MELT_INDEX_MM_PER_DEG_C: f64 = 1.5;

/// Soil storage starts at this share of capacity when unspecified [%].
pub const DEFAULT_INITIAL_STORAGE_PERCENT: f64 = 100.0;

/// Gap between the identity-derived storage and a model-internal storage
/// above which the day is logged as a data-quality signal [mm].
pub const STORAGE_RECONCILIATION_TOL_MM: f64 = 1.0e-6;
