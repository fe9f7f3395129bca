//! FAO-56 numerical constants and published valid input ranges.

/// Guard added to interpolation denominators so a readily-available
/// threshold equal to the total-available threshold cannot divide by zero.
pub const INTERP_EPS: f64 = 1.0e-8;

/// Sensitivity of the depletion fraction to reference ET [per mm]
/// (footnote 2, Table 22, FAO-56).
pub const P_ADJ_PER_MM: f64 = 0.04;

/// Reference ET at which the tabulated depletion fraction applies [mm].
pub const P_ADJ_PIVOT_ET_MM: f64 = 5.0;

/// Floor on the estimated plant height [m].
pub const PLANT_HEIGHT_MIN_M: f64 = 0.1;

/// Floor on the exposed-and-wetted soil fraction.
pub const FEW_MIN: f64 = 0.05;

/// Valid wind-speed range for the Kc_max adjustment [m/s] (FAO-56 p. 123).
pub const U2_RANGE_M_S: (f64, f64) = (1.0, 6.0);

/// Valid minimum-relative-humidity range for the Kc_max adjustment [%].
pub const RH_MIN_RANGE_PCT: (f64, f64) = (20.0, 80.0);

/// Kc_max never falls below the current Kcb plus this offset (eq. 72).
pub const KC_MAX_KCB_OFFSET: f64 = 0.05;
