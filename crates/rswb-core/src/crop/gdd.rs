/// Growing-degree-day accumulation.
///
/// Daily increment from clamped min/max temperatures; the running
/// accumulator lives in the cell state and resets every January 1.

/// Base temperature below which no growth accrues [C].
pub const GDD_BASE_C: f64 = 10.0;

/// Upper temperature cap for growth accrual [C].
pub const GDD_CAP_C: f64 = 30.0;

/// Daily growing-degree-day increment.
///
/// Tmin is raised to the base and Tmax lowered to the cap before averaging;
/// the increment is the excess of that mean over the base, floored at zero.
pub fn gdd_increment(tmin_c: f64, tmax_c: f64, base_c: f64, cap_c: f64) -> f64 {
    let tmin = tmin_c.max(base_c);
    let tmax = tmax_c.min(cap_c);
    let tmean = (tmin + tmax) / 2.0;
    if tmean > base_c {
        tmean - base_c
    } else {
        0.0
    }
}
