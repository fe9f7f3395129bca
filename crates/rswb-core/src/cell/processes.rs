/// Cell process functions.
///
/// - `partition_daily_precip()`: rain/snow split on a Fahrenheit threshold
/// - `potential_snowmelt()`: degree-day melt demand
/// - `update_snow_storage()`: accumulate snowfall, release stock-limited melt
/// - `apply_storage_capacity()`: infiltration-excess clamp on soil storage
use super::constants::{FREEZING_PT_DEG_F, MELT_INDEX_MM_PER_DEG_C};

/// Celsius to Fahrenheit.
pub fn c_to_f(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Split gross precipitation into `(rainfall, snowfall)`.
///
/// All-or-nothing rule: the day is snow when
/// `tmean_f - (tmax_f - tmin_f) / 3 <= 32 degF`, otherwise rain. The
/// diurnal-range correction lets a cold morning freeze a day whose mean sits
/// slightly above freezing.
pub fn partition_daily_precip(
    gross_precip: f64,
    tmin_c: f64,
    tmax_c: f64,
    tmean_c: f64,
) -> (f64, f64) {
    let threshold = c_to_f(tmean_c) - (c_to_f(tmax_c) - c_to_f(tmin_c)) / 3.0;
    if threshold <= FREEZING_PT_DEG_F {
        (0.0, gross_precip)
    } else {
        (gross_precip, 0.0)
    }
}

/// Degree-day melt demand [mm]. Zero on days whose mean stays at or below
/// freezing; otherwise indexed on the daily maximum.
pub fn potential_snowmelt(tmean_c: f64, tmax_c: f64) -> f64 {
    if tmean_c > 0.0 {
        MELT_INDEX_MM_PER_DEG_C * tmax_c
    } else {
        0.0
    }
}

/// Add today's snowfall to the pack, then release melt limited by the stock.
///
/// Returns `(new_snow_storage, realized_melt)`.
pub fn update_snow_storage(
    snow_storage: f64,
    snowfall: f64,
    potential_melt: f64,
) -> (f64, f64) {
    let stocked = snow_storage + snowfall;
    let melt = potential_melt.min(stocked).max(0.0);
    (stocked - melt, melt)
}

/// Clamp soil storage to `[0, soil_storage_max]`; the excess above capacity
/// leaves the cell as net infiltration.
///
/// Returns `(clamped_storage, net_infiltration)`.
pub fn apply_storage_capacity(soil_storage: f64, soil_storage_max: f64) -> (f64, f64) {
    let excess = (soil_storage - soil_storage_max).max(0.0);
    (soil_storage.clamp(0.0, soil_storage_max), excess)
}
