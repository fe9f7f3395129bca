/// FAO-56 process functions.
///
/// Pure functions implementing the individual equations of the
/// dual-coefficient method. Equation numbers refer to Allen and others
/// (1998), FAO Irrigation and Drainage Paper 56.
use super::constants::{
    FEW_MIN, INTERP_EPS, KC_MAX_KCB_OFFSET, PLANT_HEIGHT_MIN_M, P_ADJ_PER_MM, P_ADJ_PIVOT_ET_MM,
    RH_MIN_RANGE_PCT, U2_RANGE_M_S,
};

/// Adjust the tabulated depletion fraction for the day's evaporative demand
/// (footnote 2, Table 22): high demand tolerates less depletion before
/// stress onset.
pub fn adjust_depletion_fraction_p(depletion_fraction: f64, reference_et_mm: f64) -> f64 {
    depletion_fraction + P_ADJ_PER_MM * (P_ADJ_PIVOT_ET_MM - reference_et_mm)
}

/// Total and readily available water in the root zone.
///
/// Returns `(taw, raw)` in the depth unit of `available_water_capacity`.
pub fn available_water(
    adjusted_depletion_fraction_p: f64,
    current_rooting_depth: f64,
    available_water_capacity: f64,
) -> (f64, f64) {
    let taw = current_rooting_depth * available_water_capacity;
    let raw = adjusted_depletion_fraction_p * taw;
    (taw, raw)
}

/// Three-branch stress rule shared by Kr and Ks: full availability below
/// the readily threshold, linear decline between the thresholds, zero at
/// full depletion. The epsilon guards readily == total.
fn stress_coefficient(total: f64, readily: f64, deficit: f64) -> f64 {
    if deficit <= readily {
        1.0
    } else if deficit < total {
        (total - deficit) / (total - readily + INTERP_EPS)
    } else {
        0.0
    }
}

/// Evaporation reduction coefficient Kr (eq. 74).
pub fn evaporation_reduction_coefficient_kr(
    total_evaporable_water_tew: f64,
    readily_evaporable_water_rew: f64,
    evaporable_water_deficit: f64,
) -> f64 {
    stress_coefficient(
        total_evaporable_water_tew,
        readily_evaporable_water_rew,
        evaporable_water_deficit,
    )
}

/// Water stress coefficient Ks (eq. 84).
pub fn water_stress_coefficient_ks(
    total_available_water_taw: f64,
    readily_available_water_raw: f64,
    soil_moisture_deficit: f64,
) -> f64 {
    stress_coefficient(
        total_available_water_taw,
        readily_available_water_raw,
        soil_moisture_deficit,
    )
}

/// Refill the surface evaporable-water reservoir with today's infiltration.
///
/// Returns `(storage, deficit)`; the storage is clamped to `[0, tew]`.
pub fn update_evaporable_water(
    evaporable_water_storage: f64,
    infiltration: f64,
    total_evaporable_water_tew: f64,
) -> (f64, f64) {
    let storage =
        (evaporable_water_storage + infiltration).clamp(0.0, total_evaporable_water_tew);
    let deficit = (total_evaporable_water_tew - storage).max(0.0);
    (storage, deficit)
}

/// Estimate plant height from the Kcb curve position, used as a proxy for
/// canopy development. Scales between 0.1 m and the mean mature height.
pub fn plant_height(kcb_min: f64, kcb_mid: f64, kcb: f64, mean_plant_height_m: f64) -> f64 {
    if kcb > kcb_min {
        let frac = (kcb - kcb_min) / (kcb_mid - kcb_min);
        (frac * mean_plant_height_m).clamp(PLANT_HEIGHT_MIN_M, mean_plant_height_m)
    } else {
        PLANT_HEIGHT_MIN_M
    }
}

/// Fraction of soil both exposed and wetted (eq. 76), from covered-soil
/// fraction estimated off the Kcb curve position.
pub fn exposed_wetted_soil_fraction_few(
    kcb_min: f64,
    kcb_mid: f64,
    kcb: f64,
    current_plant_height_m: f64,
    min_covered_soil_fraction: f64,
) -> f64 {
    let numerator = (kcb - kcb_min).max(0.0);
    let denominator = kcb_mid - kcb_min;
    let exponent = 1.0 + 0.5 * current_plant_height_m;

    let fc = if denominator > 0.0 {
        (numerator / denominator).powf(exponent)
    } else {
        1.0
    };
    let fc = fc.max(min_covered_soil_fraction);
    (1.0 - fc).clamp(FEW_MIN, 1.0)
}

/// Upper bound Kc_max on any crop coefficient (eq. 72).
///
/// Wind speed and minimum relative humidity are clamped to the published
/// valid ranges before use; inputs outside those ranges are recovered, not
/// rejected.
pub fn kc_max(
    wind_speed_m_s: f64,
    rh_min_pct: f64,
    kcb: f64,
    plant_height_m: f64,
) -> f64 {
    let u2 = wind_speed_m_s.clamp(U2_RANGE_M_S.0, U2_RANGE_M_S.1);
    let rh_min = rh_min_pct.clamp(RH_MIN_RANGE_PCT.0, RH_MIN_RANGE_PCT.1);

    let climatic = 1.2
        + (0.04 * (u2 - 2.0) - 0.004 * (rh_min - 45.0)) * (plant_height_m / 3.0).powf(0.3);
    climatic.max(kcb + KC_MAX_KCB_OFFSET)
}

/// Surface evaporation coefficient Ke (eq. 71), limited by the energy
/// available at the exposed fraction.
pub fn surface_evaporation_coefficient_ke(
    kc_max: f64,
    kcb: f64,
    evaporation_reduction_coefficient_kr: f64,
    fraction_exposed_and_wetted_few: f64,
) -> f64 {
    let ceiling = fraction_exposed_and_wetted_few * kc_max;
    (evaporation_reduction_coefficient_kr * (kc_max - kcb)).min(ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- adjust_depletion_fraction_p --

    #[test]
    fn p_unchanged_at_pivot_demand() {
        assert_relative_eq!(adjust_depletion_fraction_p(0.5, 5.0), 0.5);
    }

    #[test]
    fn p_shrinks_under_high_demand() {
        assert_relative_eq!(adjust_depletion_fraction_p(0.5, 10.0), 0.3);
    }

    #[test]
    fn p_grows_under_low_demand() {
        assert_relative_eq!(adjust_depletion_fraction_p(0.5, 1.0), 0.66);
    }

    // -- available_water --

    #[test]
    fn taw_and_raw_from_rooting_depth() {
        let (taw, raw) = available_water(0.5, 1.0, 150.0);
        assert_relative_eq!(taw, 150.0);
        assert_relative_eq!(raw, 75.0);
    }

    // -- stress coefficients --

    #[test]
    fn ks_full_availability() {
        assert_eq!(water_stress_coefficient_ks(100.0, 50.0, 30.0), 1.0);
        assert_eq!(water_stress_coefficient_ks(100.0, 50.0, 50.0), 1.0);
    }

    #[test]
    fn ks_linear_between_thresholds() {
        let ks = water_stress_coefficient_ks(100.0, 50.0, 75.0);
        assert_relative_eq!(ks, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn ks_zero_at_full_depletion() {
        assert_eq!(water_stress_coefficient_ks(100.0, 50.0, 100.0), 0.0);
        assert_eq!(water_stress_coefficient_ks(100.0, 50.0, 500.0), 0.0);
    }

    #[test]
    fn ks_bounded_for_degenerate_thresholds() {
        // readily == total: the epsilon guard keeps the value finite and in [0, 1]
        let ks = water_stress_coefficient_ks(50.0, 50.0, 49.999999);
        assert!((0.0..=1.0).contains(&ks));
    }

    #[test]
    fn kr_mirrors_three_branch_rule() {
        assert_eq!(evaporation_reduction_coefficient_kr(20.0, 8.0, 4.0), 1.0);
        let kr = evaporation_reduction_coefficient_kr(20.0, 8.0, 14.0);
        assert_relative_eq!(kr, 0.5, epsilon = 1e-6);
        assert_eq!(evaporation_reduction_coefficient_kr(20.0, 8.0, 25.0), 0.0);
    }

    #[test]
    fn stress_coefficients_stay_in_unit_interval() {
        for deficit in [0.0, 5.0, 8.0, 12.0, 19.9, 20.0, 30.0] {
            let kr = evaporation_reduction_coefficient_kr(20.0, 8.0, deficit);
            assert!((0.0..=1.0).contains(&kr), "kr({}) = {}", deficit, kr);
        }
    }

    // -- update_evaporable_water --

    #[test]
    fn evaporable_storage_clamped_to_tew() {
        let (storage, deficit) = update_evaporable_water(18.0, 10.0, 20.0);
        assert_eq!(storage, 20.0);
        assert_eq!(deficit, 0.0);
    }

    #[test]
    fn evaporable_deficit_complements_storage() {
        let (storage, deficit) = update_evaporable_water(5.0, 3.0, 20.0);
        assert_relative_eq!(storage, 8.0);
        assert_relative_eq!(deficit, 12.0);
    }

    // -- plant_height --

    #[test]
    fn plant_height_floors_at_minimum() {
        assert_eq!(plant_height(0.15, 1.15, 0.15, 2.0), PLANT_HEIGHT_MIN_M);
        assert_eq!(plant_height(0.15, 1.15, 0.1, 2.0), PLANT_HEIGHT_MIN_M);
    }

    #[test]
    fn plant_height_scales_with_curve_position() {
        let h = plant_height(0.15, 1.15, 0.65, 2.0);
        assert_relative_eq!(h, 1.0, epsilon = 1e-9);
        assert_eq!(plant_height(0.15, 1.15, 1.15, 2.0), 2.0);
    }

    // -- exposed_wetted_soil_fraction_few --

    #[test]
    fn bare_soil_is_fully_exposed() {
        let few = exposed_wetted_soil_fraction_few(0.15, 1.15, 0.15, 0.1, 0.0);
        assert_relative_eq!(few, 1.0);
    }

    #[test]
    fn full_canopy_leaves_minimum_exposure() {
        let few = exposed_wetted_soil_fraction_few(0.15, 1.15, 1.15, 2.0, 0.05);
        assert_relative_eq!(few, FEW_MIN);
    }

    #[test]
    fn degenerate_curve_treated_as_covered() {
        // kcb_mid == kcb_min: covered fraction defaults to 1
        let few = exposed_wetted_soil_fraction_few(0.5, 0.5, 0.5, 1.0, 0.05);
        assert_relative_eq!(few, FEW_MIN);
    }

    // -- kc_max --

    #[test]
    fn kc_max_reference_conditions() {
        // u2 = 2 m/s, rh_min = 45%: climatic term is exactly 1.2
        let k = kc_max(2.0, 45.0, 0.9, 3.0);
        assert_relative_eq!(k, 1.2);
    }

    #[test]
    fn kc_max_clamps_out_of_range_climate() {
        // wind 50 m/s clamps to 6, rh 5% clamps to 20
        let extreme = kc_max(50.0, 5.0, 0.9, 3.0);
        let edge = kc_max(6.0, 20.0, 0.9, 3.0);
        assert_relative_eq!(extreme, edge);
    }

    #[test]
    fn kc_max_never_below_kcb_offset() {
        let k = kc_max(2.0, 45.0, 1.3, 3.0);
        assert_relative_eq!(k, 1.35);
    }

    // -- surface_evaporation_coefficient_ke --

    #[test]
    fn ke_limited_by_exposed_fraction() {
        let ke = surface_evaporation_coefficient_ke(1.2, 0.3, 1.0, 0.1);
        assert_relative_eq!(ke, 0.12); // few * kc_max binds
    }

    #[test]
    fn ke_limited_by_reduction_coefficient() {
        let ke = surface_evaporation_coefficient_ke(1.2, 0.9, 0.5, 1.0);
        assert_relative_eq!(ke, 0.15); // kr * (kc_max - kcb) binds
    }

    #[test]
    fn ke_zero_when_surface_dry() {
        let ke = surface_evaporation_coefficient_ke(1.2, 0.3, 0.0, 0.8);
        assert_eq!(ke, 0.0);
    }
}
