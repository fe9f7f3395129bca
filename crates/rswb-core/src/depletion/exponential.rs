/// Exponential-decay soil-moisture accounting (Alley, 1984).
///
/// On a deficit day, extraction efficiency declines as the reservoir
/// empties: the retained storage decays by `exp(p_minus_pet / storage_max)`
/// and actual ET is the storage drawn down. On a surplus day the full
/// demand is met.

/// Returns `(p_minus_pet, actual_et)`.
///
/// `soil_storage_max` must be positive; the cell rejects a non-positive
/// reservoir at construction so the division here is always defined.
pub fn actual_et(
    rainfall: f64,
    snowmelt: f64,
    pet: f64,
    soil_storage: f64,
    soil_storage_max: f64,
) -> (f64, f64) {
    let p_minus_pet = rainfall + snowmelt - pet;

    if p_minus_pet >= 0.0 {
        (p_minus_pet, pet)
    } else {
        let retained = soil_storage * (p_minus_pet / soil_storage_max).exp();
        (p_minus_pet, soil_storage - retained)
    }
}
