/// Crop growth state: growing-degree-day accumulation and the basal
/// crop-coefficient (Kcb) curve that feeds the FAO-56 two-stage model.
pub mod gdd;
pub mod kcb;
