use rswb_macros::Fluxes;

#[derive(Debug, Clone, Copy, Fluxes)]
pub struct BadFluxes {
    pub pet: f64,
    pub day_count: u32,
}

fn main() {}
