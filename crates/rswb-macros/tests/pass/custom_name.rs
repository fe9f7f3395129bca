use rswb_macros::Fluxes;

#[derive(Debug, Clone, Copy, Fluxes)]
#[fluxes(timeseries_name = "SnowTable")]
pub struct SnowFluxes {
    pub snowmelt: f64,
    pub snow_storage: f64,
}

fn main() {
    let d = chrono::NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
    let f = SnowFluxes { snowmelt: 1.5, snow_storage: 50.0 };
    let mut ts = SnowTable::with_capacity(5);
    ts.push(d, &f);
    assert_eq!(ts.len(), 1);
    assert_eq!(SnowFluxes::field_names(), &["snowmelt", "snow_storage"]);
}
