use rswb_macros::Fluxes;

#[derive(Debug, Clone, Copy, Fluxes)]
pub struct TestFluxes {
    pub pet: f64,
    pub rainfall: f64,
    pub net_infiltration: f64,
}

fn main() {
    let d = chrono::NaiveDate::from_ymd_opt(2001, 6, 15).unwrap();
    let f = TestFluxes { pet: 1.0, rainfall: 2.0, net_infiltration: 3.0 };
    let mut ts = TestFluxesTimeseries::with_capacity(10);
    ts.push(d, &f);
    assert_eq!(ts.len(), 1);
    assert!(!ts.is_empty());
    assert_eq!(TestFluxes::field_names(), &["pet", "rainfall", "net_infiltration"]);
    assert_eq!(
        TestFluxesTimeseries::column_names(),
        &["date", "pet", "rainfall", "net_infiltration"]
    );
    let table = ts.to_delimited(',');
    assert!(table.starts_with("date,pet,rainfall,net_infiltration\n"));
    assert!(table.contains("2001-06-15,1,2,3"));
}
