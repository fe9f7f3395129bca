/// Pure Rust core benchmarks for the four depletion variants.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rswb_core::cell::{CellParameters, WaterBalanceCell};
use rswb_core::crop::kcb::{KcbCurve, StageDriver};
use rswb_core::depletion::fao56::CropParameters;
use rswb_core::depletion::CalculationMethod;
use rswb_core::et::HargreavesSamani;
use rswb_core::forcing::ClimateSeries;
use rswb_core::retention::RetentionTable;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic data generation.
fn make_series(n: usize, seed: u64) -> ClimateSeries {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let mut date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let mut dates = Vec::with_capacity(n);
    let mut tmin_c = Vec::with_capacity(n);
    let mut tmax_c = Vec::with_capacity(n);
    let mut tmean_c = Vec::with_capacity(n);
    let mut precip = Vec::with_capacity(n);
    for _ in 0..n {
        let tmin = -10.0 + next_f64() * 20.0;
        let tmax = tmin + 2.0 + next_f64() * 12.0;
        dates.push(date);
        tmin_c.push(tmin);
        tmax_c.push(tmax);
        tmean_c.push((tmin + tmax) / 2.0);
        precip.push(next_f64() * 10.0);
        date = date.succ_opt().unwrap();
    }
    ClimateSeries::new(dates, tmin_c, tmax_c, tmean_c, precip).unwrap()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn crop() -> CropParameters {
    CropParameters {
        kcb: KcbCurve {
            kcb_min: 0.15,
            kcb_ini: 0.3,
            kcb_mid: 1.15,
            kcb_end: 0.4,
            stages: StageDriver::GrowingDegreeDays {
                gdd_plant: 50.0,
                gdd_ini: 200.0,
                gdd_dev: 500.0,
                gdd_mid: 900.0,
                gdd_late: 1200.0,
                gdd_fallow: 1400.0,
            },
        },
        mean_plant_height_m: 1.2,
        depletion_fraction: 0.5,
        readily_evaporable_water_mm: 8.0,
        total_evaporable_water_mm: 20.0,
        min_covered_soil_fraction: 0.05,
        wind_speed_m_s: 2.0,
        rh_min_pct: 45.0,
    }
}

fn params(method: CalculationMethod) -> CellParameters {
    let retention_table = match method {
        CalculationMethod::Table => {
            Some(Arc::new(RetentionTable::from_curve_fit(300.0, 500.0, 0.25).unwrap()))
        }
        _ => None,
    };
    let crop = match method {
        CalculationMethod::Fao56TwoStage => Some(crop()),
        _ => None,
    };
    CellParameters {
        latitude: 47.0,
        available_water_capacity: 150.0,
        rooting_depth: 1.0,
        calculation_method: method,
        initial_storage_percent: 100.0,
        retention_table,
        crop,
    }
}

fn bench_method(
    label: &'static str,
    method: CalculationMethod,
    sizes: &[usize],
) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let series = make_series(n, 42);

        // Warmup
        let mut cell = WaterBalanceCell::new(params(method), HargreavesSamani).unwrap();
        cell.run(&series);
        black_box(cell.records().len());

        let dur = median_time(|| {
            let mut cell =
                WaterBalanceCell::new(params(method), HargreavesSamani).unwrap();
            cell.run(&series);
            black_box(cell.records().len());
        });
        results.push((label, n, dur));
    }
    results
}

fn main() {
    println!("Soil-Water-Balance Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Method", "N", "Median (ms)");
    println!("--------------------------------------------");

    let sizes = [366, 3660, 36600];
    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();
    all_results.extend(bench_method("exponential", CalculationMethod::Exponential, &sizes));
    all_results.extend(bench_method("closed-form", CalculationMethod::ClosedForm, &sizes));
    all_results.extend(bench_method("table", CalculationMethod::Table, &sizes));
    all_results.extend(bench_method(
        "fao56-two-stage",
        CalculationMethod::Fao56TwoStage,
        &sizes,
    ));

    for (label, n, dur) in all_results {
        println!("{:<18} {:>6}   {:>9.3} ms", label, n, dur.as_secs_f64() * 1e3);
    }
}
