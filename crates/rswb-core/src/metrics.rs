//! Smoothing helpers for output series.

/// One update of an exponential moving average with the conventional
/// smoothing factor `k = 2 / (window + 1)`.
pub fn update_moving_average(current_average: f64, value: f64, window: usize) -> f64 {
    let k = 2.0 / (window as f64 + 1.0);
    value * k + current_average * (1.0 - k)
}

/// Exponential moving average of a whole series, seeded with the first
/// value. Returns an empty vector for an empty input.
pub fn smooth(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut average = match values.first() {
        Some(first) => *first,
        None => return out,
    };
    out.push(average);
    for value in &values[1..] {
        average = update_moving_average(average, *value, window);
        out.push(average);
    }
    out
}
