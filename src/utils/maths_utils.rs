use argminmax::ArgMinMax;

/// Largest value in `vec`, or `None` if it is empty.
pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

/// Smallest value in `vec`, or `None` if it is empty.
pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

/// Trailing simple moving average.
/// Output has the same length as `values`; position `i` is `None` until `window` values exist.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for (offset, chunk) in values.windows(window).enumerate() {
        out[offset + window - 1] = Some(chunk.iter().sum::<f64>() / window as f64);
    }
    out
}

/// Centered rolling aggregate. `window` should be odd; position `i` covers
/// `[i - window/2, i + window/2]` and is `None` unless both bounds exist.
fn centered_rolling(
    values: &[f64],
    window: usize,
    aggregate: impl Fn(&[f64]) -> Option<f64>,
) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    let half = window / 2;
    for (offset, chunk) in values.windows(window).enumerate() {
        out[offset + half] = aggregate(chunk);
    }
    out
}

pub fn centered_rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    centered_rolling(values, window, get_max)
}

pub fn centered_rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    centered_rolling(values, window, get_min)
}
