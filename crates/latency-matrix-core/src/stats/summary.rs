//! Descriptive statistics helpers (mean, interpolated percentile, rounding).

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile with linear interpolation between closest ranks.
///
/// Sorts a copy, takes `position = pct/100 * (n - 1)` and interpolates between
/// the floor and ceil indices. `pct` is clamped to `0..=100`.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = (pct.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    Some(a + (b - a) * (pos - lo as f64))
}

/// Round to two decimals from the exact binary value, ties to even.
///
/// Scaling by 100 first would add its own rounding error (97.365 is stored as
/// 97.36499.. but `97.365 * 100.0` lands on 9736.5), so this goes through the
/// correctly rounded decimal formatter instead.
pub fn round2(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.2}").parse().unwrap_or(v)
}
