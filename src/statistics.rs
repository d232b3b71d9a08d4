//! Statistical combination helpers for count series.
//!
//! All routines operate on plain `f64` slices and return `Option` for the empty case;
//! the photometric interpretation (undefined magnitudes and their propagation) lives in
//! [`crate::photometry`].

use crate::constants::Counts;

/// Arithmetic mean of a series, `None` if the series is empty.
pub fn mean(values: &[Counts]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Mean and **population** standard deviation of a series, `None` if the series is empty.
pub fn mean_and_std_dev(values: &[Counts]) -> Option<(f64, f64)> {
    let m = mean(values)?;
    let dev = values.iter().fold(0_f64, |acc, v| acc + (v - m) * (v - m));
    let std_dev = f64::sqrt(dev / values.len() as f64);
    Some((m, std_dev))
}

/// Retain the values lying within `factor` population standard deviations of the mean.
///
/// The bound is **strictly** `|x − mean| < factor·σ`. With σ = 0 every value is at the
/// mean and the strict bound excludes all of them, so the returned series is empty;
/// callers fall back to the unfiltered mean in that case (see
/// [`calculate_magnitude`](crate::photometry::calculate_magnitude)).
///
/// Arguments
/// ---------
/// * `values`: the series to clip
/// * `factor`: the clip width in standard deviations
///
/// Return
/// ------
/// * the retained values, in input order; empty when the input is empty or fully clipped
pub fn sigma_clip(values: &[Counts], factor: f64) -> Vec<Counts> {
    let Some((m, std_dev)) = mean_and_std_dev(values) else {
        return Vec::new();
    };
    values
        .iter()
        .copied()
        .filter(|x| (x - m).abs() < factor * std_dev)
        .collect()
}
