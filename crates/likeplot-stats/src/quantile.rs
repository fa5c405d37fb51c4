//! Sample quantiles.

/// Computes a single quantile from sorted data.
///
/// This function uses linear interpolation between closest ranks (the "R-7"
/// estimator, also the default of most spreadsheet and plotting tools).
/// For `n` values and probability `p`, the rank is `h = p * (n - 1)`:
/// an integral `h` returns that element, otherwise the result interpolates
/// between `floor(h)` and `ceil(h)` by the fractional part of `h`.
///
/// `p` is clamped to `[0, 1]`.
///
/// # Returns
///
/// The value at the specified quantile. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use likeplot_stats::quantile::quantile_sorted;
///
/// let values = [10.0, 20.0, 30.0];
/// assert_eq!(quantile_sorted(&values, 0.25), 15.0);
/// assert_eq!(quantile_sorted(&values, 0.5), 20.0);
/// assert!(quantile_sorted(&[], 0.5).is_nan());
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> f64 {
    let Some(&first) = sorted_values.first() else {
        return f64::NAN;
    };
    let last_index = sorted_values.len() - 1;
    let p = p.clamp(0.0, 1.0);
    if p <= 0.0 || last_index == 0 {
        return first;
    }
    if p >= 1.0 {
        return sorted_values[last_index];
    }

    let h = p * last_index as f64;
    let lo = h.floor() as usize;
    let frac = h - h.floor();
    let lower = sorted_values[lo];
    let upper = sorted_values[(lo + 1).min(last_index)];
    lower + (upper - lower) * frac
}
