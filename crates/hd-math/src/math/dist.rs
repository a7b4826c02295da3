//! Discrete distribution normalization.
//!
//! These helpers turn unnormalized non-negative masses into probability
//! distributions. They are intended to be used by hd-core inference so that
//! normalization logic is centralized and numerically robust.

use super::stable;

/// Rescale a vector of non-negative masses into a distribution summing to 1.
///
/// Returns `None` when the total mass is zero, negative, or non-finite; the
/// caller decides whether that is a defect or expected.
pub fn normalize(mass: &[f64]) -> Option<Vec<f64>> {
    let total = stable::sum(mass);
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    Some(mass.iter().map(|m| m / total).collect())
}

/// Check that `values` is a probability distribution: every entry
/// non-negative and the total within `tolerance` of 1.
pub fn is_distribution(values: &[f64], tolerance: f64) -> bool {
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return false;
    }
    (stable::sum(values) - 1.0).abs() <= tolerance
}
