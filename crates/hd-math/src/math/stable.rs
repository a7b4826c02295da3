//! Compensated summation.
//!
//! Accumulated posterior mass is a sum of many small products. Neumaier's
//! variant of Kahan summation keeps the running error term bounded even when
//! individual addends dwarf the compensation, so downstream normalization
//! divides by a total that is accurate to the last few ulps.

/// Sum a slice of f64 values with Neumaier compensation.
///
/// Equivalent to naive summation for well-conditioned inputs; substantially
/// more accurate when terms span many orders of magnitude.
pub fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0f64;
    let mut compensation = 0.0f64;
    for &v in values {
        let t = total + v;
        if total.abs() >= v.abs() {
            compensation += (total - t) + v;
        } else {
            compensation += (v - t) + total;
        }
        total = t;
    }
    total + compensation
}
