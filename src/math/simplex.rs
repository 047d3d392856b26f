//! Simplex helpers.
//!
//! Validation never normalizes; normalization is only done by functions that
//! say so in their name.

use crate::error::{TransformError, TransformResult};

/// Default tolerance for sum-to-one checks.
pub const SIMPLEX_TOL: f64 = 1e-10;

/// Check whether `p` lies on the probability simplex (within `tol`).
pub fn validate_simplex(p: &[f64], tol: f64) -> TransformResult<()> {
    if p.is_empty() {
        return Err(TransformError::EmptyInput { what: "simplex" });
    }
    if !(tol >= 0.0 && tol.is_finite()) {
        return Err(TransformError::domain("tolerance", "must be finite and >= 0"));
    }
    if let Some(index) = p.iter().position(|x| !x.is_finite()) {
        return Err(TransformError::NonFinite {
            what: "simplex",
            index,
            value: p[index],
        });
    }
    if let Some(index) = p.iter().position(|&x| x < -tol) {
        return Err(TransformError::domain(
            "simplex",
            format!("entry {index} is negative ({})", p[index]),
        ));
    }
    let sum: f64 = p.iter().sum();
    if (sum - 1.0).abs() > tol {
        return Err(TransformError::domain(
            "simplex",
            format!("entries sum to {sum}, not 1"),
        ));
    }
    Ok(())
}

/// Divide every element by the total, `x_i / Σx`.
///
/// Fails when the total is zero or not finite, which is exactly where a plain
/// division would start producing NaN or infinities.
pub fn normalize_by_sum(what: &'static str, values: &[f64]) -> TransformResult<Vec<f64>> {
    let total: f64 = values.iter().sum();
    if !total.is_finite() {
        return Err(TransformError::domain(what, format!("total is not finite ({total})")));
    }
    if total == 0.0 {
        return Err(TransformError::domain(what, "total is zero, cannot normalize"));
    }
    Ok(values.iter().map(|v| v / total).collect())
}
