//! Input guards.
//!
//! The transforms never let a NaN or infinity through silently; these helpers
//! turn the first offending element into a [`TransformError::NonFinite`].

use crate::error::{TransformError, TransformResult};

/// Reject the first non-finite element of `values`.
pub fn ensure_finite(what: &'static str, values: &[f64]) -> TransformResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TransformError::NonFinite {
            what,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Scalar variant of [`ensure_finite`].
pub fn ensure_finite_scalar(what: &'static str, value: f64) -> TransformResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TransformError::NonFinite {
            what,
            index: 0,
            value,
        })
    }
}

/// Reject an empty vector.
pub fn ensure_non_empty(what: &'static str, values: &[f64]) -> TransformResult<()> {
    if values.is_empty() {
        return Err(TransformError::EmptyInput { what });
    }
    Ok(())
}

/// Require `actual == expected`.
pub fn ensure_len(what: &'static str, expected: usize, actual: usize) -> TransformResult<()> {
    if expected != actual {
        return Err(TransformError::ShapeMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reject a computed vector that overflowed, naming the first bad bin.
pub fn ensure_finite_output(what: &'static str, values: Vec<f64>) -> TransformResult<Vec<f64>> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TransformError::domain(
            what,
            format!("bin {index} overflows ({})", values[index]),
        )),
        None => Ok(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_non_finite_index() {
        let err = ensure_finite("x", &[1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        match err {
            TransformError::NonFinite { what, index, .. } => {
                assert_eq!(what, "x");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        assert_eq!(
            ensure_len("agebins", 3, 2),
            Err(TransformError::ShapeMismatch {
                what: "agebins",
                expected: 3,
                actual: 2
            })
        );
        assert!(ensure_len("agebins", 2, 2).is_ok());
    }

    #[test]
    fn overflowed_output_is_domain_error() {
        assert!(matches!(
            ensure_finite_output("mass", vec![1.0, f64::INFINITY]),
            Err(TransformError::Domain { what: "mass", .. })
        ));
        assert_eq!(ensure_finite_output("mass", vec![1.0, 2.0]), Ok(vec![1.0, 2.0]));
    }
}
