//! Age of the universe at a given redshift.
//!
//! The transforms that depend on cosmic time (`tage_from_tuniv`,
//! `zred_to_agebins`) take any [`Cosmology`], so callers can plug in their own
//! tabulated or exact age lookup. [`FlatLambdaCdm`] is the built-in
//! closed-form implementation.

pub mod flat;

pub use flat::*;

use crate::error::{TransformError, TransformResult};

/// Years per Gyr.
pub const YEARS_PER_GYR: f64 = 1e9;

/// Age-at-redshift lookup.
pub trait Cosmology: Send + Sync {
    /// Age of the universe at `zred`, in Gyr.
    fn age_gyr(&self, zred: f64) -> TransformResult<f64>;

    /// Age of the universe at `zred`, in years.
    fn age_years(&self, zred: f64) -> TransformResult<f64> {
        Ok(self.age_gyr(zred)? * YEARS_PER_GYR)
    }
}

/// Adapter turning a plain `zred -> Gyr` function into a [`Cosmology`].
///
/// The returned age must be finite and positive.
pub struct AgeFn<F>(pub F);

impl<F> Cosmology for AgeFn<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn age_gyr(&self, zred: f64) -> TransformResult<f64> {
        check_redshift(zred)?;
        let age = (self.0)(zred);
        if !(age.is_finite() && age > 0.0) {
            return Err(TransformError::domain(
                "age of universe",
                format!("lookup returned {age} Gyr at z={zred}"),
            ));
        }
        Ok(age)
    }
}

pub(crate) fn check_redshift(zred: f64) -> TransformResult<()> {
    if !(zred.is_finite() && zred > -1.0) {
        return Err(TransformError::domain(
            "zred",
            format!("redshift must be finite and > -1, got {zred}"),
        ));
    }
    Ok(())
}
