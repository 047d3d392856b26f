//! SFR-ratio non-parametric SFH.
//!
//! The SFH is parameterized by a baseline SFR in the first age bin and the
//! ratios between adjacent bins, `ratio_i = sfr_{i+1} / sfr_i`:
//!
//! ```text
//! sfr_0 = sfr0
//! sfr_i = sfr0 · ratio_0 · … · ratio_{i-1}
//! ```
//!
//! There is no sum-to-one constraint here; the ratios set the absolute SFR
//! evolution directly. Bin masses follow from the linear bin widths.

use crate::domain::AgeBins;
use crate::error::{TransformError, TransformResult};
use crate::math::{ensure_finite, ensure_finite_output, ensure_finite_scalar, ensure_len};

/// SFR ratios and baseline SFR → SFR in each bin (length `sfr_ratio.len() + 1`).
pub fn sfratio_to_sfr(sfr_ratio: &[f64], sfr0: f64) -> TransformResult<Vec<f64>> {
    let sfr0 = ensure_finite_scalar("sfr0", sfr0)?;
    if sfr0 < 0.0 {
        return Err(TransformError::domain("sfr0", format!("must be >= 0, got {sfr0}")));
    }
    ensure_finite("sfr_ratio", sfr_ratio)?;
    if let Some(index) = sfr_ratio.iter().position(|&r| r <= 0.0) {
        return Err(TransformError::domain(
            "sfr_ratio",
            format!("ratio {index} must be > 0, got {}", sfr_ratio[index]),
        ));
    }

    let mut sfr = Vec::with_capacity(sfr_ratio.len() + 1);
    sfr.push(sfr0);
    let mut current = sfr0;
    for ratio in sfr_ratio {
        current *= ratio;
        sfr.push(current);
    }

    ensure_finite_output("sfr", sfr)
}

/// SFR ratios and baseline SFR → stellar mass formed in each bin.
pub fn sfratio_to_mass(sfr_ratio: &[f64], sfr0: f64, agebins: &AgeBins) -> TransformResult<Vec<f64>> {
    let sfr = sfratio_to_sfr(sfr_ratio, sfr0)?;
    ensure_len("agebins", sfr.len(), agebins.len())?;
    let widths = agebins.widths()?;
    ensure_finite_output("mass", sfr.iter().zip(&widths).map(|(s, w)| s * w).collect())
}
