//! Stick-breaking ("z-fraction") non-parametric SFH.
//!
//! `N - 1` independent variables `z_i ∈ (0, 1)` are mapped onto an
//! `N`-dimensional simplex of SFR fractions:
//!
//! ```text
//! s_0     = 1 - z_0
//! s_i     = (z_0 · … · z_{i-1}) · (1 - z_i)      for 1 <= i <= N-2
//! s_{N-1} = 1 - Σ_{i<N-1} s_i
//! ```
//!
//! Independent priors on the `z_i` then induce a Dirichlet prior on `s`. The
//! last fraction is taken by subtraction so the simplex sums to one under
//! floating-point arithmetic.
//!
//! SFR fractions become bin masses by weighting with the linear bin width and
//! renormalizing (equal SFR in a wider bin forms more mass):
//!
//! ```text
//! m_i = M · (s_i · w_i) / Σ_j (s_j · w_j)      sfr_i = m_i / w_i
//! ```
//!
//! [`masses_to_zfrac`] is the exact inverse.

use crate::domain::{AgeBins, MassZFraction};
use crate::error::{TransformError, TransformResult};
use crate::math::{
    SIMPLEX_TOL, ensure_finite, ensure_finite_output, ensure_finite_scalar, ensure_len, ensure_non_empty,
    normalize_by_sum, validate_simplex,
};

/// z-fractions → SFR fractions (length `z_fraction.len() + 1`).
///
/// Finite values outside `(0, 1)` are accepted; the result then still sums to
/// one but may contain entries outside `[0, 1]`.
pub fn zfrac_to_sfrac(z_fraction: &[f64]) -> TransformResult<Vec<f64>> {
    ensure_non_empty("z_fraction", z_fraction)?;
    ensure_finite("z_fraction", z_fraction)?;

    let n = z_fraction.len() + 1;
    let mut sfr_fraction = vec![0.0; n];
    sfr_fraction[0] = 1.0 - z_fraction[0];

    let mut stick = 1.0;
    for i in 1..z_fraction.len() {
        stick *= z_fraction[i - 1];
        sfr_fraction[i] = stick * (1.0 - z_fraction[i]);
    }
    sfr_fraction[n - 1] = 1.0 - sfr_fraction[..n - 1].iter().sum::<f64>();

    Ok(sfr_fraction)
}

/// SFR fractions → z-fractions, inverting the stick-breaking recursion.
///
/// Fails with [`TransformError::DegenerateStick`] when a prefix product of the
/// recovered z-fractions is zero.
pub fn sfrac_to_zfrac(sfr_fraction: &[f64]) -> TransformResult<Vec<f64>> {
    if sfr_fraction.len() < 2 {
        return Err(TransformError::ShapeMismatch {
            what: "sfr_fraction (at least two bins)",
            expected: 2,
            actual: sfr_fraction.len(),
        });
    }
    ensure_finite("sfr_fraction", sfr_fraction)?;

    let mut z_fraction = vec![0.0; sfr_fraction.len() - 1];
    z_fraction[0] = 1.0 - sfr_fraction[0];

    let mut stick = 1.0;
    for i in 1..z_fraction.len() {
        stick *= z_fraction[i - 1];
        if stick == 0.0 {
            return Err(TransformError::DegenerateStick { index: i });
        }
        z_fraction[i] = 1.0 - sfr_fraction[i] / stick;
    }

    Ok(z_fraction)
}

/// z-fractions → stellar mass formed in each age bin (sums to `total_mass`).
///
/// `total_mass` must be positive.
pub fn zfrac_to_masses(total_mass: f64, z_fraction: &[f64], agebins: &AgeBins) -> TransformResult<Vec<f64>> {
    let (masses, _) = project(total_mass, z_fraction, agebins)?;
    Ok(masses)
}

/// z-fractions → SFR in each age bin (Msun/yr).
pub fn zfrac_to_sfr(total_mass: f64, z_fraction: &[f64], agebins: &AgeBins) -> TransformResult<Vec<f64>> {
    let (masses, widths) = project(total_mass, z_fraction, agebins)?;
    ensure_finite_output("sfr", masses.iter().zip(&widths).map(|(m, w)| m / w).collect())
}

/// Bin masses → total mass and z-fractions; the inverse of [`zfrac_to_masses`].
pub fn masses_to_zfrac(mass: &[f64], agebins: &AgeBins) -> TransformResult<MassZFraction> {
    ensure_len("agebins", mass.len(), agebins.len())?;
    let widths = agebins.widths()?;
    masses_to_zfrac_with_widths(mass, &widths)
}

/// [`masses_to_zfrac`] for callers that already hold linear bin widths (years).
pub fn masses_to_zfrac_with_widths(mass: &[f64], widths: &[f64]) -> TransformResult<MassZFraction> {
    ensure_non_empty("mass", mass)?;
    ensure_len("bin widths", mass.len(), widths.len())?;
    ensure_finite("mass", mass)?;
    ensure_finite("bin widths", widths)?;
    if let Some(index) = mass.iter().position(|&m| m < 0.0) {
        return Err(TransformError::domain(
            "mass",
            format!("bin {index} has negative mass ({})", mass[index]),
        ));
    }
    if let Some(index) = widths.iter().position(|&w| w <= 0.0) {
        return Err(TransformError::domain(
            "bin widths",
            format!("bin {index} has non-positive width ({})", widths[index]),
        ));
    }

    let total_mass: f64 = mass.iter().sum();
    let sfr: Vec<f64> = mass.iter().zip(widths).map(|(m, w)| m / w).collect();
    let sfr_fraction = normalize_by_sum("sfr_fraction", &sfr)?;
    validate_simplex(&sfr_fraction, SIMPLEX_TOL)?;
    let z_fraction = sfrac_to_zfrac(&sfr_fraction)?;

    Ok(MassZFraction {
        total_mass,
        z_fraction,
    })
}

/// Shared forward path: bin masses and the widths used to derive them.
fn project(total_mass: f64, z_fraction: &[f64], agebins: &AgeBins) -> TransformResult<(Vec<f64>, Vec<f64>)> {
    let total_mass = ensure_finite_scalar("total_mass", total_mass)?;
    if total_mass <= 0.0 {
        return Err(TransformError::domain(
            "total_mass",
            format!("must be > 0, got {total_mass}"),
        ));
    }
    let sfr_fraction = zfrac_to_sfrac(z_fraction)?;
    ensure_len("agebins", sfr_fraction.len(), agebins.len())?;
    let widths = agebins.widths()?;

    let weighted: Vec<f64> = sfr_fraction.iter().zip(&widths).map(|(s, w)| s * w).collect();
    let mass_fraction = normalize_by_sum("mass_fraction", &weighted)?;
    let masses = mass_fraction.iter().map(|f| total_mass * f).collect();

    Ok((masses, widths))
}
