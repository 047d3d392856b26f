//! Single-value convenience transforms.
//!
//! These carry no invariant beyond their defining formula. The only one with
//! real structure is [`zred_to_agebins`], which rescales a template set of age
//! bins to the age of the universe at a given redshift.

use crate::cosmology::Cosmology;
use crate::domain::AgeBins;
use crate::error::{TransformError, TransformResult};
use crate::math::{ensure_finite_scalar, linspace};

/// Upper edge of the interpolated bins, as a fraction of the universe age.
pub const TBINMAX_FRACTION: f64 = 0.85;

/// Stellar metallicity pass-through.
pub fn stellar_logzsol(logzsol: f64) -> TransformResult<f64> {
    ensure_finite_scalar("logzsol", logzsol)
}

/// `10^logmass`.
pub fn delogify_mass(logmass: f64) -> TransformResult<f64> {
    let logmass = ensure_finite_scalar("logmass", logmass)?;
    let mass = 10f64.powf(logmass);
    if !mass.is_finite() {
        return Err(TransformError::domain("logmass", format!("10^{logmass} overflows")));
    }
    Ok(mass)
}

/// Burst age from the host age and the fractional burst age.
///
/// Sampling in `fage_burst ∈ [0, 1]` keeps `tburst <= tage`; that bound is not
/// enforced here.
pub fn tburst_from_fage(tage: f64, fage_burst: f64) -> TransformResult<f64> {
    let tage = ensure_finite_scalar("tage", tage)?;
    let fage_burst = ensure_finite_scalar("fage_burst", fage_burst)?;
    Ok(tage * fage_burst)
}

/// Galaxy age (Gyr) from a fraction of the universe age at `zred`.
pub fn tage_from_tuniv<C: Cosmology + ?Sized>(zred: f64, tage_tuniv: f64, cosmology: &C) -> TransformResult<f64> {
    let tage_tuniv = ensure_finite_scalar("tage_tuniv", tage_tuniv)?;
    Ok(tage_tuniv * cosmology.age_gyr(zred)?)
}

/// Stretch template age bins to the universe age at `zred`.
///
/// The first bin is kept as is. The remaining interior limits are spaced
/// linearly in log-time from the upper edge of the second template bin to
/// `log10(0.85 · tuniv)`, and the final edge is `log10(tuniv)`. The number of
/// bins is preserved; at least two template bins are required.
pub fn zred_to_agebins<C: Cosmology + ?Sized>(zred: f64, agebins: &AgeBins, cosmology: &C) -> TransformResult<AgeBins> {
    let ncomp = agebins.len();
    if ncomp < 2 {
        return Err(TransformError::domain(
            "agebins",
            format!("need at least 2 template bins, got {ncomp}"),
        ));
    }
    let edges = agebins.edges();
    for (index, &[start, end]) in edges.iter().enumerate() {
        if !(start.is_finite() && end.is_finite()) {
            return Err(TransformError::InvalidAgeBins {
                index,
                start,
                end,
                reason: "edges must be finite",
            });
        }
    }

    let tuniv = cosmology.age_years(zred)?;
    let tbinmax = tuniv * TBINMAX_FRACTION;

    let mut limits = Vec::with_capacity(ncomp + 1);
    limits.extend_from_slice(&edges[0]);
    limits.extend(linspace(edges[1][1], tbinmax.log10(), ncomp - 2));
    limits.push(tuniv.log10());

    let bins = AgeBins::from_limits(&limits)?;
    // Template edges past the universe age produce inverted bins.
    bins.widths()?;
    Ok(bins)
}

/// `dust1 = dust2 · dust_ratio`.
pub fn dustratio_to_dust1(dust2: f64, dust_ratio: f64) -> TransformResult<f64> {
    let dust2 = ensure_finite_scalar("dust2", dust2)?;
    let dust_ratio = ensure_finite_scalar("dust_ratio", dust_ratio)?;
    Ok(dust2 * dust_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::{AgeFn, WMAP9};

    fn template() -> AgeBins {
        AgeBins::from_limits(&[0.0, 8.0, 8.5, 9.0, 9.5, 9.8, 10.1]).unwrap()
    }

    #[test]
    fn scalar_helpers() {
        assert_eq!(stellar_logzsol(-0.3).unwrap(), -0.3);
        assert!((delogify_mass(10.0).unwrap() - 1e10).abs() < 1e-3);
        assert_eq!(tburst_from_fage(10.0, 0.25).unwrap(), 2.5);
        assert_eq!(dustratio_to_dust1(0.6, 0.5).unwrap(), 0.3);
    }

    #[test]
    fn delogify_overflow_is_error() {
        assert!(delogify_mass(400.0).is_err());
        assert!(delogify_mass(f64::NAN).is_err());
    }

    #[test]
    fn tage_scales_universe_age() {
        let cosmo = AgeFn(|z: f64| 12.0 / (1.0 + z));
        assert_eq!(tage_from_tuniv(1.0, 0.5, &cosmo).unwrap(), 3.0);

        let tage = tage_from_tuniv(0.0, 1.0, &WMAP9).unwrap();
        assert!((tage - 13.77).abs() < 0.01);
    }

    #[test]
    fn agebins_stretch_to_universe_age() {
        let cosmo = AgeFn(|_z: f64| 10.0);
        let bins = zred_to_agebins(0.5, &template(), &cosmo).unwrap();
        let edges = bins.edges();

        assert_eq!(bins.len(), 6);
        assert_eq!(edges[0], [0.0, 8.0]);
        assert_eq!(edges[1][0], 8.0);
        // Interpolation starts at the top of the second template bin.
        assert_eq!(edges[1][1], 8.5);
        assert!((edges[4][1] - (1e10 * TBINMAX_FRACTION).log10()).abs() < 1e-12);
        assert_eq!(edges[5][1], 10.0);
        for w in edges.windows(2) {
            assert_eq!(w[0][1], w[1][0]);
        }
        assert!(bins.widths().is_ok());
    }

    #[test]
    fn two_bin_template_keeps_first_bin() {
        let cosmo = AgeFn(|_z: f64| 10.0);
        let template = AgeBins::from_limits(&[0.0, 8.0, 9.0]).unwrap();
        let bins = zred_to_agebins(0.0, &template, &cosmo).unwrap();
        assert_eq!(bins.edges(), &[[0.0, 8.0], [8.0, 10.0]]);
    }

    #[test]
    fn agebins_need_two_template_bins() {
        let cosmo = AgeFn(|_z: f64| 10.0);
        let template = AgeBins::new(vec![[0.0, 8.0]]);
        assert!(matches!(
            zred_to_agebins(0.0, &template, &cosmo),
            Err(TransformError::Domain { what: "agebins", .. })
        ));
    }

    #[test]
    fn template_beyond_universe_age_is_rejected() {
        // log10(tuniv) = 8 while the template already reaches 8.5.
        let cosmo = AgeFn(|_z: f64| 0.1);
        assert!(matches!(
            zred_to_agebins(20.0, &template(), &cosmo),
            Err(TransformError::InvalidAgeBins { .. })
        ));
    }
}
