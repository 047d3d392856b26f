//! Flat ΛCDM cosmology.
//!
//! With radiation neglected the age of a flat universe has a closed form:
//!
//! ```text
//! t(z) = 2 / (3 H0 sqrt(ΩΛ)) · asinh( sqrt(ΩΛ / Ωm) · (1 + z)^(-3/2) )
//! ```
//!
//! and reduces to the Einstein–de Sitter age `2 / (3 H0) · (1 + z)^(-3/2)`
//! when `Ωm = 1`. At `z = 0` the WMAP9 preset gives ≈13.77 Gyr.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cosmology::{Cosmology, check_redshift};
use crate::error::{TransformError, TransformResult};

/// `1 / H0` in Gyr for `H0` in km/s/Mpc.
const HUBBLE_TIME_GYR: f64 = 977.792;

/// Environment key for the Hubble constant (km/s/Mpc).
pub const ENV_H0: &str = "SFH_COSMO_H0";
/// Environment key for the matter density parameter.
pub const ENV_OM0: &str = "SFH_COSMO_OM0";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatLambdaCdm {
    /// Hubble constant, km/s/Mpc.
    pub h0: f64,
    /// Matter density today; dark energy is `1 - om0`.
    pub om0: f64,
}

/// WMAP 9-year parameters.
pub const WMAP9: FlatLambdaCdm = FlatLambdaCdm {
    h0: 69.32,
    om0: 0.2865,
};

impl Default for FlatLambdaCdm {
    fn default() -> Self {
        WMAP9
    }
}

impl FlatLambdaCdm {
    pub fn new(h0: f64, om0: f64) -> TransformResult<Self> {
        check_h0(h0).map_err(|reason| TransformError::domain("h0", reason))?;
        check_om0(om0).map_err(|reason| TransformError::domain("om0", reason))?;
        Ok(Self { h0, om0 })
    }

    /// Load the cosmology from the environment (and `.env`).
    ///
    /// Unset keys fall back to [`WMAP9`].
    pub fn from_env() -> TransformResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` uses the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> TransformResult<Self> {
        let h0 = read_f64(&lookup, ENV_H0)?.unwrap_or(WMAP9.h0);
        check_h0(h0).map_err(|reason| TransformError::Config { key: ENV_H0, reason })?;

        let om0 = read_f64(&lookup, ENV_OM0)?.unwrap_or(WMAP9.om0);
        check_om0(om0).map_err(|reason| TransformError::Config { key: ENV_OM0, reason })?;

        debug!(h0, om0, "resolved cosmology");
        Ok(Self { h0, om0 })
    }

    pub fn hubble_time_gyr(&self) -> f64 {
        HUBBLE_TIME_GYR / self.h0
    }
}

impl Cosmology for FlatLambdaCdm {
    fn age_gyr(&self, zred: f64) -> TransformResult<f64> {
        check_redshift(zred)?;
        let th = self.hubble_time_gyr();
        let a32 = (1.0 + zred).powf(-1.5);
        let ode0 = 1.0 - self.om0;

        if ode0 <= 0.0 {
            return Ok(2.0 / 3.0 * th * a32);
        }
        Ok(2.0 / (3.0 * ode0.sqrt()) * th * ((ode0 / self.om0).sqrt() * a32).asinh())
    }
}

fn check_h0(h0: f64) -> Result<(), String> {
    if h0.is_finite() && h0 > 0.0 {
        Ok(())
    } else {
        Err(format!("must be finite and > 0, got {h0}"))
    }
}

fn check_om0(om0: f64) -> Result<(), String> {
    if om0.is_finite() && om0 > 0.0 && om0 <= 1.0 {
        Ok(())
    } else {
        Err(format!("must lie in (0, 1], got {om0}"))
    }
}

fn read_f64(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> TransformResult<Option<f64>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim().parse::<f64>().map_err(|e| TransformError::Config {
        key,
        reason: format!("{raw:?} is not a number ({e})"),
    })?;
    Ok(Some(value))
}
