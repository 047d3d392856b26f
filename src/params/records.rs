//! Typed per-transform input records.
//!
//! Each record names exactly the fields its transform reads. Defaults for
//! optional fields follow the framework's keyword defaults; the non-parametric
//! SFH inputs have no sensible default and are required.

use serde::{Deserialize, Serialize};

use crate::domain::AgeBins;
use crate::error::TransformResult;
use crate::params::ParamSet;

/// Extract a typed record from the shared parameter record.
///
/// Fields the record does not name are ignored.
pub trait FromParams: Sized {
    fn from_params(params: &ParamSet) -> TransformResult<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogzsolParams {
    pub logzsol: f64,
}

impl FromParams for LogzsolParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            logzsol: params.scalar_or("logzsol", 0.0)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogMassParams {
    pub logmass: f64,
}

impl FromParams for LogMassParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            logmass: params.scalar_or("logmass", 0.0)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BurstParams {
    /// Host age, Gyr.
    pub tage: f64,
    /// Burst age as a fraction of `tage`.
    pub fage_burst: f64,
}

impl FromParams for BurstParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            tage: params.scalar_or("tage", 0.0)?,
            fage_burst: params.scalar_or("fage_burst", 0.0)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunivParams {
    pub zred: f64,
    /// Galaxy age as a fraction of the universe age at `zred`.
    pub tage_tuniv: f64,
}

impl Default for TunivParams {
    fn default() -> Self {
        Self {
            zred: 0.0,
            tage_tuniv: 1.0,
        }
    }
}

impl FromParams for TunivParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            zred: params.scalar_or("zred", 0.0)?,
            tage_tuniv: params.scalar_or("tage_tuniv", 1.0)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedshiftBinsParams {
    pub zred: f64,
    /// Template bins to rescale.
    pub agebins: AgeBins,
}

impl FromParams for RedshiftBinsParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            zred: params.scalar_or("zred", 0.0)?,
            agebins: params.age_bins("agebins")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DustRatioParams {
    pub dust2: f64,
    pub dust_ratio: f64,
}

impl FromParams for DustRatioParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            dust2: params.scalar_or("dust2", 0.0)?,
            dust_ratio: params.scalar_or("dust_ratio", 0.0)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZFractionParams {
    pub z_fraction: Vec<f64>,
}

impl FromParams for ZFractionParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            z_fraction: params.vector("z_fraction")?,
        })
    }
}

/// Inputs of the z-fraction → mass/SFR projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZFracMassParams {
    /// Total stellar mass formed, Msun.
    pub total_mass: f64,
    pub z_fraction: Vec<f64>,
    pub agebins: AgeBins,
}

impl FromParams for ZFracMassParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            total_mass: params.scalar("total_mass")?,
            z_fraction: params.vector("z_fraction")?,
            agebins: params.age_bins("agebins")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinMassParams {
    /// Stellar mass formed in each bin, Msun.
    pub mass: Vec<f64>,
    pub agebins: AgeBins,
}

impl FromParams for BinMassParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            mass: params.vector("mass")?,
            agebins: params.age_bins("agebins")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfrRatioParams {
    pub sfr_ratio: Vec<f64>,
    /// SFR in the first (youngest) bin, Msun/yr.
    pub sfr0: f64,
}

impl FromParams for SfrRatioParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            sfr_ratio: params.vector("sfr_ratio")?,
            sfr0: params.scalar("sfr0")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfrRatioMassParams {
    pub sfr_ratio: Vec<f64>,
    pub sfr0: f64,
    pub agebins: AgeBins,
}

impl FromParams for SfrRatioMassParams {
    fn from_params(params: &ParamSet) -> TransformResult<Self> {
        Ok(Self {
            sfr_ratio: params.vector("sfr_ratio")?,
            sfr0: params.scalar("sfr0")?,
            agebins: params.age_bins("agebins")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;

    fn shared() -> ParamSet {
        ParamSet::new()
            .with("total_mass", vec![1e10])
            .with("z_fraction", vec![0.5, 0.5])
            .with("agebins", vec![[6.0, 7.0], [7.0, 8.0], [8.0, 9.0]])
            .with("dust2", 0.6)
            .with("zred", 2.0)
            .with("not_a_model_param", vec![1.0, 2.0, 3.0])
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let p = ZFracMassParams::from_params(&shared()).unwrap();
        assert_eq!(p.total_mass, 1e10);
        assert_eq!(p.z_fraction, vec![0.5, 0.5]);
        assert_eq!(p.agebins.len(), 3);

        let dust = DustRatioParams::from_params(&shared()).unwrap();
        assert_eq!(dust, DustRatioParams { dust2: 0.6, dust_ratio: 0.0 });
    }

    #[test]
    fn defaults_fill_absent_fields() {
        let empty = ParamSet::new();
        assert_eq!(TunivParams::from_params(&empty).unwrap(), TunivParams::default());
        assert_eq!(LogzsolParams::from_params(&empty).unwrap().logzsol, 0.0);
        assert_eq!(BurstParams::from_params(&empty).unwrap(), BurstParams::default());
    }

    #[test]
    fn required_fields_are_reported_by_name() {
        let err = SfrRatioParams::from_params(&shared()).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingParam {
                name: "sfr_ratio".to_string()
            }
        );

        let err = BinMassParams::from_params(&shared()).unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingParam {
                name: "mass".to_string()
            }
        );
    }
}
