//! Transform names and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cosmology::Cosmology;
use crate::domain::TransformOutput;
use crate::error::{TransformError, TransformResult};
use crate::params::{
    BinMassParams, BurstParams, DustRatioParams, FromParams, LogMassParams, LogzsolParams, ParamSet,
    RedshiftBinsParams, SfrRatioMassParams, SfrRatioParams, TunivParams, ZFracMassParams, ZFractionParams,
};
use crate::transforms::{
    delogify_mass, dustratio_to_dust1, masses_to_zfrac, sfratio_to_mass, sfratio_to_sfr, stellar_logzsol,
    tage_from_tuniv, tburst_from_fage, zfrac_to_masses, zfrac_to_sfr, zfrac_to_sfrac, zred_to_agebins,
};

/// Every transform the crate provides, under its snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    StellarLogzsol,
    DelogifyMass,
    TburstFromFage,
    TageFromTuniv,
    ZredToAgebins,
    DustratioToDust1,
    ZfracToSfrac,
    ZfracToMasses,
    ZfracToSfr,
    MassesToZfrac,
    SfratioToSfr,
    SfratioToMass,
}

impl TransformKind {
    pub const ALL: [TransformKind; 12] = [
        TransformKind::StellarLogzsol,
        TransformKind::DelogifyMass,
        TransformKind::TburstFromFage,
        TransformKind::TageFromTuniv,
        TransformKind::ZredToAgebins,
        TransformKind::DustratioToDust1,
        TransformKind::ZfracToSfrac,
        TransformKind::ZfracToMasses,
        TransformKind::ZfracToSfr,
        TransformKind::MassesToZfrac,
        TransformKind::SfratioToSfr,
        TransformKind::SfratioToMass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::StellarLogzsol => "stellar_logzsol",
            TransformKind::DelogifyMass => "delogify_mass",
            TransformKind::TburstFromFage => "tburst_from_fage",
            TransformKind::TageFromTuniv => "tage_from_tuniv",
            TransformKind::ZredToAgebins => "zred_to_agebins",
            TransformKind::DustratioToDust1 => "dustratio_to_dust1",
            TransformKind::ZfracToSfrac => "zfrac_to_sfrac",
            TransformKind::ZfracToMasses => "zfrac_to_masses",
            TransformKind::ZfracToSfr => "zfrac_to_sfr",
            TransformKind::MassesToZfrac => "masses_to_zfrac",
            TransformKind::SfratioToSfr => "sfratio_to_sfr",
            TransformKind::SfratioToMass => "sfratio_to_mass",
        }
    }

    /// Extract this transform's inputs from `params` and run it.
    pub fn apply(self, params: &ParamSet, cosmology: &dyn Cosmology) -> TransformResult<TransformOutput> {
        debug!(transform = self.name(), fields = params.len(), "applying transform");
        self.dispatch(params, cosmology).inspect_err(|err| {
            warn!(transform = self.name(), error = %err, "transform failed");
        })
    }

    fn dispatch(self, params: &ParamSet, cosmology: &dyn Cosmology) -> TransformResult<TransformOutput> {
        use TransformOutput::{AgeBins, MassZFraction, Scalar, Vector};

        match self {
            TransformKind::StellarLogzsol => {
                let p = LogzsolParams::from_params(params)?;
                stellar_logzsol(p.logzsol).map(Scalar)
            }
            TransformKind::DelogifyMass => {
                let p = LogMassParams::from_params(params)?;
                delogify_mass(p.logmass).map(Scalar)
            }
            TransformKind::TburstFromFage => {
                let p = BurstParams::from_params(params)?;
                tburst_from_fage(p.tage, p.fage_burst).map(Scalar)
            }
            TransformKind::TageFromTuniv => {
                let p = TunivParams::from_params(params)?;
                tage_from_tuniv(p.zred, p.tage_tuniv, cosmology).map(Scalar)
            }
            TransformKind::ZredToAgebins => {
                let p = RedshiftBinsParams::from_params(params)?;
                zred_to_agebins(p.zred, &p.agebins, cosmology).map(AgeBins)
            }
            TransformKind::DustratioToDust1 => {
                let p = DustRatioParams::from_params(params)?;
                dustratio_to_dust1(p.dust2, p.dust_ratio).map(Scalar)
            }
            TransformKind::ZfracToSfrac => {
                let p = ZFractionParams::from_params(params)?;
                zfrac_to_sfrac(&p.z_fraction).map(Vector)
            }
            TransformKind::ZfracToMasses => {
                let p = ZFracMassParams::from_params(params)?;
                zfrac_to_masses(p.total_mass, &p.z_fraction, &p.agebins).map(Vector)
            }
            TransformKind::ZfracToSfr => {
                let p = ZFracMassParams::from_params(params)?;
                zfrac_to_sfr(p.total_mass, &p.z_fraction, &p.agebins).map(Vector)
            }
            TransformKind::MassesToZfrac => {
                let p = BinMassParams::from_params(params)?;
                masses_to_zfrac(&p.mass, &p.agebins).map(MassZFraction)
            }
            TransformKind::SfratioToSfr => {
                let p = SfrRatioParams::from_params(params)?;
                sfratio_to_sfr(&p.sfr_ratio, p.sfr0).map(Vector)
            }
            TransformKind::SfratioToMass => {
                let p = SfrRatioMassParams::from_params(params)?;
                sfratio_to_mass(&p.sfr_ratio, p.sfr0, &p.agebins).map(Vector)
            }
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TransformError::InvalidParam {
                name: "transform".to_string(),
                reason: format!("unknown transform `{s}`"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::{AgeFn, WMAP9};

    fn shared() -> ParamSet {
        ParamSet::new()
            .with("logzsol", -0.2)
            .with("logmass", 10.0)
            .with("tage", 8.0)
            .with("fage_burst", 0.5)
            .with("zred", 0.0)
            .with("tage_tuniv", 0.5)
            .with("dust2", 0.4)
            .with("dust_ratio", 1.5)
            .with("total_mass", 100.0)
            .with("z_fraction", vec![0.5, 0.5])
            .with("mass", vec![1.0, 2.0, 3.0])
            .with("sfr_ratio", vec![2.0, 0.5])
            .with("sfr0", 10.0)
            .with("agebins", vec![[6.0, 7.0], [7.0, 8.0], [8.0, 9.0]])
    }

    #[test]
    fn names_round_trip() {
        for kind in TransformKind::ALL {
            assert_eq!(kind.name().parse::<TransformKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
        assert!("zfrac_to_everything".parse::<TransformKind>().is_err());
    }

    #[test]
    fn every_transform_runs_on_one_shared_record() {
        let params = shared();
        for kind in TransformKind::ALL {
            let out = kind.apply(&params, &WMAP9);
            assert!(out.is_ok(), "{kind} failed: {out:?}");
        }
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let params = shared();
        let cosmo = AgeFn(|_z: f64| 10.0);

        let out = TransformKind::ZfracToSfrac.apply(&params, &cosmo).unwrap();
        assert_eq!(out.as_vector().unwrap(), &[0.5, 0.25, 0.25]);

        let out = TransformKind::DustratioToDust1.apply(&params, &cosmo).unwrap();
        assert!((out.as_scalar().unwrap() - 0.6).abs() < 1e-15);

        let out = TransformKind::TageFromTuniv.apply(&params, &cosmo).unwrap();
        assert_eq!(out.as_scalar().unwrap(), 5.0);

        let out = TransformKind::SfratioToSfr.apply(&params, &cosmo).unwrap();
        assert_eq!(out.as_vector().unwrap(), &[10.0, 20.0, 10.0]);

        let out = TransformKind::MassesToZfrac.apply(&params, &cosmo).unwrap();
        assert_eq!(out.as_mass_z_fraction().unwrap().total_mass, 6.0);

        let out = TransformKind::ZredToAgebins.apply(&params, &cosmo).unwrap();
        assert_eq!(out.as_age_bins().unwrap().edges()[2][1], 10.0);
    }

    #[test]
    fn missing_inputs_fail_loudly() {
        let params = ParamSet::new().with("z_fraction", vec![0.5]);
        assert_eq!(
            TransformKind::ZfracToMasses.apply(&params, &WMAP9),
            Err(TransformError::MissingParam {
                name: "total_mass".to_string()
            })
        );
    }
}
