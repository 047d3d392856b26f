//! `sfh-transforms` library crate.
//!
//! Deterministic transforms from "sampling" parameters of a galaxy model to
//! the physical parameters a stellar population synthesis engine consumes:
//!
//! - stick-breaking SFH: z-fractions ↔ SFR fractions ↔ per-bin mass and SFR
//! - SFR-ratio SFH: successive bin ratios → per-bin SFR and mass
//! - single-value helpers: log mass, burst age, age from universe fraction,
//!   redshift-dependent age bins, dust ratio
//!
//! Every transform is a pure function. The `params` and `registry` modules
//! let a fitting framework pass one shared parameter record to any transform,
//! which reads only the fields it names.

pub mod cosmology;
pub mod domain;
pub mod error;
pub mod math;
pub mod params;
pub mod registry;
pub mod transforms;

pub use cosmology::{AgeFn, Cosmology, FlatLambdaCdm, WMAP9};
pub use domain::{AgeBins, MassZFraction, TransformOutput};
pub use error::{TransformError, TransformResult};
pub use params::{FromParams, ParamSet, ParamValue};
pub use registry::{TransformKind, apply_batch, try_apply_batch};
