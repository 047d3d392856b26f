//! Domain types used throughout the transforms.
//!
//! This module defines:
//!
//! - the age-bin structure shared by both non-parametric SFH families (`AgeBins`)
//! - the result of the inverse stick-breaking transform (`MassZFraction`)
//! - the generic output of a registry dispatch (`TransformOutput`)

pub mod types;

pub use types::*;
