//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! travel inside the surrounding fitting framework's parameter records and be
//! compared against reference outputs.

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::math::bin_widths;

/// Ordered age bins, `[log10(t_start), log10(t_end)]` with `t` in years.
///
/// Serializes as a plain list of pairs, the same shape the fitting framework
/// uses for its `agebins` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeBins(Vec<[f64; 2]>);

impl AgeBins {
    pub fn new(edges: Vec<[f64; 2]>) -> Self {
        Self(edges)
    }

    /// Build contiguous bins from `N + 1` ascending bin limits.
    pub fn from_limits(limits: &[f64]) -> TransformResult<Self> {
        if limits.len() < 2 {
            return Err(TransformError::ShapeMismatch {
                what: "bin limits",
                expected: 2,
                actual: limits.len(),
            });
        }
        Ok(Self(limits.windows(2).map(|w| [w[0], w[1]]).collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edges(&self) -> &[[f64; 2]] {
        &self.0
    }

    /// Linear width of each bin in years; fails on empty or non-increasing bins.
    pub fn widths(&self) -> TransformResult<Vec<f64>> {
        bin_widths(&self.0)
    }

    pub fn into_inner(self) -> Vec<[f64; 2]> {
        self.0
    }
}

impl From<Vec<[f64; 2]>> for AgeBins {
    fn from(value: Vec<[f64; 2]>) -> Self {
        Self(value)
    }
}

/// Output of the inverse stick-breaking transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassZFraction {
    /// Sum of the per-bin masses (solar masses).
    pub total_mass: f64,
    /// Recovered z-fractions, one fewer than the number of bins.
    pub z_fraction: Vec<f64>,
}

/// Value produced by a transform dispatched through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TransformOutput {
    Scalar(f64),
    Vector(Vec<f64>),
    AgeBins(AgeBins),
    MassZFraction(MassZFraction),
}

impl TransformOutput {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            TransformOutput::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            TransformOutput::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_age_bins(&self) -> Option<&AgeBins> {
        match self {
            TransformOutput::AgeBins(bins) => Some(bins),
            _ => None,
        }
    }

    pub fn as_mass_z_fraction(&self) -> Option<&MassZFraction> {
        match self {
            TransformOutput::MassZFraction(out) => Some(out),
            _ => None,
        }
    }
}
