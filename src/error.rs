//! Crate-wide error type.
//!
//! Every transform validates its inputs before doing arithmetic and returns the
//! first fault it finds. Nothing is retried or patched up: a malformed SFH
//! parameterization has to surface here rather than as a NaN in a likelihood.

use thiserror::Error;

/// Result alias used by every fallible function in the crate.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors produced while mapping sampling parameters to physical parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A vector that must carry at least one element is empty.
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    /// Two inputs that must describe the same number of bins disagree.
    #[error("{what}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinite input value.
    #[error("{what}[{index}] is not finite ({value})")]
    NonFinite {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// An age bin whose linear width is not strictly positive.
    #[error("age bin {index} [{start}, {end}] is invalid: {reason}")]
    InvalidAgeBins {
        index: usize,
        start: f64,
        end: f64,
        reason: &'static str,
    },

    /// Numerical-domain fault (zero normalization, invalid redshift, ...).
    #[error("{what}: {reason}")]
    Domain { what: &'static str, reason: String },

    /// The inverse stick-breaking recursion hit a zero prefix product.
    ///
    /// `index` is the z-fraction that could not be recovered; every z-fraction
    /// before it is well defined.
    #[error("z_fraction[{index}] is undefined: prefix product of earlier z-fractions is zero")]
    DegenerateStick { index: usize },

    /// A required field is absent from the shared parameter record.
    #[error("missing parameter `{name}`")]
    MissingParam { name: String },

    /// A field of the shared parameter record has the wrong shape.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParam { name: String, reason: String },

    /// Environment configuration could not be parsed.
    #[error("invalid configuration {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl TransformError {
    pub(crate) fn domain(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            what,
            reason: reason.into(),
        }
    }
}
