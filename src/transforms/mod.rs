//! Parameter transforms.
//!
//! Every transform is a pure function over explicit inputs:
//!
//! - `basic`: single-value helpers (log mass, burst age, dust ratio, ...)
//! - `zfrac`: stick-breaking SFH (z-fractions ↔ SFR fractions ↔ bin masses)
//! - `ratio`: SFR-ratio SFH (successive ratios → bin SFRs and masses)
//!
//! The `registry` module wraps these behind named, record-driven dispatch.

pub mod basic;
pub mod ratio;
pub mod zfrac;

pub use basic::*;
pub use ratio::*;
pub use zfrac::*;
