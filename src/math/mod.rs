//! Mathematical primitives shared by the transform families: finiteness
//! guards, age-bin widths, `linspace`, and simplex helpers.

pub mod bins;
pub mod guards;
pub mod simplex;

pub use bins::*;
pub use guards::*;
pub use simplex::*;
