//! Shared parameter records.
//!
//! The surrounding fitting framework keeps every model parameter in one record
//! and hands the whole record to each transform. A transform reads the fields it
//! names and ignores everything else, so transforms compose freely over the same
//! record.
//!
//! - `set`: the shared record (`ParamSet`) and its values (`ParamValue`)
//! - `records`: one typed input record per transform, built via `FromParams`

pub mod records;
pub mod set;

pub use records::*;
pub use set::*;
