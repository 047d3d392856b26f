//! Named transform catalogue and record-driven dispatch.
//!
//! Responsibilities:
//!
//! - name every transform so model configurations can refer to it (`kind`)
//! - extract each transform's inputs from the shared record and run it
//! - evaluate one transform over many independent records in parallel (`batch`)

pub mod batch;
pub mod kind;

pub use batch::*;
pub use kind::*;
