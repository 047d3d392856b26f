//! Parallel evaluation across independent parameter records.
//!
//! Transforms share no mutable state, so a batch (e.g. one record per
//! posterior sample) is evaluated with `rayon` without any synchronization.
//! Output order matches input order, and a failing record only affects its own
//! slot.

use rayon::prelude::*;
use tracing::debug;

use crate::cosmology::Cosmology;
use crate::domain::TransformOutput;
use crate::error::TransformResult;
use crate::params::ParamSet;
use crate::registry::TransformKind;

/// Apply `kind` to every record in `batch`.
pub fn apply_batch<C: Cosmology>(
    kind: TransformKind,
    batch: &[ParamSet],
    cosmology: &C,
) -> Vec<TransformResult<TransformOutput>> {
    debug!(transform = kind.name(), records = batch.len(), "starting batch");

    let out: Vec<_> = batch
        .par_iter()
        .map(|params| kind.apply(params, cosmology))
        .collect();

    let failed = out.iter().filter(|r| r.is_err()).count();
    debug!(transform = kind.name(), records = batch.len(), failed, "finished batch");
    out
}

/// Apply `kind` to every record, failing on the first error (in input order).
pub fn try_apply_batch<C: Cosmology>(
    kind: TransformKind,
    batch: &[ParamSet],
    cosmology: &C,
) -> TransformResult<Vec<TransformOutput>> {
    apply_batch(kind, batch, cosmology).into_iter().collect()
}
