//! Age-bin arithmetic.
//!
//! Age bins are stored as `[log10(t_start), log10(t_end)]` pairs with `t` in
//! years. Only the linear width of each bin enters the SFH transforms:
//!
//! ```text
//! width_i = 10^end_i - 10^start_i
//! ```
//!
//! Bins do not have to be contiguous, but every width must be strictly
//! positive and finite.

use crate::error::{TransformError, TransformResult};

/// Linear width (years) of every bin.
pub fn bin_widths(edges: &[[f64; 2]]) -> TransformResult<Vec<f64>> {
    if edges.is_empty() {
        return Err(TransformError::EmptyInput { what: "agebins" });
    }

    let mut out = Vec::with_capacity(edges.len());
    for (index, &[start, end]) in edges.iter().enumerate() {
        if !(start.is_finite() && end.is_finite()) {
            return Err(TransformError::InvalidAgeBins {
                index,
                start,
                end,
                reason: "edges must be finite",
            });
        }
        let width = 10f64.powf(end) - 10f64.powf(start);
        if !width.is_finite() {
            return Err(TransformError::InvalidAgeBins {
                index,
                start,
                end,
                reason: "linear width overflows",
            });
        }
        if width <= 0.0 {
            return Err(TransformError::InvalidAgeBins {
                index,
                start,
                end,
                reason: "end must be greater than start",
            });
        }
        out.push(width);
    }
    Ok(out)
}

/// `num` evenly spaced points over `[start, stop]`, endpoints included.
///
/// `num == 0` gives an empty vector and `num == 1` gives `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num as f64 - 1.0);
            let mut out: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            // Pin the endpoint so it is exact rather than accumulated.
            out[num - 1] = stop;
            out
        }
    }
}
