//! Rayon-parallel correlation (feature-gated).
//!
//! Output rows are computed independently, each task reading the shared
//! input and filter and writing only its own row of the result.

use crate::grid::Grid;
use crate::kernel::{output_size, window_dot, Kernel, ScalarKernel};
use crate::trace::{trace_event, trace_span};
use crate::util::GridConvResult;
use rayon::prelude::*;

/// Row-parallel correlation kernel.
pub struct RayonKernel;

impl Kernel for RayonKernel {
    fn score_at(input: &Grid, filter: &Grid, row: usize, col: usize) -> Option<i64> {
        ScalarKernel::score_at(input, filter, row, col)
    }

    fn correlate(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
        correlate_par(input, filter)
    }
}

/// Row-parallel correlation producing the same output as the scalar kernel.
pub fn correlate_par(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
    let _span = trace_span!(
        "correlate_par",
        rows = input.rows(),
        cols = input.cols(),
        filter_rows = filter.rows(),
        filter_cols = filter.cols()
    )
    .entered();

    let out = output_size(input.size(), filter.size())?;
    let mut result = Grid::zeros(out.rows, out.cols)?;
    result
        .as_mut_slice()
        .par_chunks_mut(out.cols)
        .enumerate()
        .for_each(|(row, dst)| {
            for (col, cell) in dst.iter_mut().enumerate() {
                *cell = window_dot(input, filter, row, col);
            }
        });

    trace_event!("correlated", rows = out.rows, cols = out.cols);
    Ok(result)
}
