//! Scalar reference kernel.

use crate::grid::Grid;
use crate::kernel::{output_size, window_dot, Kernel};
use crate::trace::{trace_event, trace_span};
use crate::util::GridConvResult;

/// Single-threaded correlation kernel.
pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    fn score_at(input: &Grid, filter: &Grid, row: usize, col: usize) -> Option<i64> {
        let end_row = row.checked_add(filter.rows())?;
        let end_col = col.checked_add(filter.cols())?;
        if end_row > input.rows() || end_col > input.cols() {
            return None;
        }
        Some(window_dot(input, filter, row, col))
    }

    fn correlate(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
        let _span = trace_span!(
            "correlate_scalar",
            rows = input.rows(),
            cols = input.cols(),
            filter_rows = filter.rows(),
            filter_cols = filter.cols()
        )
        .entered();

        let out = output_size(input.size(), filter.size())?;
        let mut result = Grid::zeros(out.rows, out.cols)?;
        for row in 0..out.rows {
            let dst = result.row_mut(row);
            for (col, cell) in dst.iter_mut().enumerate() {
                *cell = window_dot(input, filter, row, col);
            }
        }

        trace_event!("correlated", rows = out.rows, cols = out.cols);
        Ok(result)
    }
}

/// Correlates `filter` over `input` with the scalar kernel.
///
/// The output has `input.rows - filter.rows + 1` rows and
/// `input.cols - filter.cols + 1` columns. The filter is not flipped.
pub fn correlate(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
    ScalarKernel::correlate(input, filter)
}
