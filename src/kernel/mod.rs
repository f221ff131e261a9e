//! Correlation kernel implementations.
//!
//! All kernels compute cross-correlation: the filter slides over the input
//! without being flipped, and each output cell is the dot product of the
//! filter with the window whose top-left corner sits at that cell.

use crate::grid::{Grid, GridSize};
use crate::util::{GridConvError, GridConvResult};

/// Kernel trait for window scoring and full correlation.
pub trait Kernel {
    /// Computes the dot product of `filter` with the window at `(row, col)`.
    ///
    /// Returns `None` when the window does not fit inside `input`.
    fn score_at(input: &Grid, filter: &Grid, row: usize, col: usize) -> Option<i64>;

    /// Correlates `filter` over every valid placement in `input`.
    fn correlate(input: &Grid, filter: &Grid) -> GridConvResult<Grid>;
}

/// Returns the size of the correlation output for `input` and `filter`.
///
/// Fails with [`GridConvError::FilterLargerThanMatrix`] when the filter does
/// not fit inside the input on either axis.
pub fn output_size(input: GridSize, filter: GridSize) -> GridConvResult<GridSize> {
    if !input.contains(filter) {
        return Err(GridConvError::FilterLargerThanMatrix {
            matrix: input,
            filter,
        });
    }
    Ok(GridSize::new(
        input.rows - filter.rows + 1,
        input.cols - filter.cols + 1,
    ))
}

/// Dot product of `filter` with the window at `(row, col)`.
///
/// Callers guarantee that the window lies inside `input`.
pub(crate) fn window_dot(input: &Grid, filter: &Grid, row: usize, col: usize) -> i64 {
    let in_cols = input.cols();
    let data = input.as_slice();
    let mut sum = 0i64;
    for (fy, taps) in filter.rows_iter().enumerate() {
        let start = (row + fy) * in_cols + col;
        let window = &data[start..start + taps.len()];
        for (&value, &tap) in window.iter().zip(taps) {
            sum += value * tap;
        }
    }
    sum
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use scalar::{correlate, ScalarKernel};
