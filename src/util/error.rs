//! Error types for gridconv.

use crate::grid::GridSize;
use thiserror::Error;

/// Result alias for gridconv operations.
pub type GridConvResult<T> = std::result::Result<T, GridConvError>;

/// Errors that can occur when building grids or running the correlation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridConvError {
    /// Grid dimensions are zero or overflow `usize`.
    #[error("invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Backing buffer length does not match `rows * cols`.
    #[error("buffer size mismatch: needed {needed}, got {got}")]
    BufferSizeMismatch { needed: usize, got: usize },
    /// Nested rows do not share a common length.
    #[error("ragged rows: row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A checked write addressed a cell outside the grid.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The filter does not fit inside the matrix.
    #[error(
        "matrix is smaller than the filter: matrix {}x{}, filter {}x{}",
        .matrix.rows, .matrix.cols, .filter.rows, .filter.cols
    )]
    FilterLargerThanMatrix { matrix: GridSize, filter: GridSize },
}
