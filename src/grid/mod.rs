//! Owned integer grids.
//!
//! `Grid` stores `rows * cols` cells in a single row-major buffer, so the cell
//! at `(row, col)` lives at index `row * cols + col`. Dimensions are fixed at
//! construction; producing a grid of another size always allocates a new one.

use crate::util::{GridConvError, GridConvResult};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Row and column counts of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl GridSize {
    /// Creates a size from row and column counts.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns `true` when a window of `other` fits inside `self`.
    pub fn contains(&self, other: GridSize) -> bool {
        self.rows >= other.rows && self.cols >= other.cols
    }
}

/// Owned 2D grid of integers in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid with every cell set to zero.
    pub fn zeros(rows: usize, cols: usize) -> GridConvResult<Self> {
        Self::filled(rows, cols, 0)
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: i64) -> GridConvResult<Self> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            data: vec![value; len],
            rows,
            cols,
        })
    }

    /// Creates a grid from a row-major buffer of exactly `rows * cols` cells.
    pub fn from_vec(data: Vec<i64>, rows: usize, cols: usize) -> GridConvResult<Self> {
        let needed = cell_count(rows, cols)?;
        if data.len() != needed {
            return Err(GridConvError::BufferSizeMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a grid from nested rows of equal length.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> GridConvResult<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |row| row.as_ref().len());
        let len = cell_count(num_rows, num_cols)?;

        let mut data = Vec::with_capacity(len);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(GridConvError::RaggedRows {
                    row: row_idx,
                    expected: num_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the grid dimensions by value.
    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    /// Returns the cell at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Returns the cell at a row-major linear index if it is within bounds.
    pub fn get_linear(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// Writes outside the grid leave it untouched and report
    /// [`GridConvError::IndexOutOfBounds`].
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> GridConvResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(GridConvError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns row `row` as a contiguous slice of length `cols`.
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [i64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    /// Iterates over rows from top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[i64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Consumes the grid and returns its row-major buffer.
    pub fn into_vec(self) -> Vec<i64> {
        self.data
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows_iter().map(<[i64]>::to_vec).collect()
    }

    fn checked_index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &i64 {
        &self.data[self.checked_index(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut i64 {
        let idx = self.checked_index(row, col);
        &mut self.data[idx]
    }
}

/// Formats one row per line with each column right-aligned to its widest value.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(i64::to_string).collect();
        let mut widths = vec![0usize; self.cols];
        for (idx, cell) in cells.iter().enumerate() {
            let col = idx % self.cols;
            widths[col] = widths[col].max(cell.len());
        }

        for (row_idx, row) in cells.chunks_exact(self.cols).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}", width = widths[col])?;
            }
        }
        Ok(())
    }
}

fn cell_count(rows: usize, cols: usize) -> GridConvResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(GridConvError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridConvError::InvalidDimensions { rows, cols })
}
