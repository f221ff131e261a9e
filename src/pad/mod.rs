//! Border padding applied to the matrix before correlation.
//!
//! Padding grows the matrix by `filter - 1` cells per axis so every source
//! cell can sit under every filter tap. How an odd pad amount is split
//! between the leading and trailing edge is governed by [`PaddingAdjustment`].

use crate::grid::{Grid, GridSize};
use crate::trace::{trace_event, trace_span};
use crate::util::GridConvResult;
use std::borrow::Cow;

/// Padding policy selected for a correlation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Correlate the matrix as-is.
    #[default]
    None,
    /// Surround the matrix with zero cells sized to the filter.
    Zero,
    /// Same as [`PaddingMode::Zero`].
    Same,
}

/// Rule for splitting an odd pad amount between the two edges of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaddingAdjustment {
    /// Leading edge gets `floor(pad / 2)`.
    #[default]
    FloorStart,
    /// Leading edge gets `ceil(pad / 2)`.
    CeilStart,
}

impl PaddingAdjustment {
    /// Splits `pad` into `(start, end)` with `start + end == pad`.
    pub fn split(self, pad: usize) -> (usize, usize) {
        let start = match self {
            PaddingAdjustment::FloorStart => pad / 2,
            PaddingAdjustment::CeilStart => pad.div_ceil(2),
        };
        (start, pad - start)
    }
}

/// Number of cells added on each side of a padded grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PadExtents {
    /// Rows added above the source.
    pub rows_start: usize,
    /// Rows added below the source.
    pub rows_end: usize,
    /// Columns added left of the source.
    pub cols_start: usize,
    /// Columns added right of the source.
    pub cols_end: usize,
}

impl PadExtents {
    /// Computes extents that let a filter of `filter` size visit every cell.
    ///
    /// Filter dimensions of 0 or 1 add no padding on that axis.
    pub fn for_filter(filter: GridSize, adjustment: PaddingAdjustment) -> Self {
        let (rows_start, rows_end) = adjustment.split(filter.rows.saturating_sub(1));
        let (cols_start, cols_end) = adjustment.split(filter.cols.saturating_sub(1));
        Self {
            rows_start,
            rows_end,
            cols_start,
            cols_end,
        }
    }

    /// Returns `true` when no cells would be added.
    pub fn is_empty(&self) -> bool {
        self.rows_start + self.rows_end + self.cols_start + self.cols_end == 0
    }

    /// Returns the size of `source` after padding.
    pub fn padded_size(&self, source: GridSize) -> GridSize {
        GridSize::new(
            source
                .rows
                .saturating_add(self.rows_start)
                .saturating_add(self.rows_end),
            source
                .cols
                .saturating_add(self.cols_start)
                .saturating_add(self.cols_end),
        )
    }
}

/// Pads `source` for correlation against a filter of size `filter`.
///
/// [`PaddingMode::None`] borrows the input unchanged; the other modes return a
/// newly allocated zero-padded grid and never touch `source`.
pub fn apply_padding(
    source: &Grid,
    filter: GridSize,
    mode: PaddingMode,
    adjustment: PaddingAdjustment,
) -> GridConvResult<Cow<'_, Grid>> {
    match mode {
        PaddingMode::None => Ok(Cow::Borrowed(source)),
        PaddingMode::Zero | PaddingMode::Same => {
            let extents = PadExtents::for_filter(filter, adjustment);
            pad_constant(source, extents, 0).map(Cow::Owned)
        }
    }
}

/// Embeds `source` at `(rows_start, cols_start)` in a grid bordered by `fill`.
pub fn pad_constant(source: &Grid, extents: PadExtents, fill: i64) -> GridConvResult<Grid> {
    let _span = trace_span!(
        "pad_constant",
        rows = source.rows(),
        cols = source.cols(),
        fill = fill
    )
    .entered();

    let size = extents.padded_size(source.size());
    let mut padded = Grid::filled(size.rows, size.cols, fill)?;

    for (row_idx, row) in source.rows_iter().enumerate() {
        let dst = padded.row_mut(extents.rows_start + row_idx);
        dst[extents.cols_start..extents.cols_start + source.cols()].copy_from_slice(row);
    }

    trace_event!(
        "padded",
        rows = size.rows,
        cols = size.cols,
        rows_start = extents.rows_start,
        cols_start = extents.cols_start
    );
    Ok(padded)
}
