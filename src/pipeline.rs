//! End-to-end convolution runs: size check, padding, correlation.

use crate::grid::Grid;
use crate::kernel::{Kernel, ScalarKernel};
use crate::pad::{apply_padding, PaddingAdjustment, PaddingMode};
use crate::trace::{trace_event, trace_span};
use crate::util::{GridConvError, GridConvResult};

/// Configuration for a convolution run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvolveConfig {
    /// Padding applied to the matrix before correlation.
    pub padding: PaddingMode,
    /// Split rule for odd pad amounts.
    pub adjustment: PaddingAdjustment,
    /// Use the row-parallel kernel when the `rayon` feature is enabled.
    pub parallel: bool,
}

/// Runs padding and correlation for a matrix/filter pair.
#[derive(Clone, Debug, Default)]
pub struct Convolver {
    config: ConvolveConfig,
}

impl Convolver {
    /// Creates a convolver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ConvolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ConvolveConfig {
        &self.config
    }

    /// Pads `matrix` and correlates `filter` over it.
    ///
    /// The matrix must be at least as large as the filter on both axes before
    /// padding; otherwise nothing is computed and
    /// [`GridConvError::FilterLargerThanMatrix`] is returned.
    pub fn run(&self, matrix: &Grid, filter: &Grid) -> GridConvResult<Grid> {
        let _span = trace_span!(
            "convolve",
            rows = matrix.rows(),
            cols = matrix.cols(),
            filter_rows = filter.rows(),
            filter_cols = filter.cols()
        )
        .entered();

        if !matrix.size().contains(filter.size()) {
            return Err(GridConvError::FilterLargerThanMatrix {
                matrix: matrix.size(),
                filter: filter.size(),
            });
        }

        let padded = apply_padding(
            matrix,
            filter.size(),
            self.config.padding,
            self.config.adjustment,
        )?;
        trace_event!(
            "input_ready",
            rows = padded.rows(),
            cols = padded.cols()
        );

        if self.config.parallel {
            return correlate_parallel(&padded, filter);
        }
        ScalarKernel::correlate(&padded, filter)
    }
}

#[cfg(feature = "rayon")]
fn correlate_parallel(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
    crate::kernel::rayon::correlate_par(input, filter)
}

#[cfg(not(feature = "rayon"))]
fn correlate_parallel(input: &Grid, filter: &Grid) -> GridConvResult<Grid> {
    ScalarKernel::correlate(input, filter)
}
