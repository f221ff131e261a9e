//! gridconv computes the 2D cross-correlation of a small integer matrix with
//! a filter, optionally zero-padding the matrix first.
//!
//! The scalar kernel is the reference path; the `rayon` feature adds a
//! row-parallel kernel with identical output.

pub mod grid;
pub mod input;
pub mod kernel;
pub mod lowlevel;
pub mod pad;
pub mod pipeline;
mod trace;
pub mod util;

pub use grid::{Grid, GridSize};
pub use input::{grid_from_cells, parse_cell, sanitize_dim, MAX_DIM};
pub use kernel::{correlate, Kernel, ScalarKernel};
pub use pad::{apply_padding, PadExtents, PaddingAdjustment, PaddingMode};
pub use pipeline::{ConvolveConfig, Convolver};
pub use util::{GridConvError, GridConvResult};
