//! Low-level building blocks for custom pipelines.
//!
//! These expose the padding and kernel pieces that [`crate::Convolver`]
//! composes. Most callers only need `Convolver` and `Grid`.

pub use crate::input::truncate_value;
pub use crate::kernel::output_size;
pub use crate::pad::pad_constant;

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::{correlate_par, RayonKernel};
