//! # ndmorph Algorithms
//!
//! N-dimensional morphology and neighborhood operators over dense integer
//! and boolean grids.
//!
//! ## Available operator categories
//!
//! - **morphology**: erosion, dilation, opening, closing
//! - **extrema**: local and regional minima/maxima detection
//! - **holes**: hole closing of binary masks
//! - **hitmiss**: hit-or-miss transform over ternary templates
//! - **majority**: 2-D boolean majority filter
//! - **watershed**: seeded priority-queue watershed with optional
//!   segmentation lines
//!
//! All operators are pure functions over [`ndmorph_core::Grid`]: inputs are
//! validated up front, scratch state is call-local, and identical inputs
//! produce identical outputs.

pub mod extrema;
pub mod hitmiss;
pub mod holes;
pub mod majority;
pub mod morphology;
pub mod watershed;

mod validate;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::extrema::{locmax, locmin, locmin_max, regmax, regmin, regmin_max};
    pub use crate::hitmiss::hitmiss;
    pub use crate::holes::close_holes;
    pub use crate::majority::majority_filter;
    pub use crate::morphology::{closing, dilate, dilated, erode, eroded, opening};
    pub use crate::watershed::cwatershed;
    pub use ndmorph_core::prelude::*;
}
