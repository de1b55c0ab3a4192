//! # ndmorph Core
//!
//! Core types for the ndmorph morphology library.
//!
//! This crate provides:
//! - `Grid<T>`: dense N-dimensional array of integer or boolean cells
//! - `GridElement`: element trait carrying the saturating min-plus /
//!   max-plus arithmetic used by greyscale morphology
//! - `Neighborhood`: precomputed structuring-element offsets with
//!   nearest-edge boundary extension
//! - Error types shared by all operators

pub mod array;
pub mod error;

pub use array::{box_element, cross, Grid, GridElement, NeighborOffset, Neighborhood};
pub use error::{Error, ErrorKind, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::array::{box_element, cross, Grid, GridElement, Neighborhood};
    pub use crate::error::{Error, ErrorKind, Result};
}
