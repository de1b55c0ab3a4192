//! Mathematical morphology over integer and boolean grids
//!
//! - **Erosion**: saturating min-plus reduce over the structuring element
//! - **Dilation**: saturating max-plus scatter over the structuring element
//! - **Opening**: erosion then dilation (removes small bright features)
//! - **Closing**: dilation then erosion (fills small dark gaps)

mod closing;
mod dilate;
mod erode;
mod opening;

pub use closing::closing;
pub use dilate::{dilate, dilated};
pub use erode::{erode, eroded};
pub use opening::opening;
