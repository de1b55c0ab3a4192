//! Morphological opening (erosion followed by dilation)
//!
//! Removes bright features smaller than the structuring element while
//! preserving the shape of larger ones.

use ndmorph_core::{Grid, GridElement, Result};

use super::dilate::dilated;
use super::erode::eroded;

/// Open `f` by `se`: erode, then dilate with the same element.
pub fn opening<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<T>> {
    let eroded = eroded(f, se)?;
    dilated(&eroded, se)
}
