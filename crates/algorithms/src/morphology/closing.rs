//! Morphological closing (dilation followed by erosion)
//!
//! Fills dark gaps smaller than the structuring element while preserving
//! the shape of larger dark regions.

use ndmorph_core::{Grid, GridElement, Result};

use super::dilate::dilated;
use super::erode::eroded;

/// Close `f` by `se`: dilate, then erode with the same element.
pub fn closing<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<T>> {
    let dilated = dilated(f, se)?;
    eroded(&dilated, se)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndmorph_core::box_element;

    #[test]
    fn test_closing_fills_single_dark_pixel() {
        let mut f: Grid<bool> = Grid::filled(&[7, 7], true);
        f.set(&[3, 3], false).unwrap();
        let out = closing(&f, &box_element::<bool>(2)).unwrap();
        assert!(out.get(&[3, 3]).unwrap());
    }

    #[test]
    fn test_closing_preserves_large_dark_region() {
        let mut f: Grid<bool> = Grid::filled(&[11, 11], true);
        for row in 3..8 {
            for col in 3..8 {
                f.set(&[row, col], false).unwrap();
            }
        }
        let out = closing(&f, &box_element::<bool>(2)).unwrap();
        assert!(!out.get(&[5, 5]).unwrap());
    }
}
