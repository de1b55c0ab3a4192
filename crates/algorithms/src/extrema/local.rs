//! Local minima and maxima detection
//!
//! A cell is a local extremum when no structuring-element neighbor holds a
//! strictly better value. Equal neighbors do not disqualify, so plateaus
//! are marked in full.

use crate::validate;
use ndmorph_core::array::position::next_pos;
use ndmorph_core::{Grid, GridElement, Neighborhood, Result};

/// Mark local extrema of `f` under `se` into the boolean grid `out`.
///
/// With `is_min` true, minima are detected; otherwise maxima. `out` must be
/// C-contiguous and share `f`'s shape. Neighbor reads use nearest-edge
/// extension.
pub fn locmin_max<T: GridElement>(
    f: &Grid<T>,
    se: &Grid<T>,
    is_min: bool,
    out: &mut Grid<bool>,
) -> Result<()> {
    validate::at_least_one_dim(f)?;
    validate::same_shape(f.shape(), out.shape())?;
    let nb = Neighborhood::new(se, f.shape(), true)?;
    let data = validate::contiguous(f, "operand")?;
    validate::require_layout(out, "output")?;

    out.fill(false);
    let res = out.as_mut_slice()?;
    let shape = f.shape().to_vec();

    let mut pos = vec![0usize; shape.len()];
    for (flat, &cur) in data.iter().enumerate() {
        let interior = nb.is_interior(&pos);
        let mut extremal = true;
        for off in nb.offsets() {
            let v = if interior {
                data[(flat as isize + off.flat) as usize]
            } else {
                data[nb.clipped_flat(&pos, off)]
            };
            if (is_min && v < cur) || (!is_min && v > cur) {
                extremal = false;
                break;
            }
        }
        res[flat] = extremal;
        next_pos(&mut pos, &shape);
    }
    Ok(())
}

/// Local minima of `f` under `se`, into a fresh boolean grid.
pub fn locmin<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<bool>> {
    let mut out = Grid::zeros(f.shape());
    locmin_max(f, se, true, &mut out)?;
    Ok(out)
}

/// Local maxima of `f` under `se`, into a fresh boolean grid.
pub fn locmax<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<bool>> {
    let mut out = Grid::zeros(f.shape());
    locmin_max(f, se, false, &mut out)?;
    Ok(out)
}
