//! Greyscale and binary dilation
//!
//! Dilation scatters: every source cell adds its value (saturating, via
//! `dilate_add`) to each structuring-element offset and the target keeps
//! the maximum. On the boundary, targets are clipped to the grid, matching
//! the nearest-edge extension of the gather formulation. For symmetric
//! elements scatter and gather coincide; for asymmetric elements the
//! scatter uses the reflection convention of dilation (`out[s + delta]`
//! receives `f[s] + se[centre + delta]`).

use crate::validate;
use ndmorph_core::array::position::next_pos;
use ndmorph_core::{Grid, GridElement, Neighborhood, Result};

/// Dilate `f` by the structuring element `se`, writing into `out`.
///
/// `f` and `se` must share dimensionality; `f` and `out` must share shape.
/// Arguments are validated before the first write.
pub fn dilate<T: GridElement>(f: &Grid<T>, se: &Grid<T>, out: &mut Grid<T>) -> Result<()> {
    validate::at_least_one_dim(f)?;
    validate::same_shape(f.shape(), out.shape())?;
    let nb = Neighborhood::new(se, f.shape(), true)?;
    let data = validate::contiguous(f, "operand")?;
    validate::require_layout(out, "output")?;

    out.fill(T::min_value());
    let res = out.as_mut_slice()?;
    let shape = f.shape().to_vec();

    let mut pos = vec![0usize; shape.len()];
    for (flat, &value) in data.iter().enumerate() {
        let interior = nb.is_interior(&pos);
        for off in nb.offsets() {
            let nval = value.dilate_add(off.value);
            let target = if interior {
                (flat as isize + off.flat) as usize
            } else {
                nb.clipped_flat(&pos, off)
            };
            if nval > res[target] {
                res[target] = nval;
            }
        }
        next_pos(&mut pos, &shape);
    }
    Ok(())
}

/// Dilate `f` by `se` into a freshly allocated grid.
pub fn dilated<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<T>> {
    let mut out = f.like(T::zero());
    dilate(f, se, &mut out)?;
    Ok(out)
}
