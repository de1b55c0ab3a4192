//! Greyscale and binary erosion
//!
//! Each output cell is the minimum of `erode_sub(neighbor, se_value)` over
//! the on-cells of the structuring element, with nearest-edge extension.
//! SE values act as subtrahends (a structuring function), so greyscale
//! erosion with a value-1 element reads each neighbor shifted down by one;
//! boolean erosion reduces to the classical AND over the neighborhood.

use crate::validate;
use ndmorph_core::array::position::next_pos;
use ndmorph_core::{Grid, GridElement, Neighborhood, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Erode one outermost slab: every cell sharing the leading index `row`.
/// Slabs are independent, so they can be computed on any thread.
fn erode_slab<T: GridElement>(
    row: usize,
    inner: usize,
    shape: &[usize],
    nb: &Neighborhood<T>,
    data: &[T],
) -> Vec<T> {
    let mut slab = vec![T::max_value(); inner];
    let mut pos = vec![0usize; shape.len()];
    pos[0] = row;

    for (j, cell) in slab.iter_mut().enumerate() {
        let flat = row * inner + j;
        let interior = nb.is_interior(&pos);
        let mut value = T::max_value();
        for off in nb.offsets() {
            let v = if interior {
                data[(flat as isize + off.flat) as usize]
            } else {
                data[nb.clipped_flat(&pos, off)]
            };
            let candidate = v.erode_sub(off.value);
            if candidate < value {
                value = candidate;
            }
        }
        *cell = value;
        next_pos(&mut pos[1..], &shape[1..]);
    }

    slab
}

/// Erode `f` by the structuring element `se`, writing into `out`.
///
/// `f` and `se` must share dimensionality; `f` and `out` must share shape.
/// Arguments are validated before the first write.
pub fn erode<T: GridElement>(f: &Grid<T>, se: &Grid<T>, out: &mut Grid<T>) -> Result<()> {
    validate::at_least_one_dim(f)?;
    validate::same_shape(f.shape(), out.shape())?;
    let nb = Neighborhood::new(se, f.shape(), true)?;
    let data = validate::contiguous(f, "operand")?;
    validate::require_layout(out, "output")?;

    let shape = f.shape().to_vec();
    let rows = shape[0];
    let inner: usize = shape[1..].iter().product();

    #[cfg(feature = "parallel")]
    let result: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| erode_slab(row, inner, &shape, &nb, data))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let result: Vec<T> = (0..rows)
        .flat_map(|row| erode_slab(row, inner, &shape, &nb, data))
        .collect();

    out.as_mut_slice()?.copy_from_slice(&result);
    Ok(())
}

/// Erode `f` by `se` into a freshly allocated grid.
pub fn eroded<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<T>> {
    let mut out = f.like(T::zero());
    erode(f, se, &mut out)?;
    Ok(out)
}
