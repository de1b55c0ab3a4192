//! Shared argument validation helpers
//!
//! Every operator validates shapes, dimensionality, and layout before its
//! first write, so failed calls leave outputs untouched.

use ndmorph_core::{Error, Grid, GridElement, Result};

/// Require two shapes to be identical.
pub(crate) fn same_shape(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected != actual {
        return Err(Error::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    Ok(())
}

/// Require at least one axis; zero-dimensional grids have no neighborhood
/// structure to traverse.
pub(crate) fn at_least_one_dim<T: GridElement>(grid: &Grid<T>) -> Result<()> {
    if grid.ndim() == 0 {
        return Err(Error::DimensionMismatch {
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

/// Require C layout without borrowing the cells yet.
pub(crate) fn require_layout<T: GridElement>(grid: &Grid<T>, what: &'static str) -> Result<()> {
    if !grid.is_standard_layout() {
        return Err(Error::NotContiguous { what });
    }
    Ok(())
}

/// Borrow the cells of a C-layout grid.
pub(crate) fn contiguous<'a, T: GridElement>(
    grid: &'a Grid<T>,
    what: &'static str,
) -> Result<&'a [T]> {
    grid.as_slice().map_err(|_| Error::NotContiguous { what })
}

/// Allocate a filled scratch vector, surfacing allocation failure as an
/// error instead of aborting.
pub(crate) fn try_filled_vec<T: Clone>(value: T, len: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| Error::AllocationFailure {
        bytes: len * std::mem::size_of::<T>(),
    })?;
    v.resize(len, value);
    Ok(v)
}
