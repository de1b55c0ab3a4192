//! Main N-dimensional grid type

use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, IxDyn};

use crate::array::element::GridElement;
use crate::array::position::{c_strides, flat_of, unflatten};
use crate::error::{Error, Result};

/// A dense N-dimensional grid of integer or boolean cells.
///
/// `Grid<T>` owns its data and addresses cells either by position (one
/// index per axis) or by C-order flat index. All operators in the
/// companion algorithms crate consume and produce grids.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`GridElement`]
///
/// # Example
///
/// ```
/// use ndmorph_core::Grid;
///
/// let mut grid: Grid<u8> = Grid::zeros(&[4, 4]);
/// grid.set(&[1, 2], 9).unwrap();
/// assert_eq!(grid.get(&[1, 2]).unwrap(), 9);
/// assert_eq!(grid.get_flat(6).unwrap(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: GridElement> {
    data: ArrayD<T>,
}

impl<T: GridElement> Grid<T> {
    /// Create a grid of the given shape filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::filled(shape, T::zero())
    }

    /// Create a grid of the given shape filled with a specific value
    pub fn filled(shape: &[usize], value: T) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a grid from a flat vector in C order
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        let array = ArrayD::from_shape_vec(IxDyn(shape), data)
            .map_err(|e| Error::InternalInvariant(e.to_string()))?;
        Ok(Self { data: array })
    }

    /// Create a grid from an existing ndarray.
    ///
    /// The array's layout is preserved; operations that require C order
    /// will reject grids built from non-standard-layout arrays.
    pub fn from_array(data: ArrayD<T>) -> Self {
        Self { data }
    }

    /// A grid with the same shape, filled with a value
    pub fn like(&self, value: T) -> Self {
        Self::filled(self.shape(), value)
    }

    // Dimensions

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Extent of every axis
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the backing memory is in C (row-major) order
    pub fn is_standard_layout(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// C-order strides of this grid's shape, in elements
    pub fn strides(&self) -> Vec<usize> {
        c_strides(self.shape())
    }

    // Data access

    /// Get value at a position
    pub fn get(&self, pos: &[usize]) -> Result<T> {
        self.data
            .get(IxDyn(pos))
            .copied()
            .ok_or_else(|| Error::IndexOutOfBounds {
                index: pos.to_vec(),
                shape: self.shape().to_vec(),
            })
    }

    /// Set value at a position
    pub fn set(&mut self, pos: &[usize], value: T) -> Result<()> {
        let shape = self.shape().to_vec();
        match self.data.get_mut(IxDyn(pos)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                index: pos.to_vec(),
                shape,
            }),
        }
    }

    /// Get value at a C-order flat index
    pub fn get_flat(&self, flat: usize) -> Result<T> {
        if flat >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index: vec![flat],
                shape: self.shape().to_vec(),
            });
        }
        match self.data.as_slice() {
            Some(slice) => Ok(slice[flat]),
            None => self.get(&unflatten(flat, self.shape())),
        }
    }

    /// Set value at a C-order flat index
    pub fn set_flat(&mut self, flat: usize, value: T) -> Result<()> {
        if flat >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index: vec![flat],
                shape: self.shape().to_vec(),
            });
        }
        if self.is_standard_layout() {
            if let Some(slice) = self.data.as_slice_mut() {
                slice[flat] = value;
                return Ok(());
            }
        }
        let pos = unflatten(flat, self.shape());
        self.set(&pos, value)
    }

    /// C-order flat index of a position
    pub fn flat_of(&self, pos: &[usize]) -> usize {
        flat_of(pos, &self.strides())
    }

    /// Position of a C-order flat index
    pub fn pos_of(&self, flat: usize) -> Vec<usize> {
        unflatten(flat, self.shape())
    }

    /// Whether a signed position lies within the grid
    pub fn contains(&self, pos: &[isize]) -> bool {
        pos.len() == self.ndim()
            && pos
                .iter()
                .zip(self.shape())
                .all(|(&p, &s)| p >= 0 && (p as usize) < s)
    }

    /// Fill every cell with a value
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Borrow the cells as a C-order slice
    pub fn as_slice(&self) -> Result<&[T]> {
        self.data
            .as_slice()
            .ok_or(Error::NotContiguous { what: "grid" })
    }

    /// Mutably borrow the cells as a C-order slice
    pub fn as_mut_slice(&mut self) -> Result<&mut [T]> {
        self.data
            .as_slice_mut()
            .ok_or(Error::NotContiguous { what: "grid" })
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayViewD<'_, T> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMutD<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> ArrayD<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ShapeBuilder;

    #[test]
    fn test_grid_creation() {
        let grid: Grid<u8> = Grid::zeros(&[3, 4, 5]);
        assert_eq!(grid.ndim(), 3);
        assert_eq!(grid.shape(), &[3, 4, 5]);
        assert_eq!(grid.len(), 60);
        assert!(grid.is_standard_layout());
    }

    #[test]
    fn test_grid_access() {
        let mut grid: Grid<i32> = Grid::zeros(&[4, 4]);
        grid.set(&[2, 3], 42).unwrap();
        assert_eq!(grid.get(&[2, 3]).unwrap(), 42);
        assert_eq!(grid.get_flat(11).unwrap(), 42);
        assert!(grid.get(&[4, 0]).is_err());
    }

    #[test]
    fn test_flat_position_roundtrip() {
        let grid: Grid<u8> = Grid::zeros(&[2, 3, 4]);
        for flat in 0..grid.len() {
            let pos = grid.pos_of(flat);
            assert_eq!(grid.flat_of(&pos), flat);
        }
    }

    #[test]
    fn test_from_vec_length_check() {
        assert!(Grid::<u8>::from_vec(&[2, 2], vec![1, 2, 3]).is_err());
        let grid = Grid::<u8>::from_vec(&[2, 2], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(&[1, 0]).unwrap(), 3);
    }

    #[test]
    fn test_contains_signed_positions() {
        let grid: Grid<u8> = Grid::zeros(&[3, 3]);
        assert!(grid.contains(&[0, 0]));
        assert!(grid.contains(&[2, 2]));
        assert!(!grid.contains(&[-1, 0]));
        assert!(!grid.contains(&[0, 3]));
    }

    #[test]
    fn test_non_standard_layout_is_rejected_as_slice() {
        let data = ArrayD::from_shape_vec(IxDyn(&[2, 3]).f(), vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let grid = Grid::from_array(data);
        assert!(!grid.is_standard_layout());
        assert!(grid.as_slice().is_err());
    }
}
