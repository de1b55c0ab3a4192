//! Structuring elements and neighborhood traversal
//!
//! A structuring element (SE) is a small grid of the same dimensionality as
//! the operand; its nonzero cells define the neighborhood offsets of every
//! operand cell. [`Neighborhood`] precomputes those offsets against a
//! concrete operand shape: the coordinate delta, the C-order flat delta, the
//! cell value, and the Chebyshev norm of the delta.
//!
//! Neighbor retrieval uses nearest-edge extension: out-of-range coordinates
//! are clipped to the valid range, axis by axis. In the interior of the
//! operand (further than the SE radius from every edge) the flat delta can
//! be applied directly; [`Neighborhood::is_interior`] distinguishes the two
//! cases and both paths agree wherever both are valid.

use crate::array::element::GridElement;
use crate::array::grid::Grid;
use crate::array::position::{c_strides, center_of, next_pos};
use crate::error::{Error, Result};

/// A single "on" cell of a structuring element, relative to its centre.
#[derive(Debug, Clone)]
pub struct NeighborOffset<T> {
    /// Coordinate offset from the SE centre, one entry per axis
    pub delta: Vec<isize>,
    /// Flat-index offset under the operand's C-order strides
    pub flat: isize,
    /// Value of the SE cell
    pub value: T,
    /// Chebyshev norm of `delta`
    pub chebyshev: usize,
}

/// Precomputed neighborhood of a structuring element over an operand shape.
#[derive(Debug, Clone)]
pub struct Neighborhood<T: GridElement> {
    offsets: Vec<NeighborOffset<T>>,
    radius: Vec<usize>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: GridElement> Neighborhood<T> {
    /// Build the neighborhood of `element` over an operand of shape `shape`.
    ///
    /// A cell participates iff its value is nonzero. The centre cell is
    /// kept only when `include_center` is true; connectivity-style
    /// operators (flood fills, watershed) exclude it.
    pub fn new(element: &Grid<T>, shape: &[usize], include_center: bool) -> Result<Self> {
        if element.ndim() != shape.len() {
            return Err(Error::DimensionMismatch {
                expected: shape.len(),
                actual: element.ndim(),
            });
        }
        if element.is_empty() {
            return Err(Error::EmptyElement);
        }

        let strides = c_strides(shape);
        let se_shape = element.shape().to_vec();
        let center = center_of(&se_shape);
        let radius: Vec<usize> = se_shape.iter().map(|&s| s / 2).collect();

        let mut offsets = Vec::new();
        let mut pos = vec![0usize; se_shape.len()];
        for flat in 0..element.len() {
            let value = element.get_flat(flat)?;
            let is_center = pos == center;
            if value != T::zero() && (include_center || !is_center) {
                let delta: Vec<isize> = pos
                    .iter()
                    .zip(&center)
                    .map(|(&p, &c)| p as isize - c as isize)
                    .collect();
                let flat_delta: isize = delta
                    .iter()
                    .zip(&strides)
                    .map(|(&d, &s)| d * s as isize)
                    .sum();
                let chebyshev = delta.iter().map(|d| d.unsigned_abs()).max().unwrap_or(0);
                offsets.push(NeighborOffset {
                    delta,
                    flat: flat_delta,
                    value,
                    chebyshev,
                });
            }
            next_pos(&mut pos, &se_shape);
        }

        Ok(Self {
            offsets,
            radius,
            shape: shape.to_vec(),
            strides,
        })
    }

    /// The on-offsets of the structuring element
    pub fn offsets(&self) -> &[NeighborOffset<T>] {
        &self.offsets
    }

    /// Number of on-offsets
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the element has no on-cells
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Per-axis SE radius, `floor(se_shape / 2)`
    pub fn radius(&self) -> &[usize] {
        &self.radius
    }

    /// True when every offset applied at `pos` stays in range, so flat
    /// deltas can be used without clipping.
    pub fn is_interior(&self, pos: &[usize]) -> bool {
        pos.iter()
            .zip(&self.shape)
            .zip(&self.radius)
            .all(|((&p, &s), &r)| p >= r && p + r < s)
    }

    /// Flat index of `pos + offset` under nearest-edge extension.
    pub fn clipped_flat(&self, pos: &[usize], offset: &NeighborOffset<T>) -> usize {
        let mut flat = 0usize;
        for d in 0..pos.len() {
            let q = (pos[d] as isize + offset.delta[d]).clamp(0, self.shape[d] as isize - 1);
            flat += q as usize * self.strides[d];
        }
        flat
    }

    /// Flat index of `pos + offset`, or None when it falls outside the grid.
    pub fn checked_flat(&self, pos: &[usize], offset: &NeighborOffset<T>) -> Option<usize> {
        let mut flat = 0usize;
        for d in 0..pos.len() {
            let q = pos[d] as isize + offset.delta[d];
            if q < 0 || q >= self.shape[d] as isize {
                return None;
            }
            flat += q as usize * self.strides[d];
        }
        Some(flat)
    }
}

/// The full 3^ndim structuring element (all cells on).
pub fn box_element<T: GridElement>(ndim: usize) -> Grid<T> {
    Grid::filled(&vec![3; ndim], T::one())
}

/// The 3^ndim cross: centre plus its immediate neighbor along each axis.
pub fn cross<T: GridElement>(ndim: usize) -> Grid<T> {
    let size = 3usize;
    let total = size.pow(ndim as u32);
    let mut data = vec![T::zero(); total];
    let center = total / 2;
    data[center] = T::one();
    for ax in 0..ndim {
        let stride = size.pow((ndim - 1 - ax) as u32);
        data[center - stride] = T::one();
        data[center + stride] = T::one();
    }
    Grid::from_vec(&vec![3; ndim], data).expect("3^ndim buffer matches shape")
}
