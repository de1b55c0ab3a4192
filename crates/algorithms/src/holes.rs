//! Hole closing for binary masks
//!
//! A hole is a background component with no path to the grid border under
//! the structuring element's connectivity. The algorithm flood-fills the
//! background from every border cell with an explicit stack and returns the
//! complement of the reached set: foreground plus enclosed holes.

use crate::validate;
use ndmorph_core::array::position::{next_pos, unflatten};
use ndmorph_core::{Grid, Neighborhood, Result};

/// Close the holes of the boolean mask `reference` under `se`-connectivity.
///
/// Returns a new mask that is true on foreground cells and on background
/// cells not reachable from the border, and false on border-connected
/// background.
pub fn close_holes(reference: &Grid<bool>, se: &Grid<bool>) -> Result<Grid<bool>> {
    validate::at_least_one_dim(reference)?;
    let nb = Neighborhood::new(se, reference.shape(), false)?;
    let data = validate::contiguous(reference, "reference")?;
    let shape = reference.shape().to_vec();
    let n = reference.len();

    let mut reached = validate::try_filled_vec(false, n)?;
    let mut stack: Vec<usize> = Vec::new();

    // Seed with background cells on any hyperface; each cell is pushed at
    // most once regardless of how many faces it lies on.
    let mut pos = vec![0usize; shape.len()];
    for flat in 0..n {
        let on_border = pos.iter().zip(&shape).any(|(&p, &s)| p == 0 || p + 1 == s);
        if on_border && !data[flat] && !reached[flat] {
            reached[flat] = true;
            stack.push(flat);
        }
        next_pos(&mut pos, &shape);
    }

    while let Some(p) = stack.pop() {
        let ppos = unflatten(p, &shape);
        for off in nb.offsets() {
            if let Some(q) = nb.checked_flat(&ppos, off) {
                if !data[q] && !reached[q] {
                    reached[q] = true;
                    stack.push(q);
                }
            }
        }
    }

    let filled: Vec<bool> = reached.iter().map(|&r| !r).collect();
    Grid::from_vec(&shape, filled)
}
