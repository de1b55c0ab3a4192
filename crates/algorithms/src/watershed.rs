//! Seeded watershed segmentation
//!
//! Floods the operand from its marker cells with a min-priority queue,
//! processing cells in order of increasing altitude. Ties are broken by
//! insertion order, which makes the segmentation independent of the heap's
//! internal layout: fronts at equal altitude grow in lock-step and a
//! contested cell goes to whichever front enqueued it first.
//!
//! Neighbor addressing keeps a per-cell Chebyshev margin so that interior
//! cells can apply precomputed flat deltas directly; only cells near an
//! edge fall back to coordinate arithmetic with a range check.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::validate;
use ndmorph_core::array::position::{flat_of, margin_of, next_pos, unflatten};
use ndmorph_core::{Error, Grid, GridElement, Neighborhood, Result};

/// A queued cell, ordered for a min-heap on `(cost, idx)`.
#[derive(Debug, Clone)]
struct FloodCell<T> {
    cost: T,
    idx: u64,
    position: usize,
    margin: isize,
}

impl<T: GridElement> PartialEq for FloodCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.idx == other.idx
    }
}

impl<T: GridElement> Eq for FloodCell<T> {}

impl<T: GridElement> PartialOrd for FloodCell<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reverse ordering so BinaryHeap (max-heap) acts as a min-heap; equal costs
// drain in FIFO insertion order.
impl<T: GridElement> Ord for FloodCell<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// Constrained watershed of `f` seeded by `markers` under `se`-connectivity.
///
/// Nonzero marker cells are labels; each label floods its catchment basin
/// in order of increasing altitude. Returns the label grid and, when
/// `return_lines` is set, a boolean grid marking cells where two distinct
/// labels first met.
///
/// Cells unreachable from any marker keep label zero; with no markers at
/// all the result is entirely zero.
pub fn cwatershed<T: GridElement>(
    f: &Grid<T>,
    markers: &Grid<T>,
    se: &Grid<T>,
    return_lines: bool,
) -> Result<(Grid<T>, Option<Grid<bool>>)> {
    validate::at_least_one_dim(f)?;
    validate::same_shape(f.shape(), markers.shape())?;
    let nb = Neighborhood::new(se, f.shape(), true)?;
    let data = validate::contiguous(f, "operand")?;
    let marks = validate::contiguous(markers, "markers")?;

    let shape = f.shape().to_vec();
    let strides = f.strides();
    let n = f.len();

    // Offsets whose flat delta collapses to zero (the centre, and aliased
    // deltas on degenerate shapes) never move the front.
    let offsets: Vec<_> = nb.offsets().iter().filter(|o| o.flat != 0).collect();

    let mut cost = validate::try_filled_vec(T::max_value(), n)?;
    let mut status = validate::try_filled_vec(false, n)?;
    let mut res = Grid::zeros(&shape);
    let mut lines = if return_lines {
        Some(Grid::filled(&shape, false))
    } else {
        None
    };

    {
        let res_data = res.as_mut_slice()?;
        let mut lines_data = match lines.as_mut() {
            Some(grid) => Some(grid.as_mut_slice()?),
            None => None,
        };

        let mut heap: BinaryHeap<FloodCell<T>> = BinaryHeap::new();
        let mut idx: u64 = 0;

        let mut pos = vec![0usize; shape.len()];
        for flat in 0..n {
            if marks[flat] != T::zero() {
                heap.push(FloodCell {
                    cost: data[flat],
                    idx,
                    position: flat,
                    margin: margin_of(&pos, &shape) as isize,
                });
                idx += 1;
                res_data[flat] = marks[flat];
                cost[flat] = data[flat];
            }
            next_pos(&mut pos, &shape);
        }

        while let Some(cell) = heap.pop() {
            if status[cell.position] {
                continue;
            }
            status[cell.position] = true;

            for off in &offsets {
                let mut nmargin = cell.margin - off.chebyshev as isize;
                let nflat = if nmargin < 0 {
                    let ppos = unflatten(cell.position, &shape);
                    let mut qpos = Vec::with_capacity(shape.len());
                    let mut inside = true;
                    for d in 0..shape.len() {
                        let q = ppos[d] as isize + off.delta[d];
                        if q < 0 || q >= shape[d] as isize {
                            inside = false;
                            break;
                        }
                        qpos.push(q as usize);
                    }
                    if !inside {
                        continue;
                    }
                    // The margin estimate was pessimistic; recompute.
                    nmargin = margin_of(&qpos, &shape) as isize;
                    flat_of(&qpos, &strides)
                } else {
                    (cell.position as isize + off.flat) as usize
                };

                if nflat >= n {
                    return Err(Error::InternalInvariant(format!(
                        "watershed neighbor index {nflat} out of range for {n} cells"
                    )));
                }

                if !status[nflat] {
                    let ncost = data[nflat];
                    if ncost < cost[nflat] {
                        cost[nflat] = ncost;
                        res_data[nflat] = res_data[cell.position];
                        heap.push(FloodCell {
                            cost: ncost,
                            idx,
                            position: nflat,
                            margin: nmargin,
                        });
                        idx += 1;
                    } else if let Some(lines_data) = lines_data.as_deref_mut() {
                        if res_data[cell.position] != res_data[nflat] && !lines_data[nflat] {
                            lines_data[nflat] = true;
                        }
                    }
                }
            }
        }
    }

    Ok((res, lines))
}
