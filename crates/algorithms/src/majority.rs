//! Boolean majority filter
//!
//! Slides an `n x n` window over a 2-D mask and marks the window centre
//! when at least `floor(n^2 / 2)` cells are set. The border of width
//! `floor(n / 2)` is left false, and inputs smaller than the window
//! produce an all-false output.

use crate::validate;
use ndmorph_core::{Error, Grid, Result};

/// Apply an `n x n` majority filter to the 2-D mask `f`, writing into `out`.
///
/// `out` must be C-contiguous and share `f`'s shape.
pub fn majority_filter(f: &Grid<bool>, n: usize, out: &mut Grid<bool>) -> Result<()> {
    if f.ndim() != 2 {
        return Err(Error::DimensionMismatch {
            expected: 2,
            actual: f.ndim(),
        });
    }
    if n == 0 {
        return Err(Error::InvalidWindow { size: n });
    }
    validate::same_shape(f.shape(), out.shape())?;
    let data = validate::contiguous(f, "operand")?;
    validate::require_layout(out, "output")?;

    out.fill(false);
    let rows = f.shape()[0];
    let cols = f.shape()[1];
    if rows < n || cols < n {
        return Ok(());
    }

    let threshold = n * n / 2;
    let res = out.as_mut_slice()?;
    for y in 0..rows - n {
        for x in 0..cols - n {
            let mut count = 0usize;
            for dy in 0..n {
                for dx in 0..n {
                    if data[(y + dy) * cols + (x + dx)] {
                        count += 1;
                    }
                }
            }
            if count >= threshold {
                res[(y + n / 2) * cols + (x + n / 2)] = true;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_interior_block() {
        // True only on the 3x3 interior of a 5x5 mask. Every window start
        // overlapping the block by at least 4 of 9 cells wins the vote.
        let mut f: Grid<bool> = Grid::zeros(&[5, 5]);
        for row in 1..4 {
            for col in 1..4 {
                f.set(&[row, col], true).unwrap();
            }
        }
        let mut out = f.like(false);
        majority_filter(&f, 3, &mut out).unwrap();
        let winners = [6usize, 7, 11, 12];
        for flat in 0..25 {
            let expected = winners.contains(&flat);
            assert_eq!(out.get_flat(flat).unwrap(), expected, "cell {flat}");
        }
    }

    #[test]
    fn test_majority_threshold() {
        // n = 3 needs at least 4 of 9 cells set.
        let mut f: Grid<bool> = Grid::zeros(&[7, 7]);
        f.set(&[1, 1], true).unwrap();
        f.set(&[1, 2], true).unwrap();
        f.set(&[2, 1], true).unwrap();
        let mut out = f.like(false);
        majority_filter(&f, 3, &mut out).unwrap();
        assert!(!out.get(&[2, 2]).unwrap(), "three votes is below threshold");

        f.set(&[2, 2], true).unwrap();
        majority_filter(&f, 3, &mut out).unwrap();
        assert!(out.get(&[2, 2]).unwrap(), "four votes reaches threshold");
    }

    #[test]
    fn test_majority_border_is_false() {
        let f: Grid<bool> = Grid::filled(&[6, 6], true);
        let mut out = f.like(false);
        majority_filter(&f, 3, &mut out).unwrap();
        for i in 0..6 {
            assert!(!out.get(&[0, i]).unwrap());
            assert!(!out.get(&[i, 0]).unwrap());
        }
        assert!(out.get(&[2, 2]).unwrap());
    }

    #[test]
    fn test_input_smaller_than_window() {
        let f: Grid<bool> = Grid::filled(&[2, 2], true);
        let mut out = f.like(true);
        majority_filter(&f, 3, &mut out).unwrap();
        assert!(out.as_slice().unwrap().iter().all(|&v| !v));
    }

    #[test]
    fn test_rejects_non_2d_and_zero_window() {
        let f: Grid<bool> = Grid::zeros(&[3, 3, 3]);
        let mut out = f.like(false);
        assert!(matches!(
            majority_filter(&f, 3, &mut out),
            Err(Error::DimensionMismatch { .. })
        ));

        let f: Grid<bool> = Grid::zeros(&[3, 3]);
        let mut out = f.like(false);
        assert!(matches!(
            majority_filter(&f, 0, &mut out),
            Err(Error::InvalidWindow { .. })
        ));
    }
}
