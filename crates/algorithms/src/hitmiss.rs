//! Hit-or-miss transform
//!
//! Matches a ternary template at every cell: structuring-element cells with
//! value 0 require background, 1 requires foreground, 2 means don't care.
//! Unlike the other operators there is no boundary extension: output is
//! forced to zero wherever the template would overhang an edge.
//!
//! The probe list is visited in shuffled order so that mismatches are found
//! early on structured inputs; the shuffle is not observable in the output.

use num_traits::NumCast;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::validate;
use ndmorph_core::array::position::{c_strides, center_of, next_pos};
use ndmorph_core::{Error, Grid, GridElement, Result};

struct Probe<T> {
    flat: isize,
    value: T,
}

/// Apply the hit-or-miss transform of the ternary template `se` to `f`,
/// writing 0/1 into `out`.
pub fn hitmiss<T: GridElement + NumCast>(f: &Grid<T>, se: &Grid<T>, out: &mut Grid<T>) -> Result<()> {
    validate::at_least_one_dim(f)?;
    validate::same_shape(f.shape(), out.shape())?;
    if se.ndim() != f.ndim() {
        return Err(Error::DimensionMismatch {
            expected: f.ndim(),
            actual: se.ndim(),
        });
    }
    let data = validate::contiguous(f, "operand")?;
    validate::require_layout(out, "output")?;

    let shape = f.shape().to_vec();
    let strides = c_strides(&shape);
    let se_shape = se.shape().to_vec();
    let center = center_of(&se_shape);
    let radius: Vec<usize> = se_shape.iter().map(|&s| s / 2).collect();
    let dont_care: Option<T> = NumCast::from(2u8);

    let mut probes: Vec<Probe<T>> = Vec::new();
    let mut se_pos = vec![0usize; se_shape.len()];
    for se_flat in 0..se.len() {
        let value = se.get_flat(se_flat)?;
        if dont_care != Some(value) {
            let flat: isize = se_pos
                .iter()
                .zip(&center)
                .zip(&strides)
                .map(|((&p, &c), &s)| (p as isize - c as isize) * s as isize)
                .sum();
            probes.push(Probe { flat, value });
        }
        next_pos(&mut se_pos, &se_shape);
    }
    probes.shuffle(&mut thread_rng());

    let res = out.as_mut_slice()?;
    let mut pos = vec![0usize; shape.len()];
    for flat in 0..data.len() {
        let interior = pos
            .iter()
            .zip(&shape)
            .zip(&radius)
            .all(|((&p, &s), &r)| p >= r && p + r < s);
        res[flat] = if interior {
            let mut value = T::one();
            for probe in &probes {
                if data[(flat as isize + probe.flat) as usize] != probe.value {
                    value = T::zero();
                    break;
                }
            }
            value
        } else {
            T::zero()
        };
        next_pos(&mut pos, &shape);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn isolated_point() -> Grid<u8> {
        Grid::from_vec(&[5, 5], {
            let mut v = vec![0u8; 25];
            v[12] = 1;
            v
        })
        .unwrap()
    }

    /// Template matching an isolated foreground pixel: foreground centre,
    /// background at the four cardinal neighbors, corners free.
    fn point_template() -> Grid<u8> {
        Grid::from_vec(&[3, 3], vec![2u8, 0, 2, 0, 1, 0, 2, 0, 2]).unwrap()
    }

    #[test]
    fn test_matches_isolated_point() {
        let f = isolated_point();
        let mut out = f.like(0);
        hitmiss(&f, &point_template(), &mut out).unwrap();
        for flat in 0..25 {
            let expected = <u8 as From<bool>>::from(flat == 12);
            assert_eq!(out.get_flat(flat).unwrap(), expected, "cell {flat}");
        }
    }

    #[test]
    fn test_no_match_when_neighbor_occupied() {
        let mut f = isolated_point();
        f.set(&[2, 3], 1).unwrap();
        let mut out = f.like(0);
        hitmiss(&f, &point_template(), &mut out).unwrap();
        assert_eq!(out.get(&[2, 2]).unwrap(), 0);
    }

    #[test]
    fn test_dont_care_ignores_corners() {
        let mut f = isolated_point();
        f.set(&[1, 1], 1).unwrap();
        f.set(&[3, 3], 1).unwrap();
        let mut out = f.like(0);
        hitmiss(&f, &point_template(), &mut out).unwrap();
        assert_eq!(out.get(&[2, 2]).unwrap(), 1, "corners are don't-care");
    }

    #[test]
    fn test_border_forced_to_zero() {
        // All-ones template over an all-ones grid matches everywhere the
        // window fits, but never on the border.
        let f: Grid<u8> = Grid::filled(&[4, 4], 1);
        let se: Grid<u8> = Grid::filled(&[3, 3], 1);
        let mut out = f.like(0);
        hitmiss(&f, &se, &mut out).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                let expected =
                    <u8 as From<bool>>::from((1..3).contains(&row) && (1..3).contains(&col));
                assert_eq!(out.get(&[row, col]).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_output_deterministic_despite_shuffle() {
        let f = isolated_point();
        let mut first = f.like(0);
        hitmiss(&f, &point_template(), &mut first).unwrap();
        for _ in 0..5 {
            let mut again = f.like(0);
            hitmiss(&f, &point_template(), &mut again).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_1d_edge_template() {
        // Rising edge: background then foreground.
        let f = Grid::from_vec(&[6], vec![0i16, 0, 1, 1, 0, 1]).unwrap();
        let se = Grid::from_vec(&[3], vec![0i16, 1, 2]).unwrap();
        let mut out = f.like(0);
        hitmiss(&f, &se, &mut out).unwrap();
        assert_eq!(out.as_slice().unwrap(), &[0, 0, 1, 0, 0, 0]);
    }
}
