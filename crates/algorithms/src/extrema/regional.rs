//! Regional minima and maxima detection
//!
//! A regional extremum is a connected plateau of local extrema with no
//! strictly better cell adjacent to it. The local pass marks every plateau;
//! the cleanup pass flood-fills away plateaus that leak: an unmarked
//! neighbor at an equal-or-better value means a descending path exists out
//! of the plateau, so the whole connected component is cleared. The
//! non-strict comparison is deliberate, because an equal-valued unmarked
//! neighbor cannot itself be an extremum.

use super::local::locmin_max;
use crate::validate;
use ndmorph_core::array::position::{next_pos, unflatten};
use ndmorph_core::{Grid, GridElement, Neighborhood, Result};

/// Mark regional extrema of `f` under `se` into the boolean grid `out`.
///
/// With `is_min` true, minima are detected; otherwise maxima. `out` must be
/// C-contiguous and share `f`'s shape.
pub fn regmin_max<T: GridElement>(
    f: &Grid<T>,
    se: &Grid<T>,
    is_min: bool,
    out: &mut Grid<bool>,
) -> Result<()> {
    locmin_max(f, se, is_min, out)?;
    remove_spurious_extrema(f, se, is_min, out)
}

/// Regional minima of `f` under `se`, into a fresh boolean grid.
pub fn regmin<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<bool>> {
    let mut out = Grid::zeros(f.shape());
    regmin_max(f, se, true, &mut out)?;
    Ok(out)
}

/// Regional maxima of `f` under `se`, into a fresh boolean grid.
pub fn regmax<T: GridElement>(f: &Grid<T>, se: &Grid<T>) -> Result<Grid<bool>> {
    let mut out = Grid::zeros(f.shape());
    regmin_max(f, se, false, &mut out)?;
    Ok(out)
}

/// Clear every marked plateau adjacent to an unmarked cell holding an
/// equal-or-better value. Connectivity is the SE without its centre; no
/// boundary extension is applied (out-of-range neighbors are skipped).
fn remove_spurious_extrema<T: GridElement>(
    f: &Grid<T>,
    se: &Grid<T>,
    is_min: bool,
    out: &mut Grid<bool>,
) -> Result<()> {
    let nb = Neighborhood::new(se, f.shape(), false)?;
    let data = validate::contiguous(f, "operand")?;
    let marked = out.as_mut_slice()?;
    let shape = f.shape().to_vec();

    let mut stack: Vec<usize> = Vec::new();
    let mut pos = vec![0usize; shape.len()];
    for (flat, &val) in data.iter().enumerate() {
        if marked[flat] {
            for off in nb.offsets() {
                let Some(q) = nb.checked_flat(&pos, off) else {
                    continue;
                };
                let leaks = if is_min {
                    data[q] <= val
                } else {
                    data[q] >= val
                };
                if !marked[q] && leaks {
                    marked[flat] = false;
                    stack.push(flat);
                    while let Some(p) = stack.pop() {
                        let ppos = unflatten(p, &shape);
                        for off2 in nb.offsets() {
                            if let Some(r) = nb.checked_flat(&ppos, off2) {
                                if marked[r] {
                                    marked[r] = false;
                                    stack.push(r);
                                }
                            }
                        }
                    }
                    break;
                }
            }
        }
        next_pos(&mut pos, &shape);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrema::locmin;
    use ndmorph_core::{box_element, cross};

    #[test]
    fn test_plateau_with_no_lower_neighbor_qualifies() {
        let f = Grid::from_vec(&[3, 3], vec![1u8, 1, 2, 1, 1, 2, 2, 2, 2]).unwrap();
        let out = regmin(&f, &cross::<u8>(2)).unwrap();
        let expected = vec![true, true, false, true, true, false, false, false, false];
        assert_eq!(out.as_slice().unwrap(), &expected[..]);
    }

    #[test]
    fn test_leaking_plateau_is_cleared() {
        // The 2-plateau in the middle row is a local-minimum plateau under
        // the cross except where it touches the 1; the descending path
        // disqualifies the entire component.
        let f = Grid::from_vec(&[3, 4], vec![5u8, 5, 5, 5, 2, 2, 2, 1, 5, 5, 5, 5]).unwrap();
        let out = regmin(&f, &cross::<u8>(2)).unwrap();
        assert!(!out.get(&[1, 0]).unwrap());
        assert!(!out.get(&[1, 1]).unwrap());
        assert!(!out.get(&[1, 2]).unwrap());
        assert!(out.get(&[1, 3]).unwrap(), "the 1 itself is regional");
    }

    #[test]
    fn test_regional_subset_of_local() {
        let f = Grid::from_vec(
            &[4, 4],
            vec![3u8, 3, 8, 8, 3, 3, 8, 2, 8, 8, 8, 8, 2, 8, 8, 8],
        )
        .unwrap();
        let se = box_element::<u8>(2);
        let local = locmin(&f, &se).unwrap();
        let regional = regmin(&f, &se).unwrap();
        for flat in 0..f.len() {
            let l = local.get_flat(flat).unwrap();
            let r = regional.get_flat(flat).unwrap();
            assert!(!r || l, "regional extremum not locally extremal at {flat}");
        }
    }

    #[test]
    fn test_regmax_single_peak() {
        let mut f: Grid<i32> = Grid::zeros(&[5, 5]);
        f.set(&[2, 2], 10).unwrap();
        f.set(&[0, 0], 4).unwrap();
        let out = regmax(&f, &box_element::<i32>(2)).unwrap();
        assert!(out.get(&[2, 2]).unwrap());
        assert!(out.get(&[0, 0]).unwrap(), "secondary peak is also regional");
        assert!(!out.get(&[1, 1]).unwrap());
    }

    #[test]
    fn test_global_plateau_is_regional() {
        let f: Grid<u8> = Grid::filled(&[3, 3], 7);
        let out = regmin(&f, &box_element::<u8>(2)).unwrap();
        assert!(out.as_slice().unwrap().iter().all(|&v| v));
    }
}
