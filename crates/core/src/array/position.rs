//! Position and flat-index arithmetic for C-ordered grids

/// Compute C-order (row-major) strides, in elements, for a shape.
pub fn c_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1usize; shape.len()];
    for d in (0..shape.len().saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * shape[d + 1];
    }
    strides
}

/// Flat index of a position under the given strides.
pub fn flat_of(pos: &[usize], strides: &[usize]) -> usize {
    pos.iter().zip(strides).map(|(&p, &s)| p * s).sum()
}

/// Position of a C-order flat index within a shape.
pub fn unflatten(mut flat: usize, shape: &[usize]) -> Vec<usize> {
    let mut pos = vec![0usize; shape.len()];
    for d in (0..shape.len()).rev() {
        if shape[d] > 0 {
            pos[d] = flat % shape[d];
            flat /= shape[d];
        }
    }
    pos
}

/// Centre of a shape, `floor(shape / 2)` coordinate-wise.
pub fn center_of(shape: &[usize]) -> Vec<usize> {
    shape.iter().map(|&s| s / 2).collect()
}

/// Chebyshev distance from a position to the nearest edge of the grid.
///
/// A cell with margin `m` can be offset by any delta of Chebyshev norm
/// at most `m` without leaving the grid.
pub fn margin_of(pos: &[usize], shape: &[usize]) -> usize {
    pos.iter()
        .zip(shape)
        .map(|(&p, &s)| p.min(s - 1 - p))
        .min()
        .unwrap_or(0)
}

/// Advance a position to the next cell in C order.
///
/// Returns false once the position wraps back to all zeros.
pub fn next_pos(pos: &mut [usize], shape: &[usize]) -> bool {
    for d in (0..shape.len()).rev() {
        pos[d] += 1;
        if pos[d] < shape[d] {
            return true;
        }
        pos[d] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_strides() {
        assert_eq!(c_strides(&[4, 3, 2]), vec![6, 2, 1]);
        assert_eq!(c_strides(&[5]), vec![1]);
        assert_eq!(c_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_flat_roundtrip() {
        let shape = [4, 3, 2];
        let strides = c_strides(&shape);
        for flat in 0..24 {
            let pos = unflatten(flat, &shape);
            assert_eq!(flat_of(&pos, &strides), flat);
        }
    }

    #[test]
    fn test_center_of() {
        assert_eq!(center_of(&[3, 3]), vec![1, 1]);
        assert_eq!(center_of(&[4, 5]), vec![2, 2]);
        assert_eq!(center_of(&[1]), vec![0]);
    }

    #[test]
    fn test_margin_of() {
        assert_eq!(margin_of(&[0, 2], &[5, 5]), 0);
        assert_eq!(margin_of(&[2, 2], &[5, 5]), 2);
        assert_eq!(margin_of(&[2, 3], &[5, 5]), 1);
        assert_eq!(margin_of(&[4, 4], &[5, 5]), 0);
    }

    #[test]
    fn test_next_pos_covers_all_cells_in_c_order() {
        let shape = [2, 3];
        let mut pos = vec![0, 0];
        let mut seen = vec![pos.clone()];
        while next_pos(&mut pos, &shape) {
            seen.push(pos.clone());
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], vec![0, 0]);
        assert_eq!(seen[1], vec![0, 1]);
        assert_eq!(seen[3], vec![1, 0]);
        assert_eq!(seen[5], vec![1, 2]);
    }
}
