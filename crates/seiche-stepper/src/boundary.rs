//! Boundary policy applied by both steppers.

use seiche_core::Field2;

/// How the outermost mesh points are treated.
///
/// The policy is part of the solve configuration and is applied
/// uniformly regardless of execution strategy, so switching stepper
/// never switches boundary behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryCondition {
    /// Zero displacement on the boundary (`u = 0`), the published
    /// contract of the solver. Boundary entries of every computed level
    /// are exactly 0.
    #[default]
    Dirichlet,
    /// Zero-flux reflection: an out-of-range stencil neighbour mirrors
    /// to the adjacent interior index, and boundary points are updated
    /// by the same law as the interior.
    Reflective,
}

/// Mirrored stencil neighbours of index `i` on an axis whose last valid
/// index is `last`: `(i-1, i+1)` in the interior, reflected inward at
/// the ends.
#[inline]
pub(crate) fn mirror(i: usize, last: usize) -> (usize, usize) {
    let lo = if i == 0 { 1 } else { i - 1 };
    let hi = if i == last { last - 1 } else { i + 1 };
    (lo, hi)
}

/// Set every boundary entry of `field` to zero.
pub(crate) fn clamp_edges_to_zero(field: &mut Field2) {
    let (rows, cols) = field.shape();
    field.row_mut(0).fill(0.0);
    field.row_mut(rows - 1).fill(0.0);
    for i in 1..rows - 1 {
        let row = field.row_mut(i);
        row[0] = 0.0;
        row[cols - 1] = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reflects_at_both_ends() {
        assert_eq!(mirror(0, 4), (1, 1));
        assert_eq!(mirror(4, 4), (3, 3));
        assert_eq!(mirror(2, 4), (1, 3));
    }

    #[test]
    fn mirror_on_single_cell_axis() {
        assert_eq!(mirror(0, 1), (1, 1));
        assert_eq!(mirror(1, 1), (0, 0));
    }

    #[test]
    fn clamp_zeroes_exactly_the_edges() {
        let mut f = Field2::from_fn(4, 5, |_, _| 7.0);
        clamp_edges_to_zero(&mut f);
        for i in 0..4 {
            for j in 0..5 {
                let on_edge = i == 0 || i == 3 || j == 0 || j == 4;
                assert_eq!(f[(i, j)], if on_edge { 0.0 } else { 7.0 }, "({i},{j})");
            }
        }
    }

    #[test]
    fn default_policy_is_dirichlet() {
        assert_eq!(BoundaryCondition::default(), BoundaryCondition::Dirichlet);
    }
}
