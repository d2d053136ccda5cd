//! Execution context passed to steppers.

use crate::boundary::BoundaryCondition;
use crate::coeffs::{StepKind, UpdateCoeffs};
use seiche_core::{Field2, Problem, StepError, StepId};
use seiche_grid::Grid2;

/// Everything one step needs, assembled by the engine.
///
/// Holds shared borrows of the mesh, the sampled coefficient field, the
/// two read levels and the problem, plus the mutable write target. The
/// split-borrow accessor [`parts()`](StepContext::parts) hands a
/// stepper its read-only inputs and the output buffer simultaneously;
/// the type system guarantees the inputs cannot alias the output.
pub struct StepContext<'a> {
    grid: &'a Grid2,
    q: &'a Field2,
    problem: &'a Problem,
    previous: &'a Field2,
    current: &'a Field2,
    out: &'a mut Field2,
    coeffs: UpdateCoeffs,
    boundary: BoundaryCondition,
    t: f64,
    step: StepId,
    kind: StepKind,
}

/// The read-only half of a split [`StepContext`].
pub struct StepInputs<'c> {
    /// The mesh.
    pub grid: &'c Grid2,
    /// Squared wave speed sampled at every mesh point.
    pub q: &'c Field2,
    /// The continuous problem (source and initial-velocity terms).
    pub problem: &'c Problem,
    /// Level `n-1`.
    pub previous: &'c Field2,
    /// Level `n`.
    pub current: &'c Field2,
    /// Coefficients for this step's regime.
    pub coeffs: UpdateCoeffs,
    /// Boundary policy.
    pub boundary: BoundaryCondition,
    /// Time `t_n` the source term is evaluated at.
    pub t: f64,
    /// Regime marker.
    pub kind: StepKind,
}

impl<'a> StepContext<'a> {
    /// Assemble a context for one step.
    ///
    /// Coefficients are derived here from `dt`, the mesh spacings and
    /// the problem's damping. Typically called by the engine; tests
    /// construct contexts directly around hand-built fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grid: &'a Grid2,
        q: &'a Field2,
        problem: &'a Problem,
        previous: &'a Field2,
        current: &'a Field2,
        out: &'a mut Field2,
        boundary: BoundaryCondition,
        dt: f64,
        t: f64,
        step: StepId,
        kind: StepKind,
    ) -> Self {
        let coeffs = UpdateCoeffs::new(kind, dt, grid.dx(), grid.dy(), problem.damping());
        Self {
            grid,
            q,
            problem,
            previous,
            current,
            out,
            coeffs,
            boundary,
            t,
            step,
            kind,
        }
    }

    /// Verify that every buffer matches the mesh shape.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ShapeMismatch`] naming the first offending
    /// buffer.
    pub fn check_shapes(&self) -> Result<(), StepError> {
        let expected = self.grid.shape();
        for found in [
            self.q.shape(),
            self.previous.shape(),
            self.current.shape(),
            self.out.shape(),
        ] {
            if found != expected {
                return Err(StepError::ShapeMismatch { expected, found });
            }
        }
        Ok(())
    }

    /// Split into read-only inputs and the write target.
    pub fn parts(&mut self) -> (StepInputs<'_>, &mut Field2) {
        (
            StepInputs {
                grid: self.grid,
                q: self.q,
                problem: self.problem,
                previous: self.previous,
                current: self.current,
                coeffs: self.coeffs,
                boundary: self.boundary,
                t: self.t,
                kind: self.kind,
            },
            self.out,
        )
    }

    /// Step index of the level being computed.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// Coefficients for this step.
    pub fn coeffs(&self) -> UpdateCoeffs {
        self.coeffs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        Problem::builder()
            .initial(|_, _| 0.0)
            .uniform_speed_squared(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn coeffs_derive_from_grid_and_dt() {
        let grid = Grid2::new(1.0, 2.0, 2, 4).unwrap();
        let problem = problem();
        let q = grid.sample(|_, _| 1.0);
        let prev = Field2::zeros(3, 5);
        let cur = Field2::zeros(3, 5);
        let mut out = Field2::zeros(3, 5);
        let ctx = StepContext::new(
            &grid,
            &q,
            &problem,
            &prev,
            &cur,
            &mut out,
            BoundaryCondition::Dirichlet,
            0.1,
            0.0,
            StepId(1),
            StepKind::Subsequent,
        );
        assert_eq!(ctx.coeffs().cx2, (0.1 / 0.5) * (0.1 / 0.5));
        assert_eq!(ctx.coeffs().cy2, (0.1 / 0.5) * (0.1 / 0.5));
        assert_eq!(ctx.step(), StepId(1));
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let grid = Grid2::new(1.0, 1.0, 2, 2).unwrap();
        let problem = problem();
        let q = grid.sample(|_, _| 1.0);
        let prev = Field2::zeros(3, 3);
        let cur = Field2::zeros(3, 4); // wrong
        let mut out = Field2::zeros(3, 3);
        let ctx = StepContext::new(
            &grid,
            &q,
            &problem,
            &prev,
            &cur,
            &mut out,
            BoundaryCondition::Dirichlet,
            0.1,
            0.0,
            StepId(1),
            StepKind::Subsequent,
        );
        assert_eq!(
            ctx.check_shapes(),
            Err(StepError::ShapeMismatch {
                expected: (3, 3),
                found: (3, 4),
            })
        );
    }
}
