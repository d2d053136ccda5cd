//! Per-point execution strategy.

use crate::boundary::{self, BoundaryCondition};
use crate::coeffs::StepKind;
use crate::context::StepContext;
use crate::stepper::Stepper;
use seiche_core::StepError;

/// The scalar stepper: nested loops over mesh points, source term
/// evaluated per point.
///
/// Handles arbitrary `q` and `f` with no per-step allocation; the
/// bulk stepper trades one source-array allocation per step for a
/// slice-based sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointwiseStepper;

impl Stepper for PointwiseStepper {
    fn name(&self) -> &str {
        "pointwise"
    }

    fn advance(&self, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        ctx.check_shapes()?;
        let (inp, out) = ctx.parts();
        let (rows, cols) = inp.grid.shape();
        let x = inp.grid.x();
        let y = inp.grid.y();
        let c = inp.coeffs;
        let q = inp.q;
        let cur = inp.current;
        let prev = inp.previous;
        let first = inp.kind == StepKind::First;
        let t = inp.t;

        let point = |i: usize, j: usize, im: usize, ip: usize, jm: usize, jp: usize| {
            let mut rhs = c.dt2 * inp.problem.source(x[i], y[j], t);
            if first {
                rhs += c.vel * inp.problem.velocity(x[i], y[j]);
            }
            let qc = q[(i, j)];
            let qe = 0.5 * (qc + q[(ip, j)]);
            let qw = 0.5 * (qc + q[(im, j)]);
            let qn = 0.5 * (qc + q[(i, jp)]);
            let qs = 0.5 * (qc + q[(i, jm)]);
            let uc = cur[(i, j)];
            let sx = qe * (cur[(ip, j)] - uc) - qw * (uc - cur[(im, j)]);
            let sy = qn * (cur[(i, jp)] - uc) - qs * (uc - cur[(i, jm)]);
            c.d1 * uc - c.d2 * prev[(i, j)] + c.cx2 * sx + c.cy2 * sy + rhs
        };

        match inp.boundary {
            BoundaryCondition::Dirichlet => {
                for i in 1..rows - 1 {
                    for j in 1..cols - 1 {
                        out[(i, j)] = point(i, j, i - 1, i + 1, j - 1, j + 1);
                    }
                }
                boundary::clamp_edges_to_zero(out);
            }
            BoundaryCondition::Reflective => {
                for i in 0..rows {
                    let (im, ip) = boundary::mirror(i, rows - 1);
                    for j in 0..cols {
                        let (jm, jp) = boundary::mirror(j, cols - 1);
                        out[(i, j)] = point(i, j, im, ip, jm, jp);
                    }
                }
            }
        }
        Ok(())
    }
}
