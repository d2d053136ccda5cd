//! Whole-array execution strategy.

use crate::boundary::{self, BoundaryCondition};
use crate::coeffs::StepKind;
use crate::context::StepContext;
use crate::stepper::Stepper;
use seiche_core::{Field2, StepError};

/// The array stepper: precomputes the source contribution for the whole
/// mesh, then sweeps the interior row by row over slices.
///
/// The sweep reads three adjacent rows of the current level and writes
/// one row of the output, which is the data-parallel layout a
/// vectoriser wants. Face averages of `q` are computed exactly as in
/// [`PointwiseStepper`](crate::PointwiseStepper), so a spatially
/// varying medium gives the same result under either strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BulkStepper;

impl Stepper for BulkStepper {
    fn name(&self) -> &str {
        "bulk"
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

        // Source (and, on the first step, initial-velocity) contribution
        // for every mesh point, evaluated up front.
        let rhs = Field2::from_fn(rows, cols, |i, j| {
            let mut r = c.dt2 * inp.problem.source(x[i], y[j], t);
            if first {
                r += c.vel * inp.problem.velocity(x[i], y[j]);
            }
            r
        });

        let sweep_row = |o: &mut [f64],
                         q_w: &[f64],
                         q_c: &[f64],
                         q_e: &[f64],
                         u_w: &[f64],
                         u_c: &[f64],
                         u_e: &[f64],
                         p_c: &[f64],
                         r_c: &[f64],
                         j_lo: usize,
                         j_hi: usize,
                         mirrored: bool| {
            for j in j_lo..j_hi {
                let (jm, jp) = if mirrored {
                    boundary::mirror(j, cols - 1)
                } else {
                    (j - 1, j + 1)
                };
                let qc = q_c[j];
                let qe = 0.5 * (qc + q_e[j]);
                let qw = 0.5 * (qc + q_w[j]);
                let qn = 0.5 * (qc + q_c[jp]);
                let qs = 0.5 * (qc + q_c[jm]);
                let uc = u_c[j];
                let sx = qe * (u_e[j] - uc) - qw * (uc - u_w[j]);
                let sy = qn * (u_c[jp] - uc) - qs * (uc - u_c[jm]);
                o[j] = c.d1 * uc - c.d2 * p_c[j] + c.cx2 * sx + c.cy2 * sy + r_c[j];
            }
        };

        match inp.boundary {
            BoundaryCondition::Dirichlet => {
                for i in 1..rows - 1 {
                    sweep_row(
                        out.row_mut(i),
                        q.row(i - 1),
                        q.row(i),
                        q.row(i + 1),
                        cur.row(i - 1),
                        cur.row(i),
                        cur.row(i + 1),
                        prev.row(i),
                        rhs.row(i),
                        1,
                        cols - 1,
                        false,
                    );
                }
                boundary::clamp_edges_to_zero(out);
            }
            BoundaryCondition::Reflective => {
                for i in 0..rows {
                    let (im, ip) = boundary::mirror(i, rows - 1);
                    sweep_row(
                        out.row_mut(i),
                        q.row(im),
                        q.row(i),
                        q.row(ip),
                        cur.row(im),
                        cur.row(i),
                        cur.row(ip),
                        prev.row(i),
                        rhs.row(i),
                        0,
                        cols,
                        true,
                    );
                }
            }
        }
        Ok(())
    }
}
