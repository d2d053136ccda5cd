//! Manufactured problems with known exact solutions.

use seiche_core::Problem;
use std::f64::consts::PI;

/// A problem paired with its exact continuous solution.
pub struct Manufactured {
    /// The problem to hand to the engine.
    pub problem: Problem,
    /// The exact solution `u(x, y, t)`.
    pub exact: Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>,
}

/// The quadratic-in-space, linear-in-time manufactured solution
///
/// ```text
/// u(x, y, t) = x(Lx−x) · y(Ly−y) · (1 + t/2)
/// ```
///
/// with constant squared speed `c²`, matching initial velocity and a
/// source chosen so the damped-free wave equation holds exactly. The
/// three-level scheme represents this solution without truncation
/// error on any mesh, so the integrator must reproduce it to round-off
/// at every point of every level.
pub fn quadratic(lx: f64, ly: f64, c: f64) -> Manufactured {
    let shape = move |x: f64, y: f64| x * (lx - x) * y * (ly - y);
    let exact = move |x: f64, y: f64, t: f64| shape(x, y) * (1.0 + 0.5 * t);
    let c2 = c * c;

    let problem = Problem::builder()
        .initial(move |x, y| exact(x, y, 0.0))
        .velocity(move |x, y| 0.5 * shape(x, y))
        .source(move |x, y, t| {
            2.0 * c2 * (1.0 + 0.5 * t) * (y * (ly - y) + x * (lx - x))
        })
        .uniform_speed_squared(c2)
        .build()
        .expect("quadratic problem is well-formed");

    Manufactured {
        problem,
        exact: Box::new(exact),
    }
}

/// The undamped fundamental standing mode on `[0,Lx] × [0,Ly]` with
/// unit wave speed:
///
/// ```text
/// u(x, y, t) = sin(πx/Lx) · sin(πy/Ly) · cos(ωt),
/// ω = π·sqrt(1/Lx² + 1/Ly²)
/// ```
pub fn standing_mode(lx: f64, ly: f64) -> Manufactured {
    let omega = PI * (1.0 / (lx * lx) + 1.0 / (ly * ly)).sqrt();
    let problem = Problem::builder()
        .initial(move |x, y| (PI * x / lx).sin() * (PI * y / ly).sin())
        .uniform_speed_squared(1.0)
        .build()
        .expect("standing mode problem is well-formed");

    Manufactured {
        problem,
        exact: Box::new(move |x, y, t| {
            (PI * x / lx).sin() * (PI * y / ly).sin() * (omega * t).cos()
        }),
    }
}

/// Period of the fundamental mode of [`standing_mode`], `2π/ω`.
pub fn fundamental_period(lx: f64, ly: f64) -> f64 {
    2.0 / (1.0 / (lx * lx) + 1.0 / (ly * ly)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_vanishes_on_the_boundary() {
        let m = quadratic(5.0, 2.0, 1.5);
        assert_eq!((m.exact)(0.0, 1.0, 3.0), 0.0);
        assert_eq!((m.exact)(5.0, 1.0, 3.0), 0.0);
        assert_eq!((m.exact)(2.0, 0.0, 3.0), 0.0);
        assert_eq!((m.exact)(2.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn quadratic_initial_data_match_exact() {
        let m = quadratic(5.0, 2.0, 1.5);
        let u0 = (m.exact)(1.0, 0.5, 0.0);
        assert!((m.problem.initial(1.0, 0.5) - u0).abs() < 1e-15);
        // V = ∂u/∂t at t=0 is half the spatial shape.
        assert!((m.problem.velocity(1.0, 0.5) - 0.5 * u0).abs() < 1e-15);
    }

    #[test]
    fn fundamental_period_matches_omega() {
        let lx = 10.0;
        let ly = 10.0;
        let omega = PI * (2.0f64 / (lx * lx)).sqrt();
        assert!((fundamental_period(lx, ly) - 2.0 * PI / omega).abs() < 1e-12);
    }

    #[test]
    fn standing_mode_peaks_at_centre() {
        let m = standing_mode(10.0, 10.0);
        assert!(((m.exact)(5.0, 5.0, 0.0) - 1.0).abs() < 1e-15);
        assert!(m.problem.initial(5.0, 5.0) - 1.0 < 1e-15);
    }
}
