//! The primary correctness oracle.
//!
//! The scheme represents `u = x(Lx−x)·y(Ly−y)·(1+t/2)` without
//! truncation error: its spatial differences of a quadratic and its
//! centered time differences of a linear function are exact, and the
//! manufactured source cancels the rest. Every mesh point of every
//! level must therefore match the exact solution to round-off, on any
//! mesh, under either execution strategy.

use seiche_engine::{Simulation, SolveConfig};
use seiche_obs::{Observer, ObserverError, StepControl, StepFrame};
use seiche_stepper::StepperKind;
use seiche_test_utils::quadratic;

/// Compares every emitted level against the exact solution.
struct ExactChecker {
    exact: Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>,
    worst_rel: f64,
    levels: u64,
}

impl Observer for ExactChecker {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        let mut scale = 1.0f64;
        let mut worst = 0.0f64;
        for (i, &x) in frame.x().iter().enumerate() {
            for (j, &y) in frame.y().iter().enumerate() {
                let exact = (self.exact)(x, y, frame.t());
                scale = scale.max(exact.abs());
                worst = worst.max((frame.field()[(i, j)] - exact).abs());
            }
        }
        self.worst_rel = self.worst_rel.max(worst / scale);
        self.levels += 1;
        Ok(StepControl::Continue)
    }
}

fn check(nx: u32, ny: u32, stepper: StepperKind) {
    let lx = 5.0;
    let ly = 2.0;
    let manufactured = quadratic(lx, ly, 1.5);

    let mut config = SolveConfig::new(lx, ly, nx, ny, 18.0);
    config.stepper = stepper;

    let mut sim = Simulation::new(config, manufactured.problem).unwrap();
    let mut checker = ExactChecker {
        exact: manufactured.exact,
        worst_rel: 0.0,
        levels: 0,
    };
    let report = sim.run(&mut checker).unwrap();

    assert_eq!(checker.levels, report.levels_emitted);
    assert!(report.levels_emitted > 2, "horizon long enough to matter");
    assert!(
        checker.worst_rel <= 1e-10,
        "{stepper:?} on {nx}x{ny}: relative error {:.3e} above round-off",
        checker.worst_rel
    );
}

#[test]
fn pointwise_reproduces_the_exact_solution() {
    for (nx, ny) in [(2, 2), (4, 2), (2, 4), (4, 4)] {
        check(nx, ny, StepperKind::Pointwise);
    }
}

#[test]
fn bulk_reproduces_the_exact_solution() {
    for (nx, ny) in [(2, 2), (4, 2), (2, 4), (4, 4)] {
        check(nx, ny, StepperKind::Bulk);
    }
}

#[test]
fn exactness_survives_a_supplied_timestep() {
    // A caller-supplied stable dt instead of the auto-selected one.
    let lx = 5.0;
    let ly = 2.0;
    let manufactured = quadratic(lx, ly, 1.5);
    let mut config = SolveConfig::new(lx, ly, 4, 4, 10.0);
    config.dt = 0.2;
    let mut sim = Simulation::new(config, manufactured.problem).unwrap();
    let mut checker = ExactChecker {
        exact: manufactured.exact,
        worst_rel: 0.0,
        levels: 0,
    };
    sim.run(&mut checker).unwrap();
    assert!(checker.worst_rel <= 1e-10, "{:.3e}", checker.worst_rel);
}
