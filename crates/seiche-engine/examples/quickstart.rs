//! Minimal end-to-end example: a Gaussian bump rippling across a
//! square basin with zero-displacement walls.
//!
//! Run with: `cargo run --example quickstart`

use seiche_core::Problem;
use seiche_engine::{Simulation, SolveConfig};
use seiche_obs::Recorder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lx = 10.0;
    let ly = 10.0;

    // Gaussian peak in the middle of the domain, initially at rest.
    let problem = Problem::builder()
        .initial(move |x, y| {
            (-0.5 * ((x - lx / 2.0).powi(2) + (y - ly / 2.0).powi(2))).exp()
        })
        .uniform_speed_squared(1.0)
        .damping(0.1)
        .build()?;

    // 40x40 cells, auto-selected timestep at the stability limit.
    let config = SolveConfig::new(lx, ly, 40, 40, 10.0);

    let mut sim = Simulation::new(config, problem)?;
    println!(
        "mesh {:?}, dt = {:.5}, {} levels",
        sim.grid().shape(),
        sim.dt(),
        sim.time_axis().level_count()
    );

    // Keep every 10th level for inspection.
    let mut recorder = Recorder::with_stride(10);
    let report = sim.run(&mut recorder)?;

    println!(
        "integrated {} levels in {} µs (dt = {:.5})",
        report.levels_emitted, report.metrics.integration_us, report.dt
    );
    for frame in recorder.frames() {
        println!(
            "  t = {:6.3}  peak |u| = {:.6}",
            frame.t,
            frame.field.max_abs()
        );
    }
    Ok(())
}
