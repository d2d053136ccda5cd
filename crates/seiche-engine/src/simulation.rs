//! The [`Simulation`] driver.
//!
//! Owns every piece of one solve and walks the state machine
//! Built → Initialized → Stepping → Done:
//!
//! 1. [`Simulation::new`] — build the mesh, sample and validate the
//!    coefficient field, select the timestep (Built).
//! 2. [`Simulation::run`] — seed level 0 and notify the observer,
//!    take the special first step, then iterate the regular update,
//!    rotating the arena after each accepted level, until the time
//!    axis is exhausted or the observer cancels (Done).
//!
//! # Ownership model
//!
//! `Simulation` is `Send` (can be moved between threads) but all
//! mutating methods take `&mut self`; a solve is a single logical
//! thread of control and field buffers are never shared.

use std::time::Instant;

use smallvec::SmallVec;

use seiche_arena::LevelArena;
use seiche_core::{Field2, Problem, StepId};
use seiche_grid::{Grid2, TimeAxis};
use seiche_obs::{Observer, StepControl, StepFrame};
use seiche_stepper::{BoundaryCondition, StepContext, StepKind, Stepper};

use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::report::{SolveMetrics, SolveReport, SolveWarning};
use crate::stability::{select_timestep, stability_limit};

/// One configured solve of the 2D damped wave equation.
pub struct Simulation {
    grid: Grid2,
    axis: TimeAxis,
    limit: f64,
    q: Field2,
    problem: Problem,
    stepper: Box<dyn Stepper>,
    boundary: BoundaryCondition,
    arena: LevelArena,
    warnings: SmallVec<[SolveWarning; 2]>,
    setup_us: u64,
}

impl Simulation {
    /// Build a solve: mesh, coefficient field, timestep.
    ///
    /// The squared wave speed is sampled at every mesh point here; the
    /// sample doubles as the eager positivity check and, unless the
    /// config supplies an explicit `max_wave_speed`, as the source of
    /// the stability reference speed `sqrt(max q)`.
    ///
    /// # Errors
    ///
    /// [`SolveError::Grid`] for bad geometry,
    /// [`SolveError::InvalidConfig`] for bad scalar parameters,
    /// [`SolveError::NonPositiveCoefficient`] if `q` fails the
    /// positivity check, and [`SolveError::StabilityExceeded`] for an
    /// oversized timestep under `strict_stability`.
    pub fn new(config: SolveConfig, problem: Problem) -> Result<Self, SolveError> {
        let started = Instant::now();
        config.validate()?;
        let grid = Grid2::new(config.lx, config.ly, config.nx, config.ny)?;

        let q = grid.sample(|x, y| problem.speed_squared(x, y));
        let (rows, cols) = grid.shape();
        let mut max_q = 0.0f64;
        for i in 0..rows {
            let row = q.row(i);
            for (j, &v) in row.iter().enumerate() {
                if !(v > 0.0) || !v.is_finite() {
                    return Err(SolveError::NonPositiveCoefficient {
                        x: grid.x()[i],
                        y: grid.y()[j],
                        value: v,
                    });
                }
                max_q = max_q.max(v);
            }
        }

        let max_speed = config.max_wave_speed.unwrap_or_else(|| max_q.sqrt());
        let limit = stability_limit(max_speed, grid.dx(), grid.dy());
        let (axis, warning) =
            select_timestep(config.dt, limit, config.t_end, config.strict_stability)?;

        let mut warnings = SmallVec::new();
        if let Some(w) = warning {
            warnings.push(w);
        }

        let arena = LevelArena::new(rows, cols);
        Ok(Self {
            grid,
            axis,
            limit,
            q,
            problem,
            stepper: config.stepper.instantiate(),
            boundary: config.boundary,
            arena,
            warnings,
            setup_us: started.elapsed().as_micros() as u64,
        })
    }

    /// The mesh.
    pub fn grid(&self) -> &Grid2 {
        &self.grid
    }

    /// The discrete time axis the solve walks.
    pub fn time_axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// The effective timestep.
    pub fn dt(&self) -> f64 {
        self.axis.dt()
    }

    /// The CFL stability limit the timestep was checked against.
    pub fn stability_limit(&self) -> f64 {
        self.limit
    }

    /// Warnings recorded while building the solve.
    pub fn warnings(&self) -> &[SolveWarning] {
        &self.warnings
    }

    /// Integrate from the initial condition to the stop time.
    ///
    /// The observer is notified once per completed level, level 0
    /// included; returning [`StepControl::Stop`] ends the run after
    /// that level, and an observer error aborts it immediately.
    /// Re-running the same simulation re-seeds the buffers and
    /// reproduces the same levels.
    ///
    /// # Errors
    ///
    /// [`SolveError::Observer`] if the observer fails,
    /// [`SolveError::Step`] if the stepper rejects its context.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<SolveReport, SolveError> {
        let started = Instant::now();

        {
            let problem = &self.problem;
            let x = self.grid.x();
            let y = self.grid.y();
            self.arena.seed_with(|i, j| problem.initial(x[i], y[j]));
        }

        let mut levels = 1u64;
        let mut cancelled = false;
        match self.notify(observer, self.arena.current(), 0)? {
            StepControl::Stop => cancelled = true,
            StepControl::Continue if self.axis.steps() >= 1 => {
                self.advance_level(0, StepKind::First)?;
                levels += 1;
                match self.notify(observer, self.arena.written(), 1)? {
                    StepControl::Stop => cancelled = true,
                    StepControl::Continue => {
                        self.arena.rotate();
                        for n in 1..self.axis.steps() {
                            self.advance_level(n, StepKind::Subsequent)?;
                            levels += 1;
                            if self.notify(observer, self.arena.written(), n + 1)?
                                == StepControl::Stop
                            {
                                cancelled = true;
                                break;
                            }
                            self.arena.rotate();
                        }
                    }
                }
            }
            StepControl::Continue => {}
        }

        Ok(SolveReport {
            dt: self.axis.dt(),
            levels_emitted: levels,
            cancelled,
            warnings: self.warnings.clone(),
            metrics: SolveMetrics {
                setup_us: self.setup_us,
                integration_us: started.elapsed().as_micros() as u64,
                memory_bytes: self.arena.memory_bytes() + self.q.memory_bytes(),
            },
        })
    }

    /// Compute level `n+1` into the write slot from levels `n`, `n-1`.
    fn advance_level(&mut self, n: u64, kind: StepKind) -> Result<(), SolveError> {
        let slots = self.arena.slots();
        let mut ctx = StepContext::new(
            &self.grid,
            &self.q,
            &self.problem,
            slots.previous,
            slots.current,
            slots.write,
            self.boundary,
            self.axis.dt(),
            self.axis.t(n),
            StepId(n + 1),
            kind,
        );
        self.stepper.advance(&mut ctx).map_err(|e| SolveError::Step {
            name: self.stepper.name().to_string(),
            reason: e,
        })
    }

    /// Hand one completed level to the observer.
    fn notify(
        &self,
        observer: &mut dyn Observer,
        field: &Field2,
        level: u64,
    ) -> Result<StepControl, SolveError> {
        let frame = StepFrame::new(
            field,
            self.grid.x(),
            self.grid.y(),
            self.axis.t(level),
            StepId(level),
        );
        observer.on_level(frame).map_err(SolveError::Observer)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("shape", &self.grid.shape())
            .field("dt", &self.axis.dt())
            .field("steps", &self.axis.steps())
            .field("stepper", &self.stepper.name())
            .field("boundary", &self.boundary)
            .finish()
    }
}
