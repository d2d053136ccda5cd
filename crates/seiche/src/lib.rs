//! Seiche: a finite-difference time integrator for the 2D damped wave
//! equation `u_tt + b·u_t = ∇·(q∇u) + f` with spatially varying wave
//! speed, on a rectangular mesh.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Seiche sub-crates. For most users, adding `seiche` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seiche::prelude::*;
//! use std::f64::consts::PI;
//!
//! // The fundamental standing mode of a unit square basin.
//! let problem = Problem::builder()
//!     .initial(|x, y| (PI * x).sin() * (PI * y).sin())
//!     .uniform_speed_squared(1.0)
//!     .build()
//!     .unwrap();
//!
//! // 8x8 cells, auto-selected CFL-stable timestep, bulk execution.
//! let mut config = SolveConfig::new(1.0, 1.0, 8, 8, 0.5);
//! config.stepper = StepperKind::Bulk;
//!
//! let mut sim = Simulation::new(config, problem).unwrap();
//! let mut recorder = Recorder::new();
//! let report = sim.run(&mut recorder).unwrap();
//!
//! assert!(!report.cancelled);
//! assert_eq!(report.levels_emitted as usize, recorder.frames().len());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seiche-core` | [`Field2`](types::Field2) storage, [`Problem`](types::Problem), IDs, step errors |
//! | [`grid`] | `seiche-grid` | [`Grid2`](grid::Grid2) mesh, [`TimeAxis`](grid::TimeAxis) |
//! | [`arena`] | `seiche-arena` | [`LevelArena`](arena::LevelArena) rotating three-level storage |
//! | [`stepper`] | `seiche-stepper` | Update kernels, coefficients, boundary policy |
//! | [`obs`] | `seiche-obs` | [`Observer`](obs::Observer) trait and ready-made observers |
//! | [`engine`] | `seiche-engine` | [`Simulation`](engine::Simulation) driver, config, report |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`seiche-core`).
///
/// The [`types::Field2`] storage type, the [`types::Problem`]
/// description of the continuous problem, and the shared error types.
pub use seiche_core as types;

/// Mesh and time axis (`seiche-grid`).
///
/// [`grid::Grid2`] builds the uniform rectangular mesh every field is
/// defined on; [`grid::TimeAxis`] is the discrete time sequence.
pub use seiche_grid as grid;

/// Rotating three-level field storage (`seiche-arena`).
///
/// [`arena::LevelArena`] owns the previous/current/write slots and
/// rotates their roles without copying data.
pub use seiche_arena as arena;

/// Finite-difference update kernels (`seiche-stepper`).
///
/// The [`stepper::Stepper`] trait with its two interchangeable
/// implementations, [`stepper::PointwiseStepper`] and
/// [`stepper::BulkStepper`], plus the [`stepper::BoundaryCondition`]
/// policy both honour.
pub use seiche_stepper as stepper;

/// Per-level observation (`seiche-obs`).
///
/// The [`obs::Observer`] trait is the integration loop's sole
/// extension point; [`obs::Recorder`] and [`obs::VtkExporter`] cover
/// the common uses.
pub use seiche_obs as obs;

/// The time-integration engine (`seiche-engine`).
///
/// [`engine::Simulation`] orchestrates one solve from mesh
/// construction through the stepping loop to the final
/// [`engine::SolveReport`].
pub use seiche_engine as engine;

/// Common imports for typical Seiche usage.
///
/// ```rust
/// use seiche::prelude::*;
/// ```
///
/// This imports the problem builder, the solve configuration and
/// driver, the observer trait with its ready-made implementations, and
/// the selector enums.
pub mod prelude {
    // Problem description and storage
    pub use seiche_core::{Field2, Problem, ProblemBuilder, StepId};

    // Mesh
    pub use seiche_grid::{Grid2, TimeAxis};

    // Execution strategy and boundary policy
    pub use seiche_stepper::{BoundaryCondition, Stepper, StepperKind};

    // Observation
    pub use seiche_obs::{
        NullObserver, Observer, ObserverError, Recorder, StepControl, StepFrame, VtkExporter,
    };

    // Engine
    pub use seiche_engine::{
        Simulation, SolveConfig, SolveError, SolveMetrics, SolveReport, SolveWarning,
    };
}
