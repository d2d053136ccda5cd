//! Time-integration engine for the 2D damped wave equation.
//!
//! [`Simulation`] orchestrates one solve: build the mesh, sample the
//! coefficient field, select a CFL-stable timestep, seed the initial
//! level, take the special first step, then iterate the selected
//! stepper while rotating the three-level arena and notifying the
//! observer after every completed level.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod report;
pub mod stability;
pub mod simulation;

pub use config::SolveConfig;
pub use error::SolveError;
pub use report::{SolveMetrics, SolveReport, SolveWarning};
pub use stability::stability_limit;
pub use simulation::Simulation;
