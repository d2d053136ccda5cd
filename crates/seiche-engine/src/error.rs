//! Error types for solve construction and execution.

use std::error::Error;
use std::fmt;

use seiche_core::StepError;
use seiche_grid::GridError;
use seiche_obs::ObserverError;

/// Errors from building or running a [`Simulation`](crate::Simulation).
#[derive(Debug)]
pub enum SolveError {
    /// The mesh geometry is invalid. Returned before any computation.
    Grid(GridError),
    /// A configuration value outside the mesh is invalid (stop time,
    /// timestep request, speed bound).
    InvalidConfig {
        /// What is wrong.
        reason: String,
    },
    /// The requested timestep exceeds the stability limit and the solve
    /// runs in strict mode.
    StabilityExceeded {
        /// The requested timestep.
        dt: f64,
        /// The CFL stability limit.
        limit: f64,
    },
    /// The squared wave speed is not positive (or not finite) at a mesh
    /// point, breaking the scheme's stability assumption. Detected
    /// eagerly, before stepping begins.
    NonPositiveCoefficient {
        /// x coordinate of the offending mesh point.
        x: f64,
        /// y coordinate of the offending mesh point.
        y: f64,
        /// The sampled value.
        value: f64,
    },
    /// A stepper rejected its context.
    Step {
        /// Name of the failing stepper.
        name: String,
        /// The underlying step error.
        reason: StepError,
    },
    /// The observer failed; the loop was aborted with no partial-state
    /// recovery.
    Observer(ObserverError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid mesh: {e}"),
            Self::InvalidConfig { reason } => write!(f, "invalid configuration: {reason}"),
            Self::StabilityExceeded { dt, limit } => write!(
                f,
                "timestep {dt} exceeds the stability limit {limit}"
            ),
            Self::NonPositiveCoefficient { x, y, value } => write!(
                f,
                "wave speed squared must be positive, got {value} at ({x}, {y})"
            ),
            Self::Step { name, reason } => write!(f, "stepper '{name}' failed: {reason}"),
            Self::Observer(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Step { reason, .. } => Some(reason),
            Self::Observer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ObserverError> for SolveError {
    fn from(e: ObserverError) -> Self {
        Self::Observer(e)
    }
}
