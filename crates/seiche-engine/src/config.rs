//! Solve configuration.

use crate::error::SolveError;
use seiche_stepper::{BoundaryCondition, StepperKind};

/// Everything a solve needs besides the physics.
///
/// Built with [`SolveConfig::new`] and adjusted field by field. The
/// defaults are the permissive, source-faithful ones: auto-selected
/// timestep at the full stability limit, Dirichlet boundary, pointwise
/// execution, oversized timesteps tolerated with a warning.
#[derive(Clone, Debug)]
pub struct SolveConfig {
    /// Domain length along x. Must be positive.
    pub lx: f64,
    /// Domain length along y. Must be positive.
    pub ly: f64,
    /// Cell count along x. Must be >= 1.
    pub nx: u32,
    /// Cell count along y. Must be >= 1.
    pub ny: u32,
    /// Requested timestep. A negative value means "auto": select
    /// `|dt| × stability_limit`. The default of `-1.0` selects the full
    /// stability limit. Zero is invalid.
    pub dt: f64,
    /// Stop time. Must be positive; the last computed level is the
    /// nearest multiple of the effective timestep.
    pub t_end: f64,
    /// Execution strategy.
    pub stepper: StepperKind,
    /// Boundary policy, applied identically by both strategies.
    pub boundary: BoundaryCondition,
    /// Optional explicit bound on the fastest wave speed, used for the
    /// stability limit instead of sampling `sqrt(max q)` off the mesh.
    pub max_wave_speed: Option<f64>,
    /// Make an oversized caller-supplied timestep fatal instead of a
    /// warning.
    pub strict_stability: bool,
}

impl SolveConfig {
    /// A configuration with the documented defaults.
    pub fn new(lx: f64, ly: f64, nx: u32, ny: u32, t_end: f64) -> Self {
        Self {
            lx,
            ly,
            nx,
            ny,
            dt: -1.0,
            t_end,
            stepper: StepperKind::default(),
            boundary: BoundaryCondition::default(),
            max_wave_speed: None,
            strict_stability: false,
        }
    }

    /// Validate the non-mesh parameters.
    ///
    /// Mesh geometry is validated by the grid builder; this covers the
    /// rest.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidConfig`] naming the offending value.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !(self.t_end > 0.0) || !self.t_end.is_finite() {
            return Err(SolveError::InvalidConfig {
                reason: format!("stop time must be positive, got {}", self.t_end),
            });
        }
        if !self.dt.is_finite() || self.dt == 0.0 {
            return Err(SolveError::InvalidConfig {
                reason: format!(
                    "timestep must be a finite non-zero value (negative selects \
                     |dt| × stability limit), got {}",
                    self.dt
                ),
            });
        }
        if let Some(c) = self.max_wave_speed {
            if !(c > 0.0) || !c.is_finite() {
                return Err(SolveError::InvalidConfig {
                    reason: format!("max_wave_speed must be positive, got {c}"),
                });
            }
        }
        Ok(())
    }
}
