//! Solve outcome: report, warnings, metrics.

use smallvec::SmallVec;
use std::fmt;

/// Non-fatal conditions recorded during a solve.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveWarning {
    /// The caller-supplied timestep exceeds the CFL stability limit;
    /// the solve ran with it anyway (permissive mode). Recorded at most
    /// once per solve.
    StabilityExceeded {
        /// The timestep actually used.
        dt: f64,
        /// The stability limit it exceeds.
        limit: f64,
    },
}

impl fmt::Display for SolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StabilityExceeded { dt, limit } => write!(
                f,
                "timestep {dt} exceeds the stability limit {limit}; the scheme may diverge"
            ),
        }
    }
}

/// Timing and memory data for one solve.
///
/// Durations are in microseconds. Setup covers mesh construction,
/// coefficient sampling and timestep selection; integration covers
/// seeding and the stepping loop, which is the figure the wave solver
/// reports to its caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveMetrics {
    /// Wall-clock time spent in `Simulation::new`, in microseconds.
    pub setup_us: u64,
    /// Wall-clock time spent integrating, in microseconds.
    pub integration_us: u64,
    /// Heap memory held by the field buffers, in bytes.
    pub memory_bytes: usize,
}

/// Result of a completed (or cancelled) solve.
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// The timestep actually used, whether supplied or auto-selected.
    pub dt: f64,
    /// Number of levels handed to the observer, level 0 included.
    pub levels_emitted: u64,
    /// Whether the observer requested early termination.
    pub cancelled: bool,
    /// Warnings recorded during the solve, in order.
    pub warnings: SmallVec<[SolveWarning; 2]>,
    /// Timing and memory data.
    pub metrics: SolveMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_mentions_both_numbers() {
        let w = SolveWarning::StabilityExceeded {
            dt: 0.5,
            limit: 0.25,
        };
        let msg = w.to_string();
        assert!(msg.contains("0.5"));
        assert!(msg.contains("0.25"));
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = SolveMetrics::default();
        assert_eq!(m.setup_us, 0);
        assert_eq!(m.integration_us, 0);
        assert_eq!(m.memory_bytes, 0);
    }
}
