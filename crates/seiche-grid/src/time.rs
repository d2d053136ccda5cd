//! The [`TimeAxis`] discrete time sequence.

/// The discrete time sequence `t_n = n·dt`, `n = 0..=nt`.
///
/// `nt` is the nearest integer to `t_end/dt`, so the final discrete time
/// is `nt·dt`, not `t_end` itself. With `nt == 0` (a stop time shorter
/// than half a step) there is nothing to integrate and only the initial
/// level exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    dt: f64,
    nt: u64,
}

impl TimeAxis {
    /// Build the axis covering `[0, t_end]` with step `dt`.
    ///
    /// # Panics
    ///
    /// Panics if `dt` or `t_end` is not positive and finite; the engine
    /// validates both before construction.
    pub fn new(dt: f64, t_end: f64) -> Self {
        assert!(dt > 0.0 && dt.is_finite(), "dt must be positive, got {dt}");
        assert!(
            t_end > 0.0 && t_end.is_finite(),
            "t_end must be positive, got {t_end}"
        );
        Self {
            dt,
            nt: (t_end / dt).round() as u64,
        }
    }

    /// The timestep.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of steps, `nt`.
    pub fn steps(&self) -> u64 {
        self.nt
    }

    /// Number of time levels including level 0, `nt + 1`.
    pub fn level_count(&self) -> u64 {
        self.nt + 1
    }

    /// Discrete time at level `n`.
    pub fn t(&self, n: u64) -> f64 {
        self.dt * n as f64
    }

    /// The final discrete time, `nt·dt`.
    pub fn t_final(&self) -> f64 {
        self.t(self.nt)
    }
}
