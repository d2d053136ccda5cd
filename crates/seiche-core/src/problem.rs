//! Caller-supplied description of the continuous problem.
//!
//! A [`Problem`] bundles the functions the wave equation
//! `u_tt + b·u_t = ∇·(q∇u) + f` needs from the caller: the initial
//! displacement `I(x,y)`, the initial velocity `V(x,y)`, the source term
//! `f(x,y,t)`, the squared wave speed `q(x,y)`, and the uniform damping
//! coefficient `b`. `V` and `f` default to the zero function; they are
//! explicit configuration, not a "function or nothing" union.
//!
//! Constructed via the builder pattern: [`Problem::builder`].

/// A scalar function of space, `g(x, y)`.
pub type SpatialFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// A scalar function of space and time, `g(x, y, t)`.
pub type SpaceTimeFn = Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;

/// The continuous-problem data for one solve.
///
/// Immutable once built. The squared wave speed must be positive on the
/// whole mesh; the integrator samples it eagerly and rejects the solve
/// otherwise.
pub struct Problem {
    initial: SpatialFn,
    velocity: SpatialFn,
    source: SpaceTimeFn,
    speed_squared: SpatialFn,
    damping: f64,
}

impl Problem {
    /// Create a new builder for configuring a `Problem`.
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder {
            initial: None,
            velocity: None,
            source: None,
            speed_squared: None,
            damping: 0.0,
        }
    }

    /// Initial displacement `I(x, y)`.
    pub fn initial(&self, x: f64, y: f64) -> f64 {
        (self.initial)(x, y)
    }

    /// Initial velocity `V(x, y)` (zero unless configured).
    pub fn velocity(&self, x: f64, y: f64) -> f64 {
        (self.velocity)(x, y)
    }

    /// Source term `f(x, y, t)` (zero unless configured).
    pub fn source(&self, x: f64, y: f64, t: f64) -> f64 {
        (self.source)(x, y, t)
    }

    /// Squared wave speed `q(x, y)`.
    pub fn speed_squared(&self, x: f64, y: f64) -> f64 {
        (self.speed_squared)(x, y)
    }

    /// Uniform damping coefficient `b`.
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("damping", &self.damping)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Problem`].
///
/// Required fields: `initial` and `speed_squared`.
pub struct ProblemBuilder {
    initial: Option<SpatialFn>,
    velocity: Option<SpatialFn>,
    source: Option<SpaceTimeFn>,
    speed_squared: Option<SpatialFn>,
    damping: f64,
}

impl ProblemBuilder {
    /// Set the initial displacement `I(x, y)`.
    pub fn initial(mut self, f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        self.initial = Some(Box::new(f));
        self
    }

    /// Set the initial velocity `V(x, y)` (default: zero function).
    pub fn velocity(mut self, f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        self.velocity = Some(Box::new(f));
        self
    }

    /// Set the source term `f(x, y, t)` (default: zero function).
    pub fn source(mut self, f: impl Fn(f64, f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(f));
        self
    }

    /// Set the squared wave speed `q(x, y)`. Must be positive on the mesh.
    pub fn speed_squared(mut self, f: impl Fn(f64, f64) -> f64 + Send + Sync + 'static) -> Self {
        self.speed_squared = Some(Box::new(f));
        self
    }

    /// Set a spatially uniform squared wave speed.
    pub fn uniform_speed_squared(self, q: f64) -> Self {
        self.speed_squared(move |_, _| q)
    }

    /// Set the damping coefficient `b` (default: 0.0). Must be >= 0.
    pub fn damping(mut self, b: f64) -> Self {
        self.damping = b;
        self
    }

    /// Build the problem, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `initial` is not set
    /// - `speed_squared` is not set
    /// - `damping` is negative or NaN
    pub fn build(self) -> Result<Problem, String> {
        let initial = self.initial.ok_or_else(|| "initial is required".to_string())?;
        let speed_squared = self
            .speed_squared
            .ok_or_else(|| "speed_squared is required".to_string())?;

        if !(self.damping >= 0.0) || !self.damping.is_finite() {
            return Err(format!(
                "damping must be finite and >= 0, got {}",
                self.damping
            ));
        }

        Ok(Problem {
            initial,
            velocity: self.velocity.unwrap_or_else(|| Box::new(|_, _| 0.0)),
            source: self.source.unwrap_or_else(|| Box::new(|_, _, _| 0.0)),
            speed_squared,
            damping: self.damping,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ProblemBuilder {
        Problem::builder()
            .initial(|x, y| x + y)
            .uniform_speed_squared(1.0)
    }

    #[test]
    fn builder_minimal() {
        let p = minimal().build().unwrap();
        assert_eq!(p.initial(1.0, 2.0), 3.0);
        assert_eq!(p.speed_squared(0.3, 0.7), 1.0);
        assert_eq!(p.damping(), 0.0);
        // Optional terms default to the zero function.
        assert_eq!(p.velocity(1.0, 2.0), 0.0);
        assert_eq!(p.source(1.0, 2.0, 3.0), 0.0);
    }

    #[test]
    fn builder_rejects_missing_initial() {
        let result = Problem::builder().uniform_speed_squared(1.0).build();
        assert!(result.unwrap_err().contains("initial"));
    }

    #[test]
    fn builder_rejects_missing_speed() {
        let result = Problem::builder().initial(|_, _| 0.0).build();
        assert!(result.unwrap_err().contains("speed_squared"));
    }

    #[test]
    fn builder_rejects_negative_damping() {
        let result = minimal().damping(-0.5).build();
        assert!(result.unwrap_err().contains("damping"));
    }

    #[test]
    fn builder_rejects_nan_damping() {
        let result = minimal().damping(f64::NAN).build();
        assert!(result.unwrap_err().contains("damping"));
    }

    #[test]
    fn optional_terms_are_honoured() {
        let p = minimal()
            .velocity(|x, _| 2.0 * x)
            .source(|_, y, t| y * t)
            .damping(0.25)
            .build()
            .unwrap();
        assert_eq!(p.velocity(3.0, 0.0), 6.0);
        assert_eq!(p.source(0.0, 2.0, 4.0), 8.0);
        assert_eq!(p.damping(), 0.25);
    }
}
