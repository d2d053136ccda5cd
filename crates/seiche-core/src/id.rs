//! Strongly-typed identifiers.

use std::fmt;

/// Index of a completed time level.
///
/// Level 0 is the initial condition; level `n` is the solution at time
/// `n·dt`. Incremented each time the integrator finishes a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
