//! Error types shared across the Seiche crates.

use std::error::Error;
use std::fmt;

/// Errors from a single stepper invocation.
///
/// Returned by `Stepper::advance()` and wrapped by the engine's solve
/// error when a step cannot be carried out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The step context's field buffers do not all share the mesh shape.
    ShapeMismatch {
        /// Shape implied by the mesh, `(nx+1, ny+1)`.
        expected: (usize, usize),
        /// Offending buffer shape.
        found: (usize, usize),
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "field shape {found:?} does not match mesh shape {expected:?}"
            ),
        }
    }
}

impl Error for StepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_shapes() {
        let err = StepError::ShapeMismatch {
            expected: (5, 5),
            found: (5, 4),
        };
        let msg = err.to_string();
        assert!(msg.contains("(5, 4)"));
        assert!(msg.contains("(5, 5)"));
    }
}
