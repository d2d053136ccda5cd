//! Error types for mesh construction.

use std::fmt;

/// Errors arising from mesh construction.
///
/// Returned before any computation happens; a solve with bad geometry
/// never touches a field buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A domain extent is zero, negative, or not finite.
    InvalidExtent {
        /// Axis name, `"x"` or `"y"`.
        axis: &'static str,
        /// The offending length.
        value: f64,
    },
    /// An axis has fewer than one cell.
    TooFewCells {
        /// Axis name, `"x"` or `"y"`.
        axis: &'static str,
        /// The offending cell count.
        value: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { axis, value } => {
                write!(f, "domain length along {axis} must be positive, got {value}")
            }
            Self::TooFewCells { axis, value } => {
                write!(f, "cell count along {axis} must be >= 1, got {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}
