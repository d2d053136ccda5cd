//! Error type surfaced by observers.

use std::error::Error;
use std::fmt;

/// An observer failed while handling a completed level.
///
/// The engine propagates this immediately, aborting the stepping loop;
/// no partial-state recovery is attempted. The underlying cause, if
/// any, is reachable through [`Error::source`].
#[derive(Debug)]
pub struct ObserverError {
    reason: String,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ObserverError {
    /// Create an error from a plain description.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    pub fn with_source(
        reason: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The description given at construction.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer failed: {}", self.reason)
    }
}

impl Error for ObserverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn Error + 'static))
    }
}
