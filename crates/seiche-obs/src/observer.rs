//! The [`Observer`] trait and the per-level [`StepFrame`].

use crate::error::ObserverError;
use seiche_core::{Field2, StepId};

/// What the integration loop should do after a completed level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepControl {
    /// Keep stepping.
    Continue,
    /// End the run after this level. Cooperative: there is no mid-step
    /// cancellation.
    Stop,
}

/// A read-only view of one completed time level.
///
/// Borrows the engine's buffers; an observer that needs the data beyond
/// the callback must copy it (see
/// [`Recorder`](crate::recorder::Recorder)).
pub struct StepFrame<'a> {
    field: &'a Field2,
    x: &'a [f64],
    y: &'a [f64],
    t: f64,
    step: StepId,
}

impl<'a> StepFrame<'a> {
    /// Assemble a frame. Called by the engine once per level.
    pub fn new(field: &'a Field2, x: &'a [f64], y: &'a [f64], t: f64, step: StepId) -> Self {
        Self {
            field,
            x,
            y,
            t,
            step,
        }
    }

    /// The completed solution level.
    pub fn field(&self) -> &Field2 {
        self.field
    }

    /// Mesh point coordinates along x.
    pub fn x(&self) -> &[f64] {
        self.x
    }

    /// Mesh point coordinates along y.
    pub fn y(&self) -> &[f64] {
        self.y
    }

    /// The discrete time of this level.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// The level index (0 for the initial condition).
    pub fn step(&self) -> StepId {
        self.step
    }
}

/// A per-level callback, the integration loop's sole extension point.
///
/// # Contract
///
/// - Invoked once per completed level, including level 0.
/// - The frame is read-only; an observer must not assume the borrowed
///   data outlives the call.
/// - Returning [`StepControl::Stop`] ends the run after this level;
///   returning an error aborts it immediately.
pub trait Observer {
    /// Handle one completed level.
    ///
    /// # Errors
    ///
    /// An [`ObserverError`] aborts the solve and is handed back to the
    /// caller with its cause chain intact.
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError>;
}

/// An observer that discards every frame and never stops the run.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn on_level(&mut self, _frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        Ok(StepControl::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_exposes_its_parts() {
        let field = Field2::zeros(2, 3);
        let x = [0.0, 1.0];
        let y = [0.0, 0.5, 1.0];
        let frame = StepFrame::new(&field, &x, &y, 0.25, StepId(5));
        assert_eq!(frame.field().shape(), (2, 3));
        assert_eq!(frame.x(), &x);
        assert_eq!(frame.y(), &y);
        assert_eq!(frame.t(), 0.25);
        assert_eq!(frame.step(), StepId(5));
    }

    #[test]
    fn null_observer_always_continues() {
        let field = Field2::zeros(2, 2);
        let x = [0.0, 1.0];
        let y = [0.0, 1.0];
        let mut obs = NullObserver;
        let control = obs
            .on_level(StepFrame::new(&field, &x, &y, 0.0, StepId(0)))
            .unwrap();
        assert_eq!(control, StepControl::Continue);
    }
}
