//! Instrumented observers for control-flow tests.

use seiche_obs::{Observer, ObserverError, StepControl, StepFrame};

/// Records the `(step, t)` of every invocation, nothing else.
#[derive(Debug, Default)]
pub struct CountingObserver {
    /// One entry per `on_level` call, in order.
    pub levels: Vec<(u64, f64)>,
}

impl CountingObserver {
    /// A fresh, empty counter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for CountingObserver {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        self.levels.push((frame.step().0, frame.t()));
        Ok(StepControl::Continue)
    }
}

/// Requests termination when the configured level index arrives.
#[derive(Debug)]
pub struct StopAfter {
    stop_at: u64,
    /// Level indices seen so far.
    pub seen: Vec<u64>,
}

impl StopAfter {
    /// Stop after handling level `stop_at`.
    pub fn new(stop_at: u64) -> Self {
        Self {
            stop_at,
            seen: Vec::new(),
        }
    }
}

impl Observer for StopAfter {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        self.seen.push(frame.step().0);
        if frame.step().0 >= self.stop_at {
            Ok(StepControl::Stop)
        } else {
            Ok(StepControl::Continue)
        }
    }
}

/// Fails when the configured level index arrives.
#[derive(Debug)]
pub struct FailAt {
    fail_at: u64,
    /// Level indices seen so far, the failing one included.
    pub seen: Vec<u64>,
}

impl FailAt {
    /// Fail when handling level `fail_at`.
    pub fn new(fail_at: u64) -> Self {
        Self {
            fail_at,
            seen: Vec::new(),
        }
    }
}

impl Observer for FailAt {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        self.seen.push(frame.step().0);
        if frame.step().0 >= self.fail_at {
            Err(ObserverError::new(format!(
                "instrumented failure at level {}",
                frame.step()
            )))
        } else {
            Ok(StepControl::Continue)
        }
    }
}

/// Tracks the largest absolute field value seen across all levels.
#[derive(Debug, Default)]
pub struct MaxAbsTracker {
    /// The running peak.
    pub peak: f64,
}

impl MaxAbsTracker {
    /// A fresh tracker with zero peak.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for MaxAbsTracker {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        self.peak = self.peak.max(frame.field().max_abs());
        Ok(StepControl::Continue)
    }
}
