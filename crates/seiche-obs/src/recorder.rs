//! The [`Recorder`] observer.

use crate::error::ObserverError;
use crate::observer::{Observer, StepControl, StepFrame};
use seiche_core::{Field2, StepId};

/// An owned copy of one recorded level.
#[derive(Clone, Debug)]
pub struct FrameRecord {
    /// Level index.
    pub step: StepId,
    /// Discrete time of the level.
    pub t: f64,
    /// The solution, copied out of the engine's buffers.
    pub field: Field2,
}

/// Retains owned copies of every `stride`-th level.
///
/// Level 0 is always recorded. With the default stride of 1 every level
/// is kept, which is what correctness tests want; visualisation runs
/// typically thin with a larger stride.
#[derive(Debug, Default)]
pub struct Recorder {
    stride: u64,
    frames: Vec<FrameRecord>,
}

impl Recorder {
    /// Record every level.
    pub fn new() -> Self {
        Self::with_stride(1)
    }

    /// Record level 0 and every `stride`-th level after it.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is 0.
    pub fn with_stride(stride: u64) -> Self {
        assert!(stride > 0, "stride must be >= 1");
        Self {
            stride,
            frames: Vec::new(),
        }
    }

    /// The recorded frames, oldest first.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    /// Consume the recorder, keeping the frames.
    pub fn into_frames(self) -> Vec<FrameRecord> {
        self.frames
    }

    /// The most recent recorded frame.
    pub fn last(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl Observer for Recorder {
    fn on_level(&mut self, frame: StepFrame<'_>) -> Result<StepControl, ObserverError> {
        if frame.step().0 % self.stride == 0 {
            self.frames.push(FrameRecord {
                step: frame.step(),
                t: frame.t(),
                field: frame.field().clone(),
            });
        }
        Ok(StepControl::Continue)
    }
}
