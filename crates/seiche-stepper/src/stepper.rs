//! The [`Stepper`] trait and the [`StepperKind`] selector.

use crate::bulk::BulkStepper;
use crate::context::StepContext;
use crate::pointwise::PointwiseStepper;
use seiche_core::StepError;

/// A strategy for advancing the solution one time level.
///
/// # Contract
///
/// - `advance()` MUST be deterministic: same inputs produce identical
///   outputs.
/// - `&self` — steppers are stateless; all step state lives in the
///   context.
/// - `advance()` reads only the two prior levels, never the buffer it
///   writes, so callers may parallelise across points if they provide a
///   separate output buffer.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the selected stepper as
/// a `Box<dyn Stepper>`.
pub trait Stepper: Send + 'static {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Compute one level into the context's write target.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ShapeMismatch`] if the context's buffers do
    /// not all share the mesh shape.
    fn advance(&self, ctx: &mut StepContext<'_>) -> Result<(), StepError>;
}

/// Which execution strategy a solve uses.
///
/// Both strategies implement the same update law and boundary policy;
/// they are numerically interchangeable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepperKind {
    /// Per-point loops, source evaluated at each mesh point.
    #[default]
    Pointwise,
    /// Whole-interior sweep over row slices against a precomputed
    /// source array.
    Bulk,
}

impl StepperKind {
    /// Instantiate the selected stepper.
    pub fn instantiate(self) -> Box<dyn Stepper> {
        match self {
            Self::Pointwise => Box::new(PointwiseStepper),
            Self::Bulk => Box::new(BulkStepper),
        }
    }
}
