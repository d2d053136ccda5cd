//! Finite-difference update kernels for the 2D damped wave equation.
//!
//! Both steppers advance `u_tt + b·u_t = ∇·(q∇u) + f` one time level on
//! a uniform rectangular mesh, reading the two previous levels and
//! writing a third. They implement the same discrete update law —
//! conservative face-averaged variable coefficient, centered damping —
//! and differ only in execution strategy:
//!
//! - [`PointwiseStepper`] walks mesh points one by one and evaluates
//!   the source per point.
//! - [`BulkStepper`] precomputes the source as a whole array and sweeps
//!   the interior over row slices.
//!
//! The two are numerically interchangeable; the boundary policy
//! ([`BoundaryCondition`]) is a property of the step context and is
//! honoured identically by both.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod bulk;
pub mod coeffs;
pub mod context;
pub mod pointwise;
pub mod stepper;

pub use boundary::BoundaryCondition;
pub use bulk::BulkStepper;
pub use coeffs::{StepKind, UpdateCoeffs};
pub use context::{StepContext, StepInputs};
pub use pointwise::PointwiseStepper;
pub use stepper::{Stepper, StepperKind};
