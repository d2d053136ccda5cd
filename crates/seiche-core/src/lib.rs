//! Core types for the Seiche wave-integration framework.
//!
//! Defines the storage type shared by every crate ([`Field2`]), the
//! [`StepId`] counter, the caller-supplied [`Problem`] description, and
//! the error types produced while advancing a solution in time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod problem;

pub use error::StepError;
pub use field::Field2;
pub use id::StepId;
pub use problem::{Problem, ProblemBuilder};
