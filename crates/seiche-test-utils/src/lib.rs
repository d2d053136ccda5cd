//! Test fixtures for Seiche development.
//!
//! Manufactured problems with known exact solutions, and instrumented
//! observers for exercising the integration loop's control flow. Not
//! published; depended on as a dev-dependency by the other crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod observers;
pub mod problems;

pub use observers::{CountingObserver, FailAt, MaxAbsTracker, StopAfter};
pub use problems::{fundamental_period, quadratic, standing_mode, Manufactured};
