//! Rotating three-level field storage.
//!
//! A three-level time-stepping scheme keeps the solution at levels
//! `n+1`, `n`, and `n-1` alive at once. [`LevelArena`] owns three
//! fixed-shape slots and a role permutation over them; advancing a step
//! rotates the roles, never the data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rolling;

pub use rolling::{LevelArena, Role, StepSlots};
