//! Rectangular mesh and time axis for Seiche simulations.
//!
//! [`Grid2`] is the uniform tensor-product mesh over `[0,Lx] × [0,Ly]`
//! that every field is defined on; [`TimeAxis`] is the discrete time
//! sequence the integrator walks. Both are built once per solve and
//! immutable thereafter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod time;

pub use error::GridError;
pub use grid::Grid2;
pub use time::TimeAxis;
