//! Per-level observation for Seiche simulations.
//!
//! The engine invokes an [`Observer`] once per completed time level —
//! level 0 included — with a read-only [`StepFrame`]. The observer's
//! return value is the sole cancellation channel: [`StepControl::Stop`]
//! ends the run after the completed level. Ready-made observers cover
//! the common cases: [`NullObserver`] (discard), [`Recorder`] (retain
//! owned frames), [`VtkExporter`] (dump levels for visualisation).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod observer;
pub mod recorder;
pub mod vtk;

pub use error::ObserverError;
pub use observer::{NullObserver, Observer, StepControl, StepFrame};
pub use recorder::{FrameRecord, Recorder};
pub use vtk::VtkExporter;
