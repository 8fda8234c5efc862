//! timeline-rs: pan/zoom engine for multi-millennium year timelines.
//!
//! The crate maps a bounded year axis to a scrollable pixel viewport, decides
//! which years and markers are worth rendering, clusters nearby markers, and
//! animates between `(year, scale)` states. Drawing is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ManualFrameScheduler, TimelineEngine, TimelineEngineConfig, TimelineState};
pub use error::{TimelineError, TimelineResult};
