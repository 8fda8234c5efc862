//! Host-facing engine: store, frame scheduling, gesture controllers and config.

mod anchor;
mod engine;
mod engine_config;
mod frame_scheduler;
mod input_validation;
mod landing_controller;
mod observer_registry;
mod pan_controller;
mod pinch_zoom_controller;
mod timeline_state;
mod wheel_zoom_controller;
mod zoom_delta_resolver;

pub use anchor::AnchorPin;
pub use engine::TimelineEngine;
pub use engine_config::{KeyboardTuning, LandingTuning, TimelineEngineConfig, WheelZoomTuning};
pub use frame_scheduler::{FrameHandle, FrameScheduler, ManualFrameScheduler};
pub use landing_controller::{LandingAnimation, ease_out_expo};
pub use pinch_zoom_controller::PinchSession;
pub use timeline_state::{PendingNavigation, TimelineSnapshot, TimelineState};
pub use wheel_zoom_controller::WheelMomentum;
