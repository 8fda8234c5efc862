use tracing::debug;

use crate::interaction::TouchPoint;

use super::engine::ActiveGesture;
use super::zoom_delta_resolver::resolve_pinch_log_delta;
use super::{AnchorPin, FrameScheduler, TimelineEngine, input_validation};

/// Two-finger zoom driven directly by the touch distance ratio (no momentum).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSession {
    start_distance: f64,
    start_log: f64,
    pin: AnchorPin,
}

impl PinchSession {
    #[must_use]
    pub fn new(start_distance: f64, start_log: f64, pin: AnchorPin) -> Self {
        Self {
            start_distance,
            start_log,
            pin,
        }
    }

    #[must_use]
    pub fn pin(&self) -> AnchorPin {
        self.pin
    }

    /// Unclamped log scale for the current touch distance.
    #[must_use]
    pub fn log_scale_for(&self, distance: f64) -> f64 {
        self.start_log + resolve_pinch_log_delta(self.start_distance, distance)
    }
}

impl<S: FrameScheduler> TimelineEngine<S> {
    pub(super) fn begin_pinch(&mut self, touches: [TouchPoint; 2]) -> bool {
        let distance = match input_validation::validate_pinch_touches(touches) {
            Ok(distance) => distance,
            Err(err) => {
                debug!(error = %err, "ignoring pinch start");
                return false;
            }
        };
        let width = self.state.viewport_width();
        let anchor_px = touches[0].midpoint(touches[1]).x.clamp(0.0, width);
        let pin = AnchorPin::capture(&self.state, anchor_px);
        let start_log = self.state.px_per_year().ln();
        self.start_gesture(ActiveGesture::Pinch(PinchSession::new(
            distance, start_log, pin,
        )));
        false
    }

    pub(super) fn update_pinch(&mut self, touches: [TouchPoint; 2]) -> bool {
        let Some(ActiveGesture::Pinch(session)) = self.gesture else {
            debug!("ignoring pinch move without an active pinch");
            return false;
        };
        let distance = match input_validation::validate_pinch_touches(touches) {
            Ok(distance) => distance,
            Err(err) => {
                debug!(error = %err, "ignoring pinch move");
                return false;
            }
        };

        let bounds = self.state.scale_bounds();
        let log_scale = bounds.clamp_log(session.log_scale_for(distance));
        let scale = bounds.clamp(log_scale.exp());
        let scroll = session.pin().scroll_for(self.state.axis(), scale);
        self.apply_view(scroll, scale)
    }

    pub(super) fn end_pinch(&mut self) -> bool {
        if matches!(self.gesture, Some(ActiveGesture::Pinch(_))) {
            self.finish_gesture();
        }
        false
    }
}
