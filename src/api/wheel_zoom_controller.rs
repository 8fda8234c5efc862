use tracing::{debug, trace};

use crate::core::ScaleBounds;
use crate::interaction::{WheelDeltaMode, WheelIntent, WheelModifiers, classify_wheel};

use super::engine::ActiveGesture;
use super::zoom_delta_resolver::{normalize_wheel_delta, resolve_wheel_log_delta};
use super::{AnchorPin, FrameScheduler, TimelineEngine, input_validation};

/// Log-space momentum toward a wheel-selected target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMomentum {
    current_log: f64,
    target_log: f64,
    pin: AnchorPin,
}

impl WheelMomentum {
    #[must_use]
    pub fn new(current_log: f64, target_log: f64, pin: AnchorPin) -> Self {
        Self {
            current_log,
            target_log,
            pin,
        }
    }

    #[must_use]
    pub fn current_log(&self) -> f64 {
        self.current_log
    }

    #[must_use]
    pub fn target_log(&self) -> f64 {
        self.target_log
    }

    #[must_use]
    pub fn pin(&self) -> AnchorPin {
        self.pin
    }

    /// Accumulates another wheel step into the target, clamped to `bounds`.
    pub fn retarget(&mut self, log_delta: f64, bounds: ScaleBounds, pin: AnchorPin) {
        self.target_log = bounds.clamp_log(self.target_log + log_delta);
        self.pin = pin;
    }

    /// Moves one frame toward the target. Returns `true` once settled on it exactly.
    pub fn advance(&mut self, lerp_factor: f64, settle_epsilon: f64) -> bool {
        self.current_log += (self.target_log - self.current_log) * lerp_factor;
        if (self.target_log - self.current_log).abs() < settle_epsilon {
            self.current_log = self.target_log;
            return true;
        }
        false
    }
}

impl<S: FrameScheduler> TimelineEngine<S> {
    pub(super) fn handle_wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        delta_mode: WheelDeltaMode,
        modifiers: WheelModifiers,
    ) -> bool {
        if let Err(err) = input_validation::validate_wheel_deltas(delta_x, delta_y) {
            debug!(error = %err, "ignoring wheel event");
            return false;
        }

        let width = self.state.viewport_width();
        let tuning = self.config.wheel_zoom;
        let delta_x = normalize_wheel_delta(delta_x, delta_mode, width, tuning);
        let delta_y = normalize_wheel_delta(delta_y, delta_mode, width, tuning);
        match classify_wheel(delta_x, delta_y, modifiers) {
            WheelIntent::Pan => {
                let delta = if delta_x.abs() > delta_y.abs() {
                    delta_x
                } else {
                    delta_y
                };
                self.pan_by(delta)
            }
            WheelIntent::Zoom => {
                self.wheel_zoom(delta_y);
                false
            }
        }
    }

    /// Retargets (or starts) momentum zoom; state changes on subsequent frames.
    fn wheel_zoom(&mut self, delta_y_px: f64) {
        let tuning = self.config.wheel_zoom;
        let Some(log_delta) = resolve_wheel_log_delta(delta_y_px, tuning) else {
            return;
        };
        let bounds = self.state.scale_bounds();
        let pin = AnchorPin::capture(&self.state, self.zoom_anchor_px());

        if let Some(ActiveGesture::Wheel(momentum)) = self.gesture.as_mut() {
            momentum.retarget(log_delta, bounds, pin);
            trace!(target_log = momentum.target_log(), "wheel momentum retargeted");
            return;
        }

        let current_log = self.state.px_per_year().ln();
        let target_log = bounds.clamp_log(current_log + log_delta);
        if (target_log - current_log).abs() < tuning.settle_epsilon {
            trace!("wheel zoom already at scale limit");
            return;
        }
        self.start_gesture(ActiveGesture::Wheel(WheelMomentum::new(
            current_log,
            target_log,
            pin,
        )));
        self.request_frame();
    }

    /// Pointer position when known, viewport center otherwise.
    fn zoom_anchor_px(&self) -> f64 {
        let width = self.state.viewport_width();
        self.interaction
            .pointer_x()
            .map_or(width / 2.0, |x| x.clamp(0.0, width))
    }

    pub(super) fn step_wheel_momentum(&mut self) -> bool {
        let tuning = self.config.wheel_zoom;
        let Some(ActiveGesture::Wheel(momentum)) = self.gesture.as_mut() else {
            return false;
        };
        let settled = momentum.advance(tuning.lerp_factor, tuning.settle_epsilon);
        let log_scale = momentum.current_log();
        let pin = momentum.pin();

        let scale = self.state.scale_bounds().clamp(log_scale.exp());
        let scroll = pin.scroll_for(self.state.axis(), scale);
        let changed = self.apply_view(scroll, scale);

        if settled {
            self.finish_gesture();
        } else {
            self.request_frame();
        }
        changed
    }
}
