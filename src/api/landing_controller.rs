use tracing::{debug, trace};

use crate::extensions::TimelineEvent;

use super::engine::ActiveGesture;
use super::{FrameScheduler, TimelineEngine, input_validation};

/// Ease-out exponential: fast start, long settle, exactly `1.0` at `t >= 1`.
#[must_use]
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t.max(0.0))
    }
}

/// Time-based fly-in toward `(year, target_scale)`.
///
/// The clock starts on the first frame that samples the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingAnimation {
    year: i32,
    start_scale: f64,
    target_scale: f64,
    duration_ms: f64,
    started_at_ms: Option<f64>,
}

impl LandingAnimation {
    #[must_use]
    pub fn new(year: i32, start_scale: f64, target_scale: f64, duration_ms: f64) -> Self {
        Self {
            year,
            start_scale,
            target_scale,
            duration_ms,
            started_at_ms: None,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Scale at normalized progress `t`; returns the target bit-for-bit at `t >= 1`.
    #[must_use]
    pub fn scale_at(&self, t: f64) -> f64 {
        if t >= 1.0 {
            return self.target_scale;
        }
        self.start_scale + (self.target_scale - self.start_scale) * ease_out_expo(t)
    }

    /// Normalized progress at `timestamp_ms`, starting the clock if needed.
    pub fn progress(&mut self, timestamp_ms: f64) -> f64 {
        let started = *self.started_at_ms.get_or_insert(timestamp_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((timestamp_ms - started) / self.duration_ms).clamp(0.0, 1.0)
    }
}

impl<S: FrameScheduler> TimelineEngine<S> {
    /// Queues a one-shot navigation; it is consumed on the next dispatch or frame.
    ///
    /// An idle engine requests a frame so the request lands without further input.
    pub fn request_navigation(&mut self, year: i32, px_per_year: f64) -> bool {
        let queued = self.queue_navigation(year, px_per_year);
        if queued && self.active_frame.is_none() {
            self.request_frame();
        }
        queued
    }

    pub(super) fn queue_navigation(&mut self, year: i32, px_per_year: f64) -> bool {
        if let Err(err) = input_validation::validate_navigation_scale(px_per_year) {
            debug!(error = %err, year, "ignoring navigation request");
            return false;
        }
        self.state.set_pending_navigation(year, px_per_year)
    }

    /// Launches the landing animation for a queued navigation, if any.
    pub fn process_pending_navigation(&mut self) -> bool {
        match self.state.take_pending_navigation() {
            Some(navigation) => self.start_landing(navigation.year, navigation.px_per_year),
            None => false,
        }
    }

    fn start_landing(&mut self, year: i32, target_scale: f64) -> bool {
        let axis = self.state.axis();
        let bounds = self.state.scale_bounds();
        let year = axis.clamp_year(year);
        let target_scale = bounds.clamp(target_scale);
        let tuning = self.config.landing;
        let start_scale = (target_scale - tuning.start_scale_offset).max(bounds.min_px_per_year);

        self.cancel_active_gesture();
        debug!(year, start_scale, target_scale, "landing started");
        self.emit_event(TimelineEvent::NavigationStarted {
            year,
            px_per_year: target_scale,
        });

        if start_scale == target_scale || tuning.duration_ms <= 0.0 {
            let scroll = self.state.scroll_to_center(year, target_scale);
            let changed = self.apply_view(scroll, target_scale);
            self.emit_event(TimelineEvent::NavigationFinished {
                year,
                px_per_year: target_scale,
            });
            return changed;
        }

        let scroll = self.state.scroll_to_center(year, start_scale);
        let changed = self.apply_view(scroll, start_scale);
        self.start_gesture(ActiveGesture::Landing(LandingAnimation::new(
            year,
            start_scale,
            target_scale,
            tuning.duration_ms,
        )));
        self.request_frame();
        changed
    }

    pub(super) fn step_landing(&mut self, timestamp_ms: f64) -> bool {
        let Some(ActiveGesture::Landing(animation)) = self.gesture.as_mut() else {
            return false;
        };
        let t = animation.progress(timestamp_ms);
        let scale = animation.scale_at(t);
        let year = animation.year();
        let target_scale = animation.target_scale();

        let scroll = self.state.scroll_to_center(year, scale);
        let changed = self.apply_view(scroll, scale);
        trace!(t, scale, "landing frame");

        if t >= 1.0 {
            self.finish_gesture();
            debug!(year, target_scale, "landing finished");
            self.emit_event(TimelineEvent::NavigationFinished {
                year,
                px_per_year: target_scale,
            });
        } else {
            self.request_frame();
        }
        changed
    }
}
