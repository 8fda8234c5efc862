use tracing::debug;

use crate::extensions::TimelineEvent;
use crate::interaction::KeyCommand;

use super::{FrameScheduler, TimelineEngine, input_validation};

impl<S: FrameScheduler> TimelineEngine<S> {
    /// Scrolls by `delta_px` immediately, cancelling any running animation.
    ///
    /// Returns `true` when the scroll offset changed (it does not at the axis edges).
    pub fn pan_by(&mut self, delta_px: f64) -> bool {
        if let Err(err) = input_validation::validate_pan_delta(delta_px) {
            debug!(error = %err, "ignoring pan");
            return false;
        }
        if delta_px == 0.0 {
            return false;
        }
        self.cancel_active_gesture();
        let changed = self
            .state
            .set_scroll_left(self.state.scroll_left() + delta_px);
        if changed {
            self.emit_event(TimelineEvent::ViewChanged);
        }
        changed
    }

    pub(super) fn handle_key(&mut self, command: KeyCommand) -> bool {
        let tuning = self.config.keyboard;
        let step_px = self.state.viewport_width() * tuning.pan_fraction;
        let center_year = self.state.center_year();
        let scale = self.state.px_per_year();
        match command {
            KeyCommand::PanLeft => self.pan_by(-step_px),
            KeyCommand::PanRight => self.pan_by(step_px),
            KeyCommand::ZoomIn => self.navigate_now(center_year, scale * tuning.zoom_ratio),
            KeyCommand::ZoomOut => self.navigate_now(center_year, scale / tuning.zoom_ratio),
            KeyCommand::JumpToYear(year) => self.navigate_now(year, scale),
        }
    }

    fn navigate_now(&mut self, year: i32, px_per_year: f64) -> bool {
        self.queue_navigation(year, px_per_year);
        self.process_pending_navigation()
    }
}
