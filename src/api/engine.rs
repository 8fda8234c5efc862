use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    AxisTick, Dated, VisibleYearRange, YearInterval, ZoomBand, axis_ticks, format_year,
};
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::{
    MarkerCluster, PlacedCluster, TimelineEvent, TimelineObserver, cluster_markers,
    place_clusters,
};
use crate::interaction::{GestureMode, InputEvent, InteractionState};

use super::{
    FrameHandle, FrameScheduler, LandingAnimation, ManualFrameScheduler, PinchSession,
    TimelineEngineConfig, TimelineSnapshot, TimelineState, WheelMomentum,
};

/// The single gesture allowed to write scroll/scale at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ActiveGesture {
    Wheel(WheelMomentum),
    Pinch(PinchSession),
    Landing(LandingAnimation),
}

impl ActiveGesture {
    pub(super) fn mode(&self) -> GestureMode {
        match self {
            Self::Wheel(_) => GestureMode::WheelMomentum,
            Self::Pinch(_) => GestureMode::PinchZoom,
            Self::Landing(_) => GestureMode::LandingAnimation,
        }
    }
}

/// Zoom/pan orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns the injected [`TimelineState`], turns [`InputEvent`]s into
/// scroll/scale writes, and drives momentum and landing loops through the
/// injected [`FrameScheduler`]. Starting any gesture cancels the one in flight.
pub struct TimelineEngine<S: FrameScheduler> {
    pub(super) scheduler: S,
    pub(super) state: TimelineState,
    pub(super) config: TimelineEngineConfig,
    pub(super) interaction: InteractionState,
    pub(super) gesture: Option<ActiveGesture>,
    pub(super) active_frame: Option<FrameHandle>,
    pub(super) observers: IndexMap<String, Box<dyn TimelineObserver>>,
}

impl<S: FrameScheduler> TimelineEngine<S> {
    /// Builds an engine around an existing store.
    ///
    /// The store must share `config`'s axis and scale bounds. Its live viewport
    /// width, scroll and scale take precedence over `viewport_width`,
    /// `initial_px_per_year` and `initial_center_year`, which only seed
    /// [`TimelineEngine::from_config`]. A navigation already queued on the store
    /// requests the first frame.
    pub fn new(
        scheduler: S,
        state: TimelineState,
        config: TimelineEngineConfig,
    ) -> TimelineResult<Self> {
        let config = config.validate()?;
        if state.axis() != config.axis {
            return Err(TimelineError::InvalidConfig(format!(
                "state axis [{}, {}] does not match config axis [{}, {}]",
                state.axis().year_min(),
                state.axis().year_max(),
                config.axis.year_min(),
                config.axis.year_max(),
            )));
        }
        if state.scale_bounds() != config.scale_bounds {
            return Err(TimelineError::InvalidConfig(format!(
                "state scale bounds [{}, {}] do not match config bounds [{}, {}]",
                state.scale_bounds().min_px_per_year,
                state.scale_bounds().max_px_per_year,
                config.scale_bounds.min_px_per_year,
                config.scale_bounds.max_px_per_year,
            )));
        }

        let mut engine = Self {
            scheduler,
            state,
            config,
            interaction: InteractionState::default(),
            gesture: None,
            active_frame: None,
            observers: IndexMap::new(),
        };
        if engine.state.pending_navigation().is_some() {
            debug!("store carries a queued navigation");
            engine.request_frame();
        }
        Ok(engine)
    }

    /// Builds the store from `config` and centers it on `initial_center_year`.
    pub fn from_config(scheduler: S, config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let state = TimelineState::centered_on(
            config.axis,
            config.scale_bounds,
            config.viewport_width,
            config.initial_px_per_year,
            config.initial_center_year,
        );
        Self::new(scheduler, state, config)
    }

    #[must_use]
    pub fn state(&self) -> &TimelineState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &TimelineEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn gesture_mode(&self) -> GestureMode {
        self.gesture
            .as_ref()
            .map_or(GestureMode::Idle, ActiveGesture::mode)
    }

    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.state.scroll_left()
    }

    #[must_use]
    pub fn px_per_year(&self) -> f64 {
        self.state.px_per_year()
    }

    #[must_use]
    pub fn center_year(&self) -> i32 {
        self.state.center_year()
    }

    /// Buffered year range worth rendering right now.
    #[must_use]
    pub fn visible_range(&self) -> VisibleYearRange {
        self.state.visible_range(self.config.buffer_years)
    }

    /// Content-space pixel offset of `year` at the live scale.
    #[must_use]
    pub fn pixel_for_year(&self, year: i32) -> f64 {
        self.state
            .axis()
            .year_to_pixel(year, self.state.px_per_year())
    }

    /// Offset of `year` from the viewport's left edge at the live scale.
    #[must_use]
    pub fn viewport_x_for_year(&self, year: i32) -> f64 {
        self.pixel_for_year(year) - self.state.scroll_left()
    }

    #[must_use]
    pub fn zoom_band(&self) -> ZoomBand {
        ZoomBand::from_px_per_year(self.state.px_per_year())
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<AxisTick> {
        axis_ticks(self.visible_range(), self.state.px_per_year())
    }

    /// Formats a year with the configured notation.
    #[must_use]
    pub fn year_label(&self, year: i32) -> String {
        format_year(year, self.config.notation)
    }

    #[must_use]
    pub fn clusters<M: Dated + Clone>(&self, markers: &[M]) -> Vec<MarkerCluster<M>> {
        cluster_markers(markers, self.state.px_per_year(), self.config.clustering)
    }

    /// Clusters `markers` and resolves each cluster to pixel space.
    #[must_use]
    pub fn placed_clusters<M: Dated + Clone>(&self, markers: &[M]) -> Vec<PlacedCluster> {
        place_clusters(
            &self.clusters(markers),
            self.state.axis(),
            self.state.px_per_year(),
            self.state.scroll_left(),
        )
    }

    /// Routes one input event. Returns `true` when scroll/scale changed synchronously.
    ///
    /// Invalid input never errors: it is logged and dropped.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let mut changed = self.process_pending_navigation();
        changed |= match event {
            InputEvent::Wheel {
                delta_x,
                delta_y,
                delta_mode,
                modifiers,
            } => self.handle_wheel(delta_x, delta_y, delta_mode, modifiers),
            InputEvent::PinchStart { touches } => self.begin_pinch(touches),
            InputEvent::PinchMove { touches } => self.update_pinch(touches),
            InputEvent::PinchEnd => self.end_pinch(),
            InputEvent::PointerMove { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.interaction.on_pointer_move(x, y);
                }
                false
            }
            InputEvent::PointerLeave => {
                self.interaction.on_pointer_leave();
                false
            }
            InputEvent::Pan { delta_px } => self.pan_by(delta_px),
            InputEvent::Key(command) => self.handle_key(command),
            InputEvent::NavigateTo { year, px_per_year } => {
                self.queue_navigation(year, px_per_year);
                self.process_pending_navigation()
            }
        };
        changed
    }

    /// Advances whichever loop requested `handle`.
    ///
    /// Frames that are not the currently requested one are ignored, so a loop
    /// that lost ownership can never write state.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp_ms: f64) -> bool {
        if self.active_frame != Some(handle) {
            trace!(handle = handle.raw(), "ignoring stale frame");
            return false;
        }
        self.active_frame = None;

        let mut changed = self.process_pending_navigation();
        changed |= match self.gesture {
            Some(ActiveGesture::Wheel(_)) => self.step_wheel_momentum(),
            Some(ActiveGesture::Landing(_)) => self.step_landing(timestamp_ms),
            Some(ActiveGesture::Pinch(_)) | None => false,
        };
        changed
    }

    /// Resizes the viewport keeping the current center position fixed.
    pub fn resize_viewport(&mut self, viewport_width: f64) -> bool {
        if let Err(err) = super::input_validation::validate_viewport_width(viewport_width) {
            debug!(error = %err, "ignoring viewport resize");
            return false;
        }
        let axis = self.state.axis();
        let scale = self.state.px_per_year();
        let center = axis.pixel_to_fractional_year(
            self.state.scroll_left() + self.state.viewport_width() / 2.0,
            scale,
        );
        let scroll = axis.fractional_year_to_pixel(center, scale) - viewport_width / 2.0;
        let changed = self.state.set_viewport(viewport_width, scroll);
        if changed {
            self.emit_event(TimelineEvent::ViewChanged);
        }
        changed
    }

    /// Sets or clears the highlighted interval. Scroll and scale are untouched.
    pub fn set_active_interval(&mut self, interval: Option<YearInterval>) -> bool {
        let changed = self.state.set_active_interval(interval);
        if changed {
            self.emit_event(TimelineEvent::ActiveIntervalChanged {
                interval: self.state.active_interval(),
            });
        }
        changed
    }

    /// Cancels any in-flight gesture and its frame request. Safe to call when idle.
    pub fn cancel_active_gesture(&mut self) {
        if let Some(handle) = self.active_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(gesture) = self.gesture.take() {
            debug!(mode = ?gesture.mode(), "cancelled in-flight gesture");
            self.emit_event(TimelineEvent::GestureEnded {
                mode: gesture.mode(),
            });
        }
    }

    /// Tears the engine down; no frame may write state afterwards.
    pub fn shutdown(&mut self) {
        self.cancel_active_gesture();
        self.state.take_pending_navigation();
    }

    pub(super) fn request_frame(&mut self) {
        if let Some(previous) = self.active_frame.take() {
            self.scheduler.cancel_frame(previous);
        }
        self.active_frame = Some(self.scheduler.request_frame());
    }

    pub(super) fn start_gesture(&mut self, gesture: ActiveGesture) {
        self.cancel_active_gesture();
        let mode = gesture.mode();
        self.gesture = Some(gesture);
        debug!(?mode, "gesture started");
        self.emit_event(TimelineEvent::GestureStarted { mode });
    }

    pub(super) fn finish_gesture(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            debug!(mode = ?gesture.mode(), "gesture finished");
            self.emit_event(TimelineEvent::GestureEnded {
                mode: gesture.mode(),
            });
        }
    }

    /// Writes scroll and scale atomically and notifies observers on change.
    pub(super) fn apply_view(&mut self, scroll_left: f64, px_per_year: f64) -> bool {
        let changed = self.state.set_view(scroll_left, px_per_year);
        if changed {
            self.emit_event(TimelineEvent::ViewChanged);
        }
        changed
    }
}

impl TimelineEngine<ManualFrameScheduler> {
    /// Fires every pending frame at `timestamp_ms`. Returns `true` if any wrote state.
    pub fn pump_frame(&mut self, timestamp_ms: f64) -> bool {
        let handles = self.scheduler.take_pending();
        let mut changed = false;
        for handle in handles {
            changed |= self.on_frame(handle, timestamp_ms);
        }
        changed
    }

    /// Pumps frames every `frame_ms` until no loop is running or `max_frames` elapse.
    ///
    /// Returns the timestamp of the last frame fired.
    pub fn run_until_idle(&mut self, start_ms: f64, frame_ms: f64, max_frames: usize) -> f64 {
        let mut now = start_ms;
        let mut last_fired = start_ms;
        for _ in 0..max_frames {
            if self.scheduler.pending_count() == 0 {
                break;
            }
            self.pump_frame(now);
            last_fired = now;
            now += frame_ms;
        }
        last_fired
    }
}

impl<S: FrameScheduler> Drop for TimelineEngine<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.active_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
