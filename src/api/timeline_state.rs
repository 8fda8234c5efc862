use serde::{Deserialize, Serialize};

use crate::core::{ScaleBounds, VisibleYearRange, YearAxis, YearInterval, visible_range};

/// One-shot request to animate to `year` at `px_per_year`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    pub year: i32,
    pub px_per_year: f64,
}

/// Live `{scroll, scale, center}` triple plus the highlighted interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub px_per_year: f64,
    pub center_year: i32,
    pub active_interval: Option<YearInterval>,
}

/// Single source of truth for the viewport.
///
/// Every setter clamps its inputs and recomputes `center_year` before returning,
/// so readers never observe a stale derived value. Non-finite inputs are ignored
/// and reported as "unchanged".
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    axis: YearAxis,
    scale_bounds: ScaleBounds,
    scroll_left: f64,
    viewport_width: f64,
    px_per_year: f64,
    center_year: i32,
    pending_navigation: Option<PendingNavigation>,
    active_interval: Option<YearInterval>,
}

impl TimelineState {
    /// Creates a state scrolled to the start of the axis.
    #[must_use]
    pub fn new(
        axis: YearAxis,
        scale_bounds: ScaleBounds,
        viewport_width: f64,
        px_per_year: f64,
    ) -> Self {
        let mut state = Self {
            axis,
            scale_bounds,
            scroll_left: 0.0,
            viewport_width: 0.0,
            px_per_year: scale_bounds.min_px_per_year,
            center_year: axis.year_min(),
            pending_navigation: None,
            active_interval: None,
        };
        let width = sanitize_width(viewport_width).unwrap_or(0.0);
        let scale = if px_per_year.is_finite() {
            px_per_year
        } else {
            scale_bounds.min_px_per_year
        };
        state.write(0.0, width, scale);
        state
    }

    /// Creates a state with `center_year` under the viewport center.
    #[must_use]
    pub fn centered_on(
        axis: YearAxis,
        scale_bounds: ScaleBounds,
        viewport_width: f64,
        px_per_year: f64,
        center_year: i32,
    ) -> Self {
        let mut state = Self::new(axis, scale_bounds, viewport_width, px_per_year);
        let scroll = state.scroll_to_center(center_year, state.px_per_year);
        state.write(scroll, state.viewport_width, state.px_per_year);
        state
    }

    #[must_use]
    pub fn axis(&self) -> YearAxis {
        self.axis
    }

    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        self.scale_bounds
    }

    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn px_per_year(&self) -> f64 {
        self.px_per_year
    }

    #[must_use]
    pub fn center_year(&self) -> i32 {
        self.center_year
    }

    #[must_use]
    pub fn max_scroll_left(&self) -> f64 {
        self.axis
            .max_scroll_left(self.viewport_width, self.px_per_year)
    }

    #[must_use]
    pub fn pending_navigation(&self) -> Option<PendingNavigation> {
        self.pending_navigation
    }

    #[must_use]
    pub fn active_interval(&self) -> Option<YearInterval> {
        self.active_interval
    }

    #[must_use]
    pub fn visible_range(&self, buffer_years: u32) -> VisibleYearRange {
        visible_range(
            self.axis,
            self.scroll_left,
            self.viewport_width,
            self.px_per_year,
            buffer_years,
        )
    }

    #[must_use]
    pub fn snapshot(&self) -> TimelineSnapshot {
        TimelineSnapshot {
            scroll_left: self.scroll_left,
            viewport_width: self.viewport_width,
            px_per_year: self.px_per_year,
            center_year: self.center_year,
            active_interval: self.active_interval,
        }
    }

    /// Scroll offset that puts the start of `year` under the viewport center.
    #[must_use]
    pub fn scroll_to_center(&self, year: i32, px_per_year: f64) -> f64 {
        self.axis.year_to_pixel(year, px_per_year) - self.viewport_width / 2.0
    }

    pub fn set_scroll_left(&mut self, scroll_left: f64) -> bool {
        if !scroll_left.is_finite() {
            return false;
        }
        self.write(scroll_left, self.viewport_width, self.px_per_year)
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) -> bool {
        let Some(width) = sanitize_width(viewport_width) else {
            return false;
        };
        self.write(self.scroll_left, width, self.px_per_year)
    }

    /// Changes the scale while keeping the current scroll offset.
    pub fn set_px_per_year(&mut self, px_per_year: f64) -> bool {
        if !px_per_year.is_finite() {
            return false;
        }
        self.write(self.scroll_left, self.viewport_width, px_per_year)
    }

    /// Writes scroll and scale together; the pair is applied atomically.
    pub fn set_view(&mut self, scroll_left: f64, px_per_year: f64) -> bool {
        if !scroll_left.is_finite() || !px_per_year.is_finite() {
            return false;
        }
        self.write(scroll_left, self.viewport_width, px_per_year)
    }

    /// Writes viewport width and scroll together.
    pub fn set_viewport(&mut self, viewport_width: f64, scroll_left: f64) -> bool {
        let Some(width) = sanitize_width(viewport_width) else {
            return false;
        };
        if !scroll_left.is_finite() {
            return false;
        }
        self.write(scroll_left, width, self.px_per_year)
    }

    /// Queues a navigation request; the engine consumes it once.
    pub fn set_pending_navigation(&mut self, year: i32, px_per_year: f64) -> bool {
        if !px_per_year.is_finite() {
            return false;
        }
        self.pending_navigation = Some(PendingNavigation {
            year: self.axis.clamp_year(year),
            px_per_year: self.scale_bounds.clamp(px_per_year),
        });
        true
    }

    pub fn take_pending_navigation(&mut self) -> Option<PendingNavigation> {
        self.pending_navigation.take()
    }

    /// Sets the highlighted interval; scroll and scale are left untouched.
    pub fn set_active_interval(&mut self, interval: Option<YearInterval>) -> bool {
        let interval = interval.map(|value| value.clamped_to(self.axis));
        if self.active_interval == interval {
            return false;
        }
        self.active_interval = interval;
        true
    }

    fn write(&mut self, scroll_left: f64, viewport_width: f64, px_per_year: f64) -> bool {
        let px_per_year = self.scale_bounds.clamp(px_per_year);
        let max_scroll = self.axis.max_scroll_left(viewport_width, px_per_year);
        let scroll_left = scroll_left.clamp(0.0, max_scroll);

        let changed = scroll_left != self.scroll_left
            || viewport_width != self.viewport_width
            || px_per_year != self.px_per_year;
        self.scroll_left = scroll_left;
        self.viewport_width = viewport_width;
        self.px_per_year = px_per_year;
        self.center_year = self
            .axis
            .center_year(scroll_left, viewport_width, px_per_year);
        changed
    }
}

fn sanitize_width(viewport_width: f64) -> Option<f64> {
    if viewport_width.is_finite() {
        Some(viewport_width.max(0.0))
    } else {
        None
    }
}
