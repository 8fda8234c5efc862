use serde::{Deserialize, Serialize};

use crate::core::{VisibleYearRange, YearInterval};
use crate::interaction::GestureMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineContext {
    pub scroll_left: f64,
    pub viewport_width: f64,
    pub px_per_year: f64,
    pub center_year: i32,
    pub visible_range: VisibleYearRange,
    pub active_interval: Option<YearInterval>,
    pub gesture_mode: GestureMode,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimelineEvent {
    /// Scroll, scale or viewport width changed.
    ViewChanged,
    GestureStarted { mode: GestureMode },
    GestureEnded { mode: GestureMode },
    NavigationStarted { year: i32, px_per_year: f64 },
    NavigationFinished { year: i32, px_per_year: f64 },
    ActiveIntervalChanged { interval: Option<YearInterval> },
}

/// Hook interface for sibling consumers (map view, year readout, range slider).
///
/// Observers see engine state through [`TimelineContext`] and never write it.
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TimelineEvent, context: TimelineContext);
}
