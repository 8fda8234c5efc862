use serde::{Deserialize, Serialize};

use crate::core::YearAxis;

use super::TimelineState;

/// A continuous year held fixed at a viewport pixel while the scale changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPin {
    pub pinned_year: f64,
    /// Offset of the pinned year from the viewport's left edge.
    pub anchor_px: f64,
}

impl AnchorPin {
    /// Pins whatever year currently sits under `anchor_px`.
    #[must_use]
    pub fn capture(state: &TimelineState, anchor_px: f64) -> Self {
        let pinned_year = state
            .axis()
            .pixel_to_fractional_year(state.scroll_left() + anchor_px, state.px_per_year());
        Self {
            pinned_year,
            anchor_px,
        }
    }

    /// Scroll offset keeping the pinned year at `anchor_px` under `px_per_year`.
    ///
    /// Not clamped; the store applies scroll bounds on write.
    #[must_use]
    pub fn scroll_for(self, axis: YearAxis, px_per_year: f64) -> f64 {
        axis.fractional_year_to_pixel(self.pinned_year, px_per_year) - self.anchor_px
    }
}
