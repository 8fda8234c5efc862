use serde::{Deserialize, Serialize};

use crate::core::{Dated, YearAxis, YearInterval};

/// Years kept mounted on each side of the viewport.
pub const DEFAULT_BUFFER_YEARS: u32 = 5;

/// Inclusive range of years worth rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleYearRange {
    pub start_year: i32,
    pub end_year: i32,
}

impl VisibleYearRange {
    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year
    }
}

/// Computes the buffered year range covered by the viewport.
///
/// Pure and O(1); callers recompute it on every scroll, resize or scale change.
#[must_use]
pub fn visible_range(
    axis: YearAxis,
    scroll_left: f64,
    viewport_width: f64,
    px_per_year: f64,
    buffer_years: u32,
) -> VisibleYearRange {
    let buffer = i64::from(buffer_years);
    let first = i64::from(axis.pixel_to_year(scroll_left, px_per_year)) - buffer;
    let last = i64::from(axis.pixel_to_year(scroll_left + viewport_width, px_per_year)) + buffer;

    VisibleYearRange {
        start_year: first.max(i64::from(axis.year_min())) as i32,
        end_year: last.min(i64::from(axis.year_max())) as i32,
    }
}

/// Returns markers whose year falls inside the visible range, in input order.
#[must_use]
pub fn markers_in_range<M: Dated + Clone>(markers: &[M], range: VisibleYearRange) -> Vec<M> {
    markers
        .iter()
        .filter(|marker| range.contains(marker.year()))
        .cloned()
        .collect()
}

/// Returns markers inside the highlighted interval, or all of them when none is set.
#[must_use]
pub fn filter_by_interval<M: Dated + Clone>(
    markers: &[M],
    interval: Option<YearInterval>,
) -> Vec<M> {
    match interval {
        Some(interval) => markers
            .iter()
            .filter(|marker| interval.contains(marker.year()))
            .cloned()
            .collect(),
        None => markers.to_vec(),
    }
}
