use serde::{Deserialize, Serialize};

use crate::core::VisibleYearRange;

/// Discrete zoom band derived from `px_per_year`.
///
/// Bands are never stored on their own; they are recomputed from the live scale
/// whenever tick or marker density needs to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZoomBand {
    Millennia,
    Centuries,
    Decades,
    Years,
}

/// Label/tick cadence on the internal year line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDensity {
    pub label_step: i32,
    pub tick_step: i32,
}

impl ZoomBand {
    #[must_use]
    pub fn from_px_per_year(px_per_year: f64) -> Self {
        if px_per_year >= 100.0 {
            Self::Years
        } else if px_per_year >= 10.0 {
            Self::Decades
        } else if px_per_year >= 1.0 {
            Self::Centuries
        } else {
            Self::Millennia
        }
    }

    #[must_use]
    pub fn density(self) -> TickDensity {
        match self {
            Self::Years => TickDensity {
                label_step: 1,
                tick_step: 1,
            },
            Self::Decades => TickDensity {
                label_step: 10,
                tick_step: 5,
            },
            Self::Centuries => TickDensity {
                label_step: 100,
                tick_step: 50,
            },
            Self::Millennia => TickDensity {
                label_step: 1000,
                tick_step: 500,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub year: i32,
    pub labeled: bool,
}

/// Enumerates tick years inside an inclusive visible range.
///
/// The output grows with `range` length, so callers pass a
/// [`visible_range`](crate::core::visible_range) result, which is bounded by
/// the viewport and the axis.
#[must_use]
pub fn axis_ticks(range: VisibleYearRange, px_per_year: f64) -> Vec<AxisTick> {
    let density = ZoomBand::from_px_per_year(px_per_year).density();
    if range.start_year > range.end_year {
        return Vec::new();
    }

    let step = i64::from(density.tick_step);
    let label_step = i64::from(density.label_step);
    let start = i64::from(range.start_year);
    let end = i64::from(range.end_year);
    let mut year = start + (step - start.rem_euclid(step)) % step;
    let mut ticks = Vec::new();
    while year <= end {
        ticks.push(AxisTick {
            year: year as i32,
            labeled: year.rem_euclid(label_step) == 0,
        });
        year += step;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::{ZoomBand, axis_ticks};
    use crate::core::VisibleYearRange;

    #[test]
    fn band_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(ZoomBand::from_px_per_year(100.0), ZoomBand::Years);
        assert_eq!(ZoomBand::from_px_per_year(99.99), ZoomBand::Decades);
        assert_eq!(ZoomBand::from_px_per_year(10.0), ZoomBand::Decades);
        assert_eq!(ZoomBand::from_px_per_year(1.0), ZoomBand::Centuries);
        assert_eq!(ZoomBand::from_px_per_year(0.5), ZoomBand::Millennia);
    }

    #[test]
    fn negative_ranges_align_to_step_multiples() {
        let ticks = axis_ticks(
            VisibleYearRange {
                start_year: -23,
                end_year: 1,
            },
            12.0,
        );
        let years: Vec<i32> = ticks.iter().map(|tick| tick.year).collect();
        assert_eq!(years, vec![-20, -15, -10, -5, 0]);
        let labeled: Vec<i32> = ticks
            .iter()
            .filter(|tick| tick.labeled)
            .map(|tick| tick.year)
            .collect();
        assert_eq!(labeled, vec![-20, -10, 0]);
    }

    #[test]
    fn ranges_at_the_i32_edges_do_not_overflow() {
        let top = axis_ticks(
            VisibleYearRange {
                start_year: i32::MAX - 1,
                end_year: i32::MAX,
            },
            12.0,
        );
        assert!(top.is_empty());

        let top_years = axis_ticks(
            VisibleYearRange {
                start_year: i32::MAX - 3,
                end_year: i32::MAX,
            },
            150.0,
        );
        let years: Vec<i32> = top_years.iter().map(|tick| tick.year).collect();
        assert_eq!(years, vec![i32::MAX - 3, i32::MAX - 2, i32::MAX - 1, i32::MAX]);

        let bottom = axis_ticks(
            VisibleYearRange {
                start_year: i32::MIN,
                end_year: i32::MIN + 1_000,
            },
            0.5,
        );
        assert_eq!(bottom.len(), 2);
        assert!(bottom.iter().all(|tick| i64::from(tick.year) % 500 == 0));
    }
}
