use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Lower bound of the default axis (internal numbering, `-4000` is 4000 BC).
pub const YEAR_MIN: i32 = -4000;
/// Upper bound of the default axis (internal numbering, `2025` is 2026 AD).
pub const YEAR_MAX: i32 = 2025;
pub const MIN_PX_PER_YEAR: f64 = 1.0;
pub const MAX_PX_PER_YEAR: f64 = 500.0;

// Absorbs `(y * s) / s` landing a hair below `y` before flooring.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// Bounded integer year line with no year zero.
///
/// Year `Y` occupies the pixel cell `[yearToPixel(Y), yearToPixel(Y + 1))`, so the
/// continuous ("fractional") form of the axis spans `[year_min, year_max + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAxis {
    year_min: i32,
    year_max: i32,
}

impl Default for YearAxis {
    fn default() -> Self {
        Self {
            year_min: YEAR_MIN,
            year_max: YEAR_MAX,
        }
    }
}

impl YearAxis {
    pub fn new(year_min: i32, year_max: i32) -> TimelineResult<Self> {
        if year_min >= year_max {
            return Err(TimelineError::InvalidConfig(format!(
                "axis year_min ({year_min}) must be lower than year_max ({year_max})"
            )));
        }
        Ok(Self { year_min, year_max })
    }

    #[must_use]
    pub fn year_min(self) -> i32 {
        self.year_min
    }

    #[must_use]
    pub fn year_max(self) -> i32 {
        self.year_max
    }

    /// Number of year cells on the axis (`year_max - year_min + 1`).
    #[must_use]
    pub fn year_count(self) -> f64 {
        f64::from(self.year_max) - f64::from(self.year_min) + 1.0
    }

    #[must_use]
    pub fn clamp_year(self, year: i32) -> i32 {
        year.clamp(self.year_min, self.year_max)
    }

    /// Clamps a continuous year position to `[year_min, year_max + 1]`.
    #[must_use]
    pub fn clamp_fractional_year(self, year: f64) -> f64 {
        if year.is_nan() {
            return f64::from(self.year_min);
        }
        year.clamp(f64::from(self.year_min), f64::from(self.year_max) + 1.0)
    }

    #[must_use]
    pub fn year_to_pixel(self, year: i32, px_per_year: f64) -> f64 {
        (f64::from(self.clamp_year(year)) - f64::from(self.year_min)) * px_per_year
    }

    #[must_use]
    pub fn fractional_year_to_pixel(self, year: f64, px_per_year: f64) -> f64 {
        (self.clamp_fractional_year(year) - f64::from(self.year_min)) * px_per_year
    }

    /// Discrete inverse of [`Self::year_to_pixel`]: the year whose cell contains `px`.
    #[must_use]
    pub fn pixel_to_year(self, px: f64, px_per_year: f64) -> i32 {
        let offset = (px / px_per_year + FLOOR_TOLERANCE).floor();
        if !offset.is_finite() {
            return if offset > 0.0 {
                self.year_max
            } else {
                self.year_min
            };
        }
        let year = (f64::from(self.year_min) + offset)
            .clamp(f64::from(self.year_min), f64::from(self.year_max));
        year as i32
    }

    /// Continuous inverse used while animating; flooring is left to display time.
    #[must_use]
    pub fn pixel_to_fractional_year(self, px: f64, px_per_year: f64) -> f64 {
        self.clamp_fractional_year(f64::from(self.year_min) + px / px_per_year)
    }

    #[must_use]
    pub fn total_width(self, px_per_year: f64) -> f64 {
        self.year_count() * px_per_year
    }

    /// Largest scroll offset a viewport of `viewport_width` can reach.
    #[must_use]
    pub fn max_scroll_left(self, viewport_width: f64, px_per_year: f64) -> f64 {
        (self.total_width(px_per_year) - viewport_width).max(0.0)
    }

    /// Year under the viewport center.
    #[must_use]
    pub fn center_year(self, scroll_left: f64, viewport_width: f64, px_per_year: f64) -> i32 {
        self.pixel_to_year(scroll_left + viewport_width / 2.0, px_per_year)
    }
}

/// Closed zoom interval in pixels per year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min_px_per_year: f64,
    pub max_px_per_year: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            min_px_per_year: MIN_PX_PER_YEAR,
            max_px_per_year: MAX_PX_PER_YEAR,
        }
    }
}

impl ScaleBounds {
    pub fn new(min_px_per_year: f64, max_px_per_year: f64) -> TimelineResult<Self> {
        Self {
            min_px_per_year,
            max_px_per_year,
        }
        .validate()
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.min_px_per_year.is_finite() || self.min_px_per_year <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "min_px_per_year must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_px_per_year.is_finite() || self.max_px_per_year < self.min_px_per_year {
            return Err(TimelineError::InvalidConfig(
                "max_px_per_year must be finite and >= min_px_per_year".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, px_per_year: f64) -> f64 {
        if px_per_year.is_nan() {
            return self.min_px_per_year;
        }
        px_per_year.clamp(self.min_px_per_year, self.max_px_per_year)
    }

    #[must_use]
    pub fn contains(self, px_per_year: f64) -> bool {
        px_per_year >= self.min_px_per_year && px_per_year <= self.max_px_per_year
    }

    #[must_use]
    pub fn min_log(self) -> f64 {
        self.min_px_per_year.ln()
    }

    #[must_use]
    pub fn max_log(self) -> f64 {
        self.max_px_per_year.ln()
    }

    /// Clamps a natural-log scale value to the bounds expressed in log space.
    #[must_use]
    pub fn clamp_log(self, log_scale: f64) -> f64 {
        if log_scale.is_nan() {
            return self.min_log();
        }
        log_scale.clamp(self.min_log(), self.max_log())
    }
}
