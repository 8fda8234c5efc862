use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BUFFER_YEARS, ScaleBounds, YearAxis, YearNotation};
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::ClusterConfig;

/// Tuning for wheel-driven log-space momentum zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelZoomTuning {
    /// Share of the remaining log distance covered per frame.
    pub lerp_factor: f64,
    /// Momentum settles (and snaps to the target) below this log distance.
    pub settle_epsilon: f64,
    /// Natural-log scale change per wheel pixel.
    pub log_units_per_wheel_px: f64,
    /// Pixels per wheel line in `WheelDeltaMode::Line`.
    pub line_height_px: f64,
}

impl Default for WheelZoomTuning {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            settle_epsilon: 0.0002,
            log_units_per_wheel_px: 0.002,
            line_height_px: 16.0,
        }
    }
}

impl WheelZoomTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.lerp_factor.is_finite() || self.lerp_factor <= 0.0 || self.lerp_factor > 1.0 {
            return Err(TimelineError::InvalidConfig(
                "wheel zoom `lerp_factor` must be in (0, 1]".to_owned(),
            ));
        }
        for (value, name) in [
            (self.settle_epsilon, "settle_epsilon"),
            (self.log_units_per_wheel_px, "log_units_per_wheel_px"),
            (self.line_height_px, "line_height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidConfig(format!(
                    "wheel zoom `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Tuning for the fixed-duration landing animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingTuning {
    pub duration_ms: f64,
    /// The animation starts this many px/yr below its target scale.
    pub start_scale_offset: f64,
}

impl Default for LandingTuning {
    fn default() -> Self {
        Self {
            duration_ms: 400.0,
            start_scale_offset: 50.0,
        }
    }
}

impl LandingTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "landing `duration_ms` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.start_scale_offset.is_finite() || self.start_scale_offset < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "landing `start_scale_offset` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyboardTuning {
    /// Fraction of the viewport width moved by one pan key press.
    pub pan_fraction: f64,
    /// Scale multiplier applied by one zoom key press.
    pub zoom_ratio: f64,
}

impl Default for KeyboardTuning {
    fn default() -> Self {
        Self {
            pan_fraction: 0.25,
            zoom_ratio: 2.0,
        }
    }
}

impl KeyboardTuning {
    pub fn validate(self) -> TimelineResult<Self> {
        if !self.pan_fraction.is_finite() || self.pan_fraction <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "keyboard `pan_fraction` must be finite and > 0".to_owned(),
            ));
        }
        if !self.zoom_ratio.is_finite() || self.zoom_ratio <= 1.0 {
            return Err(TimelineError::InvalidConfig(
                "keyboard `zoom_ratio` must be finite and > 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist/load timeline setup as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    #[serde(default)]
    pub axis: YearAxis,
    #[serde(default)]
    pub scale_bounds: ScaleBounds,
    pub viewport_width: f64,
    pub initial_px_per_year: f64,
    #[serde(default)]
    pub initial_center_year: i32,
    #[serde(default = "default_buffer_years")]
    pub buffer_years: u32,
    #[serde(default)]
    pub wheel_zoom: WheelZoomTuning,
    #[serde(default)]
    pub landing: LandingTuning,
    #[serde(default)]
    pub keyboard: KeyboardTuning,
    #[serde(default)]
    pub clustering: ClusterConfig,
    #[serde(default)]
    pub notation: YearNotation,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self::new(1000.0, 5.0)
    }
}

impl TimelineEngineConfig {
    /// Creates a config over the default axis and zoom bounds.
    #[must_use]
    pub fn new(viewport_width: f64, initial_px_per_year: f64) -> Self {
        Self {
            axis: YearAxis::default(),
            scale_bounds: ScaleBounds::default(),
            viewport_width,
            initial_px_per_year,
            initial_center_year: 0,
            buffer_years: default_buffer_years(),
            wheel_zoom: WheelZoomTuning::default(),
            landing: LandingTuning::default(),
            keyboard: KeyboardTuning::default(),
            clustering: ClusterConfig::default(),
            notation: YearNotation::default(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: YearAxis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_scale_bounds(mut self, bounds: ScaleBounds) -> Self {
        self.scale_bounds = bounds;
        self
    }

    /// Sets the year placed under the viewport center at startup.
    #[must_use]
    pub fn with_initial_center_year(mut self, year: i32) -> Self {
        self.initial_center_year = year;
        self
    }

    #[must_use]
    pub fn with_buffer_years(mut self, buffer_years: u32) -> Self {
        self.buffer_years = buffer_years;
        self
    }

    #[must_use]
    pub fn with_wheel_zoom(mut self, tuning: WheelZoomTuning) -> Self {
        self.wheel_zoom = tuning;
        self
    }

    #[must_use]
    pub fn with_landing(mut self, tuning: LandingTuning) -> Self {
        self.landing = tuning;
        self
    }

    #[must_use]
    pub fn with_keyboard(mut self, tuning: KeyboardTuning) -> Self {
        self.keyboard = tuning;
        self
    }

    #[must_use]
    pub fn with_clustering(mut self, config: ClusterConfig) -> Self {
        self.clustering = config;
        self
    }

    #[must_use]
    pub fn with_notation(mut self, notation: YearNotation) -> Self {
        self.notation = notation;
        self
    }

    pub fn validate(self) -> TimelineResult<Self> {
        YearAxis::new(self.axis.year_min(), self.axis.year_max())?;
        self.scale_bounds.validate()?;
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(TimelineError::InvalidConfig(
                "viewport_width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.initial_px_per_year.is_finite() || self.initial_px_per_year <= 0.0 {
            return Err(TimelineError::InvalidConfig(
                "initial_px_per_year must be finite and > 0".to_owned(),
            ));
        }
        self.wheel_zoom.validate()?;
        self.landing.validate()?;
        self.keyboard.validate()?;
        self.clustering.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_buffer_years() -> u32 {
    DEFAULT_BUFFER_YEARS
}
