use crate::interaction::WheelDeltaMode;

use super::WheelZoomTuning;

/// Converts a raw wheel delta into pixels.
pub(super) fn normalize_wheel_delta(
    delta: f64,
    delta_mode: WheelDeltaMode,
    viewport_width: f64,
    tuning: WheelZoomTuning,
) -> f64 {
    match delta_mode {
        WheelDeltaMode::Pixel => delta,
        WheelDeltaMode::Line => delta * tuning.line_height_px,
        WheelDeltaMode::Page => delta * viewport_width,
    }
}

/// Log-space scale change for a vertical wheel delta already in pixels.
///
/// Wheel-up (`delta_y_px < 0`) zooms in. Returns `None` for zero deltas.
pub(super) fn resolve_wheel_log_delta(delta_y_px: f64, tuning: WheelZoomTuning) -> Option<f64> {
    if delta_y_px == 0.0 || delta_y_px.is_nan() {
        return None;
    }
    Some(-delta_y_px * tuning.log_units_per_wheel_px)
}

/// Log-space scale change for a pinch whose touches moved from `start` to `current` apart.
pub(super) fn resolve_pinch_log_delta(start_distance: f64, current_distance: f64) -> f64 {
    (current_distance / start_distance).ln()
}
