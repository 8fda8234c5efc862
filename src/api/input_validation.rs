use crate::error::{TimelineError, TimelineResult};
use crate::interaction::TouchPoint;

pub(super) fn validate_wheel_deltas(delta_x: f64, delta_y: f64) -> TimelineResult<()> {
    if !delta_x.is_finite() || !delta_y.is_finite() {
        return Err(TimelineError::InvalidInput(
            "wheel deltas must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_pan_delta(delta_px: f64) -> TimelineResult<()> {
    if !delta_px.is_finite() {
        return Err(TimelineError::InvalidInput(
            "pan pixel delta must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Returns the inter-touch distance when it can drive a pinch.
pub(super) fn validate_pinch_touches(touches: [TouchPoint; 2]) -> TimelineResult<f64> {
    let [first, second] = touches;
    if !first.is_finite() || !second.is_finite() {
        return Err(TimelineError::InvalidInput(
            "pinch touch coordinates must be finite".to_owned(),
        ));
    }
    let distance = first.distance_to(second);
    if !distance.is_finite() || distance <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "pinch touch distance must be finite and > 0".to_owned(),
        ));
    }
    Ok(distance)
}

pub(super) fn validate_viewport_width(viewport_width: f64) -> TimelineResult<()> {
    if !viewport_width.is_finite() || viewport_width < 0.0 {
        return Err(TimelineError::InvalidInput(
            "viewport width must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_navigation_scale(px_per_year: f64) -> TimelineResult<()> {
    if !px_per_year.is_finite() || px_per_year <= 0.0 {
        return Err(TimelineError::InvalidInput(
            "navigation px_per_year must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
