use approx::{assert_abs_diff_eq, assert_relative_eq};
use timeline_rs::core::YearAxis;
use timeline_rs::interaction::{GestureMode, InputEvent, WheelDeltaMode, WheelModifiers};
use timeline_rs::{ManualFrameScheduler, TimelineEngine, TimelineEngineConfig};

fn build_engine(px_per_year: f64, center_year: i32) -> TimelineEngine<ManualFrameScheduler> {
    let config = TimelineEngineConfig::new(1000.0, px_per_year).with_initial_center_year(center_year);
    TimelineEngine::from_config(ManualFrameScheduler::default(), config).expect("engine init")
}

fn pump_until_idle<F>(engine: &mut TimelineEngine<ManualFrameScheduler>, mut on_frame: F) -> usize
where
    F: FnMut(&TimelineEngine<ManualFrameScheduler>),
{
    let mut frames = 0;
    let mut now = 0.0;
    while engine.scheduler().pending_count() > 0 {
        engine.pump_frame(now);
        on_frame(engine);
        now += 16.0;
        frames += 1;
        assert!(frames < 1_000, "wheel momentum must settle");
    }
    frames
}

#[test]
fn wheel_zoom_keeps_pointer_year_pinned_on_every_frame() {
    let mut engine = build_engine(50.0, 1500);
    let axis = YearAxis::default();
    assert_eq!(engine.scroll_left(), 274_500.0);

    engine.dispatch(InputEvent::PointerMove { x: 400.0, y: 20.0 });
    // 274_900 px at 50 px/yr is exactly year 1498.
    assert!(!engine.dispatch(InputEvent::wheel(0.0, -100.0)));
    assert_eq!(engine.gesture_mode(), GestureMode::WheelMomentum);
    assert_eq!(engine.scheduler().pending_count(), 1);

    let frames = pump_until_idle(&mut engine, |engine| {
        let anchor = axis.fractional_year_to_pixel(1498.0, engine.px_per_year()) - engine.scroll_left();
        assert_abs_diff_eq!(anchor, 400.0, epsilon = 1e-6);
    });

    assert!(frames > 1);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
    assert_relative_eq!(engine.px_per_year(), 50.0 * 0.2_f64.exp(), max_relative = 1e-12);
}

#[test]
fn wheel_zoom_without_pointer_anchors_viewport_center() {
    let mut engine = build_engine(50.0, 1500);
    assert_eq!(engine.center_year(), 1500);

    engine.dispatch(InputEvent::wheel(0.0, -300.0));
    pump_until_idle(&mut engine, |engine| {
        assert_eq!(engine.center_year(), 1500);
    });
    assert!(engine.px_per_year() > 50.0);
}

#[test]
fn pointer_leave_restores_center_fallback() {
    let mut engine = build_engine(50.0, 1500);
    engine.dispatch(InputEvent::PointerMove { x: 10.0, y: 0.0 });
    engine.dispatch(InputEvent::PointerLeave);
    engine.dispatch(InputEvent::wheel(0.0, 200.0));
    pump_until_idle(&mut engine, |engine| {
        assert_eq!(engine.center_year(), 1500);
    });
    assert!(engine.px_per_year() < 50.0);
}

#[test]
fn successive_wheel_steps_accumulate_target() {
    let mut engine = build_engine(50.0, 0);
    engine.dispatch(InputEvent::wheel(0.0, -100.0));
    engine.pump_frame(0.0);
    engine.dispatch(InputEvent::wheel(0.0, -100.0));
    assert_eq!(engine.scheduler().pending_count(), 1);

    pump_until_idle(&mut engine, |_| {});
    assert_relative_eq!(engine.px_per_year(), 50.0 * 0.4_f64.exp(), max_relative = 1e-12);
}

#[test]
fn line_mode_deltas_are_scaled_to_pixels() {
    let mut engine = build_engine(50.0, 0);
    engine.dispatch(InputEvent::Wheel {
        delta_x: 0.0,
        delta_y: -3.0,
        delta_mode: WheelDeltaMode::Line,
        modifiers: WheelModifiers::default(),
    });
    pump_until_idle(&mut engine, |_| {});
    // 3 lines * 16 px * 0.002
    assert_relative_eq!(engine.px_per_year(), 50.0 * 0.096_f64.exp(), max_relative = 1e-12);
}

#[test]
fn horizontal_dominant_wheel_pans() {
    let mut engine = build_engine(5.0, 0);
    let before = engine.scroll_left();
    assert!(engine.dispatch(InputEvent::wheel(120.0, 10.0)));
    assert_eq!(engine.scroll_left(), before + 120.0);
    assert_eq!(engine.px_per_year(), 5.0);
    assert_eq!(engine.scheduler().pending_count(), 0);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}

#[test]
fn modifier_turns_vertical_wheel_into_pan() {
    let mut engine = build_engine(5.0, 0);
    let before = engine.scroll_left();
    let changed = engine.dispatch(InputEvent::Wheel {
        delta_x: 0.0,
        delta_y: -80.0,
        delta_mode: WheelDeltaMode::Pixel,
        modifiers: WheelModifiers {
            shift: true,
            ..WheelModifiers::default()
        },
    });
    assert!(changed);
    assert_eq!(engine.scroll_left(), before - 80.0);
    assert_eq!(engine.px_per_year(), 5.0);
}

#[test]
fn wheel_at_scale_limit_does_not_start_a_loop() {
    let mut engine = build_engine(500.0, 0);
    engine.dispatch(InputEvent::wheel(0.0, -100.0));
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
    assert_eq!(engine.scheduler().pending_count(), 0);
    assert_eq!(engine.px_per_year(), 500.0);
}

#[test]
fn huge_wheel_delta_stops_at_max_scale() {
    let mut engine = build_engine(5.0, 0);
    engine.dispatch(InputEvent::wheel(0.0, -1e300));
    pump_until_idle(&mut engine, |engine| {
        assert!(engine.px_per_year() <= 500.0);
        assert!(engine.scroll_left() >= 0.0);
        assert!(engine.scroll_left() <= engine.state().max_scroll_left());
    });
    assert_relative_eq!(engine.px_per_year(), 500.0, max_relative = 1e-12);
}

#[test]
fn non_finite_wheel_is_ignored() {
    let mut engine = build_engine(5.0, 0);
    let before = engine.snapshot();
    assert!(!engine.dispatch(InputEvent::wheel(f64::NAN, -100.0)));
    assert!(!engine.dispatch(InputEvent::wheel(0.0, f64::INFINITY)));
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.gesture_mode(), GestureMode::Idle);
}
