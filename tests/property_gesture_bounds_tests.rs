use proptest::prelude::*;
use timeline_rs::interaction::{InputEvent, TouchPoint};
use timeline_rs::{ManualFrameScheduler, TimelineEngine, TimelineEngineConfig};

#[derive(Debug, Clone, Copy)]
enum Op {
    Wheel(f64, f64),
    Pinch(f64),
    Pan(f64),
    Navigate(i32, f64),
    Resize(f64),
    Frames(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(dx, dy)| Op::Wheel(dx, dy)),
        (1e-3f64..1e3).prop_map(Op::Pinch),
        (-1e7f64..1e7).prop_map(Op::Pan),
        (-10_000i32..10_000, 1e-3f64..1e4).prop_map(|(year, scale)| Op::Navigate(year, scale)),
        (0.0f64..5_000.0).prop_map(Op::Resize),
        (1u8..40).prop_map(Op::Frames),
    ]
}

fn assert_in_bounds(engine: &TimelineEngine<ManualFrameScheduler>) -> Result<(), TestCaseError> {
    let state = engine.state();
    let axis = state.axis();
    prop_assert!(state.px_per_year() >= 1.0 && state.px_per_year() <= 500.0);
    prop_assert!(state.scroll_left() >= 0.0);
    prop_assert!(state.scroll_left() <= state.max_scroll_left());
    prop_assert_eq!(
        state.center_year(),
        axis.center_year(state.scroll_left(), state.viewport_width(), state.px_per_year())
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adversarial_input_never_leaves_bounds(
        ops in prop::collection::vec(op_strategy(), 1..40),
        pointer_x in 0.0f64..1_000.0
    ) {
        let config = TimelineEngineConfig::new(1000.0, 5.0);
        let mut engine = TimelineEngine::from_config(ManualFrameScheduler::default(), config)
            .expect("engine init");
        engine.dispatch(InputEvent::PointerMove { x: pointer_x, y: 10.0 });

        let mut now = 0.0;
        for op in ops {
            match op {
                Op::Wheel(dx, dy) => {
                    engine.dispatch(InputEvent::wheel(dx, dy));
                }
                Op::Pinch(ratio) => {
                    let start = [TouchPoint::new(400.0, 0.0), TouchPoint::new(600.0, 0.0)];
                    let half = 100.0 * ratio;
                    let moved = [TouchPoint::new(500.0 - half, 0.0), TouchPoint::new(500.0 + half, 0.0)];
                    engine.dispatch(InputEvent::PinchStart { touches: start });
                    engine.dispatch(InputEvent::PinchMove { touches: moved });
                    assert_in_bounds(&engine)?;
                    engine.dispatch(InputEvent::PinchEnd);
                }
                Op::Pan(delta) => {
                    engine.dispatch(InputEvent::Pan { delta_px: delta });
                }
                Op::Navigate(year, scale) => {
                    engine.dispatch(InputEvent::NavigateTo { year, px_per_year: scale });
                }
                Op::Resize(width) => {
                    engine.resize_viewport(width);
                }
                Op::Frames(count) => {
                    for _ in 0..count {
                        engine.pump_frame(now);
                        now += 16.0;
                        assert_in_bounds(&engine)?;
                    }
                }
            }
            assert_in_bounds(&engine)?;
        }

        engine.run_until_idle(now, 16.0, 2_000);
        assert_in_bounds(&engine)?;
        prop_assert_eq!(engine.scheduler().pending_count(), 0);
    }
}
