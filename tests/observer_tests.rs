use std::cell::RefCell;
use std::rc::Rc;

use timeline_rs::core::YearInterval;
use timeline_rs::extensions::{TimelineContext, TimelineEvent, TimelineObserver};
use timeline_rs::interaction::{GestureMode, InputEvent};
use timeline_rs::{ManualFrameScheduler, TimelineEngine, TimelineEngineConfig, TimelineError};

type EventLog = Rc<RefCell<Vec<(TimelineEvent, TimelineContext)>>>;

struct Recorder {
    id: &'static str,
    log: EventLog,
}

impl TimelineObserver for Recorder {
    fn id(&self) -> &str {
        self.id
    }

    fn on_event(&mut self, event: TimelineEvent, context: TimelineContext) {
        self.log.borrow_mut().push((event, context));
    }
}

fn build_engine() -> TimelineEngine<ManualFrameScheduler> {
    TimelineEngine::from_config(
        ManualFrameScheduler::default(),
        TimelineEngineConfig::new(1000.0, 5.0),
    )
    .expect("engine init")
}

fn recorder(engine: &mut TimelineEngine<ManualFrameScheduler>, id: &'static str) -> EventLog {
    let log = EventLog::default();
    engine
        .register_observer(Box::new(Recorder {
            id,
            log: log.clone(),
        }))
        .expect("register observer");
    log
}

#[test]
fn landing_emits_bracketing_navigation_events() {
    let mut engine = build_engine();
    let log = recorder(&mut engine, "readout");

    engine.dispatch(InputEvent::NavigateTo {
        year: 800,
        px_per_year: 90.0,
    });
    engine.run_until_idle(0.0, 16.0, 100);

    let events: Vec<TimelineEvent> = log.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        events.first(),
        Some(&TimelineEvent::NavigationStarted {
            year: 800,
            px_per_year: 90.0,
        })
    );
    assert_eq!(
        events.last(),
        Some(&TimelineEvent::NavigationFinished {
            year: 800,
            px_per_year: 90.0,
        })
    );
    assert!(events.contains(&TimelineEvent::GestureStarted {
        mode: GestureMode::LandingAnimation,
    }));
    assert!(events.contains(&TimelineEvent::GestureEnded {
        mode: GestureMode::LandingAnimation,
    }));
    assert!(events.iter().filter(|event| **event == TimelineEvent::ViewChanged).count() > 2);

    let (_, final_context) = *log.borrow().last().expect("events recorded");
    assert_eq!(final_context.px_per_year, 90.0);
    assert_eq!(final_context.center_year, 800);
    assert_eq!(final_context.gesture_mode, GestureMode::Idle);
}

#[test]
fn context_carries_live_triple_on_every_view_change() {
    let mut engine = build_engine();
    let log = recorder(&mut engine, "slider");

    engine.dispatch(InputEvent::Pan { delta_px: 500.0 });
    let (event, context) = log.borrow()[0];
    assert_eq!(event, TimelineEvent::ViewChanged);
    assert_eq!(context.scroll_left, engine.scroll_left());
    assert_eq!(context.center_year, engine.center_year());
    assert_eq!(context.visible_range, engine.visible_range());
}

#[test]
fn observers_run_in_registration_order() {
    let mut engine = build_engine();
    let shared = EventLog::default();
    for id in ["first", "second"] {
        engine
            .register_observer(Box::new(Recorder {
                id,
                log: shared.clone(),
            }))
            .expect("register");
    }
    engine.set_active_interval(Some(YearInterval::new(1, 2)));
    assert_eq!(shared.borrow().len(), 2);
    assert_eq!(
        shared.borrow()[0].0,
        TimelineEvent::ActiveIntervalChanged {
            interval: Some(YearInterval::new(1, 2)),
        }
    );
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let mut engine = build_engine();
    let _log = recorder(&mut engine, "map");

    let duplicate = engine.register_observer(Box::new(Recorder {
        id: "map",
        log: EventLog::default(),
    }));
    assert!(matches!(duplicate, Err(TimelineError::InvalidInput(_))));

    let empty = engine.register_observer(Box::new(Recorder {
        id: "",
        log: EventLog::default(),
    }));
    assert!(matches!(empty, Err(TimelineError::InvalidInput(_))));
    assert_eq!(engine.observer_count(), 1);
}

#[test]
fn unregistered_observer_stops_receiving_events() {
    let mut engine = build_engine();
    let log = recorder(&mut engine, "map");
    assert!(engine.has_observer("map"));
    assert!(engine.unregister_observer("map"));
    assert!(!engine.unregister_observer("map"));

    engine.dispatch(InputEvent::Pan { delta_px: 50.0 });
    assert!(log.borrow().is_empty());
}

#[test]
fn cancelled_gesture_reports_its_end() {
    let mut engine = build_engine();
    let log = recorder(&mut engine, "status");
    engine.dispatch(InputEvent::wheel(0.0, -100.0));
    engine.cancel_active_gesture();

    let events: Vec<TimelineEvent> = log.borrow().iter().map(|(event, _)| *event).collect();
    assert_eq!(
        events,
        vec![
            TimelineEvent::GestureStarted {
                mode: GestureMode::WheelMomentum,
            },
            TimelineEvent::GestureEnded {
                mode: GestureMode::WheelMomentum,
            },
        ]
    );
}
