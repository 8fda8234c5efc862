use timeline_rs::telemetry::{DEFAULT_FILTER, TelemetryOptions, init_default_tracing, init_tracing};

#[test]
fn default_options_follow_engine_target() {
    let options = TelemetryOptions::default();
    assert_eq!(options.fallback_filter, DEFAULT_FILTER);
    assert!(options.with_target);

    let custom = options.with_fallback_filter("warn").with_target(false);
    assert_eq!(custom.fallback_filter, "warn");
    assert!(!custom.with_target);
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing(&TelemetryOptions::default()));
}

#[cfg(feature = "telemetry")]
#[test]
fn second_init_reports_existing_subscriber() {
    let _ = init_default_tracing();
    assert!(!init_tracing(&TelemetryOptions::default().with_fallback_filter("trace")));
}
