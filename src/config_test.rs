use super::*;

#[test]
fn defaults_keep_check_interval_and_idle_threshold_distinct() {
    let config = EnhancerConfig::default();
    assert_eq!(config.refresh_check_interval_ms, 60_000);
    assert_eq!(config.refresh_idle_threshold_ms, 30_000);
    assert_eq!(config.alert_delay_ms, 5_000);
    assert_eq!(config.alert_fade_ms, 500);
    assert_eq!(config.busy_revert_ms, 10_000);
    assert_eq!(config.age_tick_ms, 60_000);
    assert_eq!(config.card_stagger_ms, 100);
    assert!(!config.guard_editable_shortcuts);
    assert!(!config.skip_busy_on_cancelled);
}

#[test]
fn empty_object_yields_defaults() {
    let config = EnhancerConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, EnhancerConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = EnhancerConfig::from_json(r#"{"alert_delay_ms": 8000, "guard_editable_shortcuts": true}"#)
        .expect("override should parse");
    assert_eq!(config.alert_delay_ms, 8_000);
    assert!(config.guard_editable_shortcuts);
    assert_eq!(config.alert_fade_ms, 500);
}

#[test]
fn malformed_json_is_rejected() {
    let err = EnhancerConfig::from_json("{not json").expect_err("should fail");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = EnhancerConfig::from_json(r#"{"alert_delay": 1}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn zero_repeating_intervals_are_rejected() {
    let err = EnhancerConfig::from_json(r#"{"refresh_check_interval_ms": 0}"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::ZeroInterval { field: "refresh_check_interval_ms" }));

    let err = EnhancerConfig::from_json(r#"{"age_tick_ms": 0}"#).expect_err("should fail");
    assert!(err.to_string().contains("age_tick_ms"));
}

#[test]
fn zero_one_shot_delays_are_allowed() {
    let config = EnhancerConfig::from_json(r#"{"alert_delay_ms": 0, "card_stagger_ms": 0}"#)
        .expect("one-shot delays may be zero");
    assert_eq!(config.alert_delay_ms, 0);
}

#[test]
fn busy_skip_can_be_enabled() {
    let config = EnhancerConfig::from_json(r#"{"skip_busy_on_cancelled": true}"#).expect("override should parse");
    assert!(config.skip_busy_on_cancelled);
    assert!(!config.guard_editable_shortcuts);
}
