use tripmeter_core::speed_limit::{SpeedLimitAlert, DEFAULT_LIMIT_KMH};

#[test]
fn test_default_limit_is_eighty() {
    let alert = SpeedLimitAlert::default();
    assert_eq!(alert.limit_kmh(), 80.0);
    assert_eq!(DEFAULT_LIMIT_KMH, 80.0);
    assert!(!alert.is_active());
}

#[test]
fn test_alert_clears_when_slowing_down() {
    let mut alert = SpeedLimitAlert::default();

    assert!(alert.update(95.0));
    assert!(alert.is_active());

    assert!(!alert.update(72.0));
    assert!(!alert.is_active());
}

#[test]
fn test_at_the_limit_is_not_a_violation() {
    let mut alert = SpeedLimitAlert::new(50.0);
    assert!(!alert.update(50.0));
    assert!(alert.update(50.000001));
}

#[test]
fn test_text_reconfiguration_follows_the_field() {
    let mut alert = SpeedLimitAlert::default();

    alert.set_limit_text("30");
    assert!(alert.update(36.0));

    alert.set_limit_text("130");
    assert!(!alert.update(36.0));
}

#[test]
fn test_garbage_text_means_zero_limit() {
    let mut alert = SpeedLimitAlert::default();
    alert.set_limit_text("eighty");
    assert_eq!(alert.limit_kmh(), 0.0);
}
