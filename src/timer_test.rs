use super::*;

fn base() -> Instant {
    Instant::now()
}

#[test]
fn default_is_unarmed() {
    let d = Deadline::new();
    assert!(!d.is_armed());
}

#[test]
fn unarmed_never_fires() {
    let mut d = Deadline::new();
    assert!(!d.fire_if_due(base() + Duration::from_secs(1000)));
}

#[test]
fn fires_once_at_deadline_then_disarms() {
    let t0 = base();
    let mut d = Deadline::new();
    d.arm(t0, Duration::from_millis(100));

    assert!(!d.fire_if_due(t0 + Duration::from_millis(99)));
    assert!(d.fire_if_due(t0 + Duration::from_millis(100)));
    assert!(!d.is_armed());
    assert!(!d.fire_if_due(t0 + Duration::from_millis(200)));
}

#[test]
fn arm_if_unarmed_respects_pending_deadline() {
    let t0 = base();
    let mut d = Deadline::new();
    assert!(d.arm_if_unarmed(t0, Duration::from_millis(100)));
    // a later arm attempt must not push the deadline out
    assert!(!d.arm_if_unarmed(t0 + Duration::from_millis(50), Duration::from_millis(100)));
    assert!(d.fire_if_due(t0 + Duration::from_millis(100)));
}

#[test]
fn rearm_extends_the_deadline() {
    let t0 = base();
    let mut d = Deadline::new();
    d.arm(t0, Duration::from_millis(100));
    d.arm(t0 + Duration::from_millis(50), Duration::from_millis(100));

    assert!(!d.fire_if_due(t0 + Duration::from_millis(120)));
    assert!(d.fire_if_due(t0 + Duration::from_millis(150)));
}

#[test]
fn disarm_cancels() {
    let t0 = base();
    let mut d = Deadline::new();
    d.arm(t0, Duration::from_millis(100));
    d.disarm();
    assert!(!d.is_armed());
    assert!(!d.fire_if_due(t0 + Duration::from_secs(10)));
}
