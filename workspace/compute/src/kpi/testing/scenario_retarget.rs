//! New input while a count-up is in flight restarts it towards the new target.

use super::{drive, ms};
use crate::kpi::{KpiAnimation, KpiPhase};

#[test]
fn test_retarget_mid_flight_restarts_from_zero() {
    let mut anim = KpiAnimation::new(1000.0, 10.0);
    let before = anim.advance(ms(600));
    assert!(before.value > 0.0 && before.value < 1000.0);

    anim.retarget(500.0, -5.0, ms(600));
    let frame = anim.frame();
    assert!(frame.visible);
    assert_eq!(frame.value, 0.0);
    assert_eq!(frame.change, 0.0);

    // Measured from the retarget, not from the mount.
    let frame = anim.advance(ms(625));
    assert_eq!(frame.value, 500.0 / 60.0);

    let samples = drive(&mut anim, ms(650), ms(3000), ms(25));
    let last = samples.last().unwrap().1;
    assert_eq!(last.value, 500.0);
    assert_eq!(last.change, -5.0);
    assert!(samples.iter().all(|(_, f)| f.value <= 500.0));
}

#[test]
fn test_retarget_while_hidden_keeps_reveal_schedule() {
    let mut anim = KpiAnimation::new(1000.0, 10.0);
    anim.advance(ms(50));
    anim.retarget(42.0, 1.0, ms(50));

    assert_eq!(anim.phase(), KpiPhase::Hidden);
    assert!(anim.advance(ms(100)).visible);
    assert_eq!(anim.advance(ms(1600)).value, 42.0);
}

#[test]
fn test_retarget_after_cancel_resumes() {
    let mut anim = KpiAnimation::new(1000.0, 10.0);
    anim.advance(ms(300));
    anim.cancel();
    anim.retarget(7.0, 0.5, ms(300));

    assert!(!anim.is_settled());
    let frame = anim.advance(ms(5000));
    assert_eq!(frame.value, 7.0);
    assert_eq!(frame.change, 0.5);
}
