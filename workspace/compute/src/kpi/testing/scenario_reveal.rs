//! A card mounts hidden, shows up after the reveal delay and counts its value up.

use super::{drive, first_where, ms};
use crate::kpi::KpiAnimation;

#[test]
fn test_reveal_happens_once_at_delay() {
    let mut anim = KpiAnimation::new(125000.0, 12.5);
    let samples = drive(&mut anim, ms(0), ms(400), ms(5));

    assert_eq!(first_where(&samples, |f| f.visible), Some(ms(100)));
    // Never hides again.
    let revealed = samples.iter().skip_while(|(_, f)| !f.visible);
    assert!(revealed.clone().count() > 0);
    assert!(revealed.into_iter().all(|(_, f)| f.visible));
}

#[test]
fn test_value_is_monotonic_and_lands_on_target() {
    let mut anim = KpiAnimation::new(2840.0, -2.1);
    let samples = drive(&mut anim, ms(0), ms(2000), ms(25));

    let values: Vec<f64> = samples.iter().map(|(_, f)| f.value).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*values.last().unwrap(), 2840.0);

    // 60 ticks of 25 ms after the reveal at 100 ms.
    assert_eq!(first_where(&samples, |f| f.value == 2840.0), Some(ms(1600)));
}

#[test]
fn test_late_sampling_catches_up() {
    let mut anim = KpiAnimation::new(89.5, 5.2);

    // A throttled tab may sample rarely: one frame well past the end.
    let frame = anim.advance(ms(10_000));
    assert!(frame.visible);
    assert_eq!(frame.value, 89.5);
    assert_eq!(frame.change, 5.2);
}

#[test]
fn test_zero_value_card() {
    let mut anim = KpiAnimation::new(0.0, 0.0);
    let frame = anim.advance(ms(2000));

    assert!(frame.visible);
    assert_eq!(frame.value, 0.0);
    assert!(anim.is_settled());
}
