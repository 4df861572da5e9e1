//! A card that unmounts mid-animation must stop producing updates.

use super::{drive, ms};
use crate::kpi::KpiAnimation;

#[test]
fn test_cancel_freezes_frame() {
    let mut anim = KpiAnimation::new(125000.0, 12.5);
    let frozen = anim.advance(ms(400));
    anim.cancel();

    let samples = drive(&mut anim, ms(400), ms(5000), ms(25));
    assert!(samples.iter().all(|(_, f)| *f == frozen));
    assert!(anim.is_settled());
}

#[test]
fn test_cancel_before_reveal_stays_hidden() {
    let mut anim = KpiAnimation::new(125000.0, 12.5);
    anim.advance(ms(10));
    anim.cancel();

    let frame = anim.advance(ms(1000));
    assert!(!frame.visible);
    assert_eq!(frame.value, 0.0);
}
