//! The change badge starts counting 800 ms after the reveal and runs for one second.

use super::{drive, first_where, ms};
use crate::kpi::KpiAnimation;

#[test]
fn test_change_waits_for_its_delay() {
    let mut anim = KpiAnimation::new(125000.0, 12.5);
    let samples = drive(&mut anim, ms(0), ms(2200), ms(5));

    // Reveal at 100 ms, 800 ms delay, first 25 ms tick.
    assert_eq!(first_where(&samples, |f| f.change != 0.0), Some(ms(925)));
    assert_eq!(first_where(&samples, |f| f.change == 12.5), Some(ms(1900)));
}

#[test]
fn test_value_moves_before_change() {
    let mut anim = KpiAnimation::new(3.2, 0.8);
    let frame = anim.advance(ms(500));

    assert!(frame.value > 0.0);
    assert_eq!(frame.change, 0.0);
}

#[test]
fn test_negative_change_counts_down() {
    let mut anim = KpiAnimation::new(2840.0, -2.1);
    let samples = drive(&mut anim, ms(0), ms(2200), ms(25));

    let changes: Vec<f64> = samples.iter().map(|(_, f)| f.change).collect();
    assert!(changes.windows(2).all(|w| w[0] >= w[1]));
    assert!(changes.iter().all(|c| *c >= -2.1));
    assert_eq!(*changes.last().unwrap(), -2.1);
}
