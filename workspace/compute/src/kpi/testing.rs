//! Time-driven scenarios for [`KpiAnimation`].
//!
//! Each scenario drives an animation with a simulated clock, the way the
//! browser ticker does, and asserts on the recorded frames.

mod scenario_cancel;
mod scenario_change_delay;
mod scenario_retarget;
mod scenario_reveal;

use std::time::Duration;

use super::{KpiAnimation, KpiFrame};

/// Frame recorded at a point of the simulated clock.
pub type Sample = (Duration, KpiFrame);

/// Advances `anim` from `from` to `until` (inclusive) in `step` increments.
pub fn drive(anim: &mut KpiAnimation, from: Duration, until: Duration, step: Duration) -> Vec<Sample> {
    let mut samples = Vec::new();
    let mut now = from;
    while now <= until {
        samples.push((now, anim.advance(now)));
        now += step;
    }
    samples
}

/// First sample whose frame satisfies `pred`.
pub fn first_where(samples: &[Sample], pred: impl Fn(&KpiFrame) -> bool) -> Option<Duration> {
    samples.iter().find(|(_, frame)| pred(frame)).map(|(at, _)| *at)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
