//! Discrete interpolation tasks sampled by an external clock.
//!
//! A [`Tween`] moves a displayed number from a start value to a target in a
//! fixed number of steps. It owns no timer: whoever drives it calls
//! [`Tween::tick`] and stops when it returns `None`. [`TweenSpec`] maps
//! wall-clock time onto the number of ticks that should have happened.

use std::time::Duration;

/// Shaping function applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Equal increments per step.
    #[default]
    Linear,
    /// Fast start, gentle landing.
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease-out" | "ease-out-cubic" => Some(Easing::EaseOutCubic),
            _ => None,
        }
    }
}

/// Timing of one tween relative to the moment its owner anchors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    /// Wait between the anchor and the start of the tween.
    pub delay: Duration,
    /// Total running time once started.
    pub duration: Duration,
    /// Number of discrete ticks the duration is split into.
    pub steps: u32,
}

impl TweenSpec {
    pub const fn new(delay: Duration, duration: Duration, steps: u32) -> Self {
        Self { delay, duration, steps }
    }

    pub fn tick_interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }

    /// How many ticks are due `elapsed` after the anchor, never more than `steps`.
    pub fn ticks_due(&self, elapsed: Duration) -> u32 {
        if elapsed < self.delay {
            return 0;
        }
        let interval = self.tick_interval().as_nanos();
        if interval == 0 {
            return self.steps;
        }
        let due = (elapsed - self.delay).as_nanos() / interval;
        due.min(self.steps as u128) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Running,
    Finished,
    Cancelled,
}

/// A number travelling from `start` to `target` in `steps` ticks.
///
/// The last tick, or any tick that reaches or passes the target, lands
/// exactly on `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f64,
    target: f64,
    steps: u32,
    easing: Easing,
    step: u32,
    increment: f64,
    current: f64,
    state: TweenState,
}

impl Tween {
    pub fn new(start: f64, target: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            start,
            target,
            steps,
            easing: Easing::Linear,
            step: 0,
            increment: (target - start) / steps as f64,
            current: start,
            state: TweenState::Running,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances one step and returns the new value, or `None` once finished or cancelled.
    pub fn tick(&mut self) -> Option<f64> {
        if self.state != TweenState::Running {
            return None;
        }

        self.step += 1;
        self.current = match self.easing {
            Easing::Linear => self.current + self.increment,
            easing => {
                let progress = easing.apply(self.step as f64 / self.steps as f64);
                self.start + (self.target - self.start) * progress
            }
        };

        let reached = if self.increment >= 0.0 {
            self.current >= self.target
        } else {
            self.current <= self.target
        };
        if reached || self.step >= self.steps {
            self.current = self.target;
            self.state = TweenState::Finished;
        }

        Some(self.current)
    }

    /// Stops the tween where it is. A cancelled tween never yields another value.
    pub fn cancel(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Cancelled;
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == TweenState::Finished
    }
}
