//! Reveal-then-count-up behaviour of a KPI card.
//!
//! The card starts hidden, becomes visible after [`REVEAL_DELAY`], then the
//! displayed value counts from zero to the metric value. The displayed
//! change follows the same pattern, starting later and running shorter.
//! [`KpiAnimation`] is pure: it is advanced with the time elapsed since the
//! card mounted and reports what to draw.

#[cfg(test)]
mod testing;

use std::time::Duration;

use common::{format_currency, format_number, format_percentage, format_signed_percentage};
use model::{KpiMetric, MetricFormat, Trend};
use tracing::debug;

use crate::animation::{Easing, Tween, TweenSpec};

/// Time a freshly mounted card stays hidden.
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);

/// Value count-up: starts on reveal, 1.5 s in 60 ticks of 25 ms.
pub const VALUE_TWEEN: TweenSpec = TweenSpec::new(Duration::ZERO, Duration::from_millis(1500), 60);

/// Change count-up: starts 800 ms after reveal, 1 s in 40 ticks of 25 ms.
pub const CHANGE_TWEEN: TweenSpec =
    TweenSpec::new(Duration::from_millis(800), Duration::from_millis(1000), 40);

/// Timing knobs of a card animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiTimeline {
    pub reveal_delay: Duration,
    pub value: TweenSpec,
    pub change: TweenSpec,
    pub easing: Easing,
}

impl Default for KpiTimeline {
    fn default() -> Self {
        Self {
            reveal_delay: REVEAL_DELAY,
            value: VALUE_TWEEN,
            change: CHANGE_TWEEN,
            easing: Easing::Linear,
        }
    }
}

impl KpiTimeline {
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shortest interval at which sampling the animation can observe every tick.
    pub fn tick_interval(&self) -> Duration {
        self.value.tick_interval().min(self.change.tick_interval())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiPhase {
    Hidden,
    Visible,
}

/// What a card shows at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiFrame {
    pub visible: bool,
    pub value: f64,
    pub change: f64,
}

#[derive(Debug, Clone)]
pub struct KpiAnimation {
    timeline: KpiTimeline,
    phase: KpiPhase,
    /// Elapsed time the running tweens are measured from. Unset while hidden.
    anchor: Option<Duration>,
    value: Tween,
    change: Tween,
    value_ticks: u32,
    change_ticks: u32,
    cancelled: bool,
}

impl KpiAnimation {
    pub fn new(value: f64, change: f64) -> Self {
        Self::with_timeline(value, change, KpiTimeline::default())
    }

    pub fn with_timeline(value: f64, change: f64, timeline: KpiTimeline) -> Self {
        Self {
            timeline,
            phase: KpiPhase::Hidden,
            anchor: None,
            value: Self::tween(value, timeline.value, timeline.easing),
            change: Self::tween(change, timeline.change, timeline.easing),
            value_ticks: 0,
            change_ticks: 0,
            cancelled: false,
        }
    }

    fn tween(target: f64, spec: TweenSpec, easing: Easing) -> Tween {
        Tween::new(0.0, target, spec.steps).with_easing(easing)
    }

    /// Brings the animation up to `elapsed` (time since mount) and returns the frame to draw.
    ///
    /// Calls with a smaller `elapsed` than before are harmless: ticks already
    /// applied are never undone.
    pub fn advance(&mut self, elapsed: Duration) -> KpiFrame {
        if self.cancelled {
            return self.frame();
        }

        if self.phase == KpiPhase::Hidden && elapsed >= self.timeline.reveal_delay {
            self.phase = KpiPhase::Visible;
            self.anchor = Some(self.timeline.reveal_delay);
            debug!("KPI card revealed at {:?}", elapsed);
        }

        if let Some(anchor) = self.anchor {
            let since = elapsed.saturating_sub(anchor);

            let due = self.timeline.value.ticks_due(since);
            while self.value_ticks < due && self.value.tick().is_some() {
                self.value_ticks += 1;
            }

            let due = self.timeline.change.ticks_due(since);
            while self.change_ticks < due && self.change.tick().is_some() {
                self.change_ticks += 1;
            }
        }

        self.frame()
    }

    /// Restarts both count-ups from zero towards new targets.
    ///
    /// In-flight tweens are cancelled first. A visible card stays visible and
    /// its tweens are measured from `elapsed`; a hidden card keeps waiting for
    /// its reveal.
    pub fn retarget(&mut self, value: f64, change: f64, elapsed: Duration) {
        self.value.cancel();
        self.change.cancel();

        self.value = Self::tween(value, self.timeline.value, self.timeline.easing);
        self.change = Self::tween(change, self.timeline.change, self.timeline.easing);
        self.value_ticks = 0;
        self.change_ticks = 0;
        self.cancelled = false;
        if self.phase == KpiPhase::Visible {
            self.anchor = Some(elapsed);
        }
        debug!("KPI card retargeted to value={} change={}", value, change);
    }

    /// Freezes the card. No later [`advance`](Self::advance) changes what it shows.
    pub fn cancel(&mut self) {
        self.value.cancel();
        self.change.cancel();
        self.cancelled = true;
    }

    /// True once nothing will change without a retarget.
    pub fn is_settled(&self) -> bool {
        self.cancelled
            || (self.phase == KpiPhase::Visible && !self.value.is_running() && !self.change.is_running())
    }

    pub fn phase(&self) -> KpiPhase {
        self.phase
    }

    pub fn timeline(&self) -> &KpiTimeline {
        &self.timeline
    }

    pub fn frame(&self) -> KpiFrame {
        KpiFrame {
            visible: self.phase == KpiPhase::Visible,
            value: self.value.current(),
            change: self.change.current(),
        }
    }
}

/// Renders a KPI value in its declared format.
pub fn format_metric_value(value: f64, format: MetricFormat) -> String {
    match format {
        MetricFormat::Currency => format_currency(value),
        MetricFormat::Percentage => format_percentage(value),
        MetricFormat::Number => format_number(value),
    }
}

/// Icon and colour classes for a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStyle {
    pub icon: &'static str,
    pub text_class: &'static str,
    pub badge_class: &'static str,
    pub glow_class: &'static str,
}

pub fn trend_style(trend: Trend) -> TrendStyle {
    match trend {
        Trend::Up => TrendStyle {
            icon: "fas fa-arrow-trend-up",
            text_class: "text-success",
            badge_class: "bg-success/10 border border-success/30",
            glow_class: "hover:shadow-success/20",
        },
        Trend::Down => TrendStyle {
            icon: "fas fa-arrow-trend-down",
            text_class: "text-error",
            badge_class: "bg-error/10 border border-error/30",
            glow_class: "hover:shadow-error/20",
        },
        Trend::Neutral => TrendStyle {
            icon: "fas fa-minus",
            text_class: "text-base-content/60",
            badge_class: "bg-base-200 border border-base-300",
            glow_class: "hover:shadow-base-content/10",
        },
    }
}

/// Everything a KPI card renders for one frame, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiView {
    pub label: String,
    pub visible: bool,
    pub value_text: String,
    pub change_text: String,
    pub trend: TrendStyle,
}

impl KpiView {
    pub fn new(metric: &KpiMetric, frame: &KpiFrame) -> Self {
        Self {
            label: metric.label.clone(),
            visible: frame.visible,
            value_text: format_metric_value(frame.value, metric.format),
            change_text: format_signed_percentage(frame.change),
            trend: trend_style(metric.trend),
        }
    }

    /// The view once every animation has landed.
    pub fn settled(metric: &KpiMetric) -> Self {
        Self::new(
            metric,
            &KpiFrame {
                visible: true,
                value: metric.value,
                change: metric.change,
            },
        )
    }
}
