use std::time::Duration;

use compute::kpi::{KpiAnimation, KpiFrame, KpiTimeline, KpiView};
use model::KpiMetric;
use yew::prelude::*;

use crate::common::ticker::{start_ticker, TickControl};
use crate::settings::get_settings;

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub metric: KpiMetric,
}

fn since(mounted_at_ms: f64) -> Duration {
    let elapsed = js_sys::Date::now() - mounted_at_ms;
    Duration::from_secs_f64(elapsed.max(0.0) / 1000.0)
}

/// Points the card at new targets and returns the frame to show straight away.
fn restart(animation: &mut KpiAnimation, value: f64, change: f64, elapsed: Duration) -> KpiFrame {
    animation.retarget(value, change, elapsed);
    animation.frame()
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let metric = &props.metric;
    let mounted_at = use_mut_ref(js_sys::Date::now);
    let animation = use_mut_ref(|| {
        let timeline = KpiTimeline::default().with_easing(get_settings().kpi_easing);
        KpiAnimation::with_timeline(metric.value, metric.change, timeline)
    });
    let frame = use_state(|| animation.borrow().frame());

    {
        let animation = animation.clone();
        let frame = frame.clone();
        use_effect_with((metric.value, metric.change), move |(value, change)| {
            let mounted_at = *mounted_at.borrow();
            frame.set(restart(&mut animation.borrow_mut(), *value, *change, since(mounted_at)));
            let interval = animation.borrow().timeline().tick_interval();

            let ticker = {
                let animation = animation.clone();
                start_ticker(interval, move || {
                    let mut animation = animation.borrow_mut();
                    frame.set(animation.advance(since(mounted_at)));
                    if animation.is_settled() {
                        TickControl::Stop
                    } else {
                        TickControl::Continue
                    }
                })
            };

            move || {
                ticker.cancel();
                animation.borrow_mut().cancel();
            }
        });
    }

    let view = KpiView::new(metric, &frame);
    let trend = view.trend;
    let reveal = if view.visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4"
    };

    html! {
        <div class={classes!("card", "bg-base-100", "shadow-xl", "transition-all", "duration-700", "hover:shadow-2xl", trend.glow_class, reveal)}>
            <div class="card-body p-5">
                <div class="flex items-start justify-between">
                    <h3 class="text-sm font-medium text-base-content/70">{ &view.label }</h3>
                    <span class={classes!("rounded-lg", "p-2", trend.text_class, trend.badge_class)}>
                        <i class={trend.icon}></i>
                    </span>
                </div>
                <div class="text-3xl font-bold tabular-nums">{ &view.value_text }</div>
                <div class={classes!("text-sm", "font-semibold", "tabular-nums", trend.text_class)}>
                    { &view.change_text }
                    <span class="ml-1 font-normal text-base-content/50">{"vs last period"}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_restart_shows_zeroed_frame_immediately() {
        let mut animation = KpiAnimation::new(1000.0, 10.0);
        let shown = animation.advance(ms(1000));
        assert!(shown.value > 0.0);

        let frame = restart(&mut animation, 400.0, -3.0, ms(1000));
        assert_eq!(
            frame,
            KpiFrame {
                visible: true,
                value: 0.0,
                change: 0.0
            }
        );
        assert_eq!(animation.advance(ms(1025)).value, 400.0 / 60.0);
    }

    #[test]
    fn test_restart_before_reveal_stays_hidden() {
        let mut animation = KpiAnimation::new(1000.0, 10.0);
        let frame = restart(&mut animation, 5.0, 1.0, ms(20));
        assert!(!frame.visible);
    }
}
