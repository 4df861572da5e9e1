use std::rc::Rc;
use std::time::Duration;

use compute::chart::HoverState;
use compute::theme::Theme;
use gloo_timers::callback::Timeout;
use model::demo::dashboard_dataset;
use model::DashboardDataset;
use yew::prelude::*;

use crate::components::charts::plotly_chart::PointerHit;
use crate::context::ThemeContext;

/// The dataset snapshot from [`crate::context::DatasetProvider`].
#[hook]
pub fn use_dataset() -> Rc<DashboardDataset> {
    use_context::<Rc<DashboardDataset>>().unwrap_or_else(|| {
        log::warn!("No dataset provider found, rendering demo data");
        Rc::new(dashboard_dataset())
    })
}

/// The active theme and its toggle; a no-op toggle outside a provider.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}

/// False until `delay` after mount, then true for the component's lifetime.
#[hook]
pub fn use_reveal(delay: Duration) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        use_effect_with((), move |_| {
            let timeout = Timeout::new(millis, move || visible.set(true));
            // Dropping the timeout on unmount cancels it.
            move || drop(timeout)
        });
    }

    *visible
}

/// Hover state of one chart plus where the pointer is, relative to the chart container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChartPointer {
    pub hover: HoverState,
    pub position: Option<(f64, f64)>,
}

pub enum PointerAction {
    Move { hit: PointerHit, len: usize },
    Leave,
}

impl Reducible for ChartPointer {
    type Action = PointerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            PointerAction::Move { hit, len } => {
                next.hover.pointer_move(hit.index, len);
                next.position = next.hover.index().map(|_| (hit.x, hit.y));
            }
            PointerAction::Leave => {
                next.hover.pointer_leave();
                next.position = None;
            }
        }
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Per-chart pointer tracking. The returned callback takes the hit reported by
/// the plot, or `None` when the pointer left it.
#[hook]
pub fn use_chart_pointer(len: usize) -> (ChartPointer, Callback<Option<PointerHit>>) {
    let pointer = use_reducer(ChartPointer::default);

    let on_pointer = {
        let dispatcher = pointer.dispatcher();
        Callback::from(move |hit: Option<PointerHit>| match hit {
            Some(hit) => dispatcher.dispatch(PointerAction::Move { hit, len }),
            None => dispatcher.dispatch(PointerAction::Leave),
        })
    };

    (*pointer, on_pointer)
}
