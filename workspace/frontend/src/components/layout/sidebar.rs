use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{Route, Section};

pub const FOOTER: &str = "Analytics Dashboard v1.0";

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let active = use_route::<Route>().and_then(|route| Section::for_route(&route));

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="dashboard-drawer"></label>
            <div class="w-64 min-h-full flex flex-col bg-neutral text-neutral-content">
                <div class="h-16 flex items-center gap-2 px-6 border-b border-neutral-content/20">
                    <i class="fas fa-chart-column text-2xl text-info"></i>
                    <span class="text-xl font-bold">{"Dashboard"}</span>
                </div>

                <ul class="menu flex-1 px-4 py-6 gap-1">
                    { for Section::ALL.iter().map(|section| {
                        let classes = if active == Some(*section) {
                            classes!("active", "bg-primary", "text-primary-content")
                        } else {
                            classes!("hover:bg-neutral-focus")
                        };
                        html! {
                            <li>
                                <Link<Route> to={section.route()} classes={classes}>
                                    <i class={classes!(section.icon(), "w-5")}></i>
                                    { section.label() }
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>

                <div class="p-4 border-t border-neutral-content/20 text-xs opacity-60">{ FOOTER }</div>
            </div>
        </div>
    }
}
