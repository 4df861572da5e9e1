use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{Route, Section};

#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbItem {
    pub label: &'static str,
    pub route: Route,
}

/// Trail from the overview to `route`.
pub fn trail(route: Option<&Route>) -> Vec<BreadcrumbItem> {
    let home = BreadcrumbItem {
        label: "Home",
        route: Route::Overview,
    };

    match route {
        Some(Route::NotFound) => vec![
            home,
            BreadcrumbItem {
                label: "404",
                route: Route::NotFound,
            },
        ],
        Some(route) => match Section::for_route(route) {
            Some(Section::Overview) | None => vec![home],
            Some(section) => vec![
                home,
                BreadcrumbItem {
                    label: section.label(),
                    route: section.route(),
                },
            ],
        },
        None => vec![home],
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let route = use_route::<Route>();
    let items = trail(route.as_ref());

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{ item.label }</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    { item.label }
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
