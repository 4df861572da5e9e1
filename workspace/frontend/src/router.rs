use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::overview::OverviewPage;
use crate::pages::reports::ReportsPage;
use crate::pages::settings::SettingsPage;
use crate::pages::trends::TrendsPage;
use crate::pages::users::UsersPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Overview,
    #[at("/dashboard/analytics")]
    Analytics,
    #[at("/dashboard/reports")]
    Reports,
    #[at("/dashboard/users")]
    Users,
    #[at("/dashboard/trends")]
    Trends,
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// A sidebar destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Analytics,
    Reports,
    Users,
    Trends,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 6] = [
        Section::Overview,
        Section::Analytics,
        Section::Reports,
        Section::Users,
        Section::Trends,
        Section::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Analytics => "Analytics",
            Section::Reports => "Reports",
            Section::Users => "Users",
            Section::Trends => "Trends",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "fas fa-house",
            Section::Analytics => "fas fa-chart-column",
            Section::Reports => "fas fa-chart-pie",
            Section::Users => "fas fa-users",
            Section::Trends => "fas fa-arrow-trend-up",
            Section::Settings => "fas fa-gear",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Section::Overview => Route::Overview,
            Section::Analytics => Route::Analytics,
            Section::Reports => Route::Reports,
            Section::Users => Route::Users,
            Section::Trends => Route::Trends,
            Section::Settings => Route::Settings,
        }
    }

    /// The section a route belongs to; `None` for the 404 page.
    pub fn for_route(route: &Route) -> Option<Section> {
        match route {
            Route::Home | Route::Overview => Some(Section::Overview),
            Route::Analytics => Some(Section::Analytics),
            Route::Reports => Some(Section::Reports),
            Route::Users => Some(Section::Users),
            Route::Trends => Some(Section::Trends),
            Route::Settings => Some(Section::Settings),
            Route::NotFound => None,
        }
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Overview => {
            log::trace!("Rendering Overview page");
            html! { <Layout><OverviewPage /></Layout> }
        }
        Route::Analytics => {
            log::trace!("Rendering Analytics page");
            html! { <Layout><AnalyticsPage /></Layout> }
        }
        Route::Reports => {
            log::trace!("Rendering Reports page");
            html! { <Layout><ReportsPage /></Layout> }
        }
        Route::Users => {
            log::trace!("Rendering Users page");
            html! { <Layout><UsersPage /></Layout> }
        }
        Route::Trends => {
            log::trace!("Rendering Trends page");
            html! { <Layout><TrendsPage /></Layout> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout><SettingsPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><NotFoundPage /></Layout> }
        }
    }
}
