//! App-wide providers: the dataset snapshot and the theme preference.

use std::rc::Rc;

use compute::theme::{Theme, ThemeStore};
use model::demo::dashboard_dataset;
use model::DashboardDataset;
use yew::prelude::*;

use crate::common::storage::LocalStorage;
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    pub children: Children,
}

/// Provides the read-only dataset every page renders from.
#[function_component(DatasetProvider)]
pub fn dataset_provider(props: &ProviderProps) -> Html {
    let dataset = use_memo((), |_| {
        let dataset = dashboard_dataset();
        let report = model::validate(&dataset);
        for issue in &report.issues {
            log::warn!("Dataset: {}", issue);
        }
        log::debug!(
            "Dataset loaded: {} KPIs, {} activity rows",
            dataset.kpis.len(),
            dataset.table_data.len()
        );
        dataset
    });

    html! {
        <ContextProvider<Rc<DashboardDataset>> context={dataset}>
            {props.children.clone()}
        </ContextProvider<Rc<DashboardDataset>>>
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

fn theme_context(theme: Theme, toggle: Callback<()>) -> ThemeContext {
    ThemeContext { theme, toggle }
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Could not apply theme '{}': {:?}", theme.as_str(), e);
            }
        }
        None => log::warn!("No document element to apply theme '{}' to", theme.as_str()),
    }
}

/// Owns the single [`ThemeStore`]; it is loaded once when the app mounts.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ProviderProps) -> Html {
    let store = use_mut_ref(|| ThemeStore::load(LocalStorage));
    let theme = use_state(|| store.borrow().theme());
    let toast = use_context::<ToastContext>();

    use_effect_with(*theme, |theme| {
        log::debug!("Applying theme '{}'", theme.as_str());
        apply_theme(*theme);
        || ()
    });

    let toggle = use_callback((theme.setter(), toast), move |_: (), (set_theme, toast)| {
        let mut store = store.borrow_mut();
        let result = store.toggle();
        set_theme.set(store.theme());

        if let Err(e) = result {
            log::warn!("Theme preference not saved: {}", e);
            if let Some(toast) = toast {
                toast.show_warning("Theme changed but could not be saved for next visit".to_string());
            }
        }
    });

    let context = theme_context(*theme, toggle);

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
