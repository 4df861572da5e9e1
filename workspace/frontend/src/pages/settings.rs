use compute::theme::Theme;
use yew::prelude::*;

use crate::hooks::use_theme;

/// Label of the button that switches away from `current`.
pub fn toggle_label(current: Theme) -> &'static str {
    match current {
        Theme::Light => "Switch to Dark Mode",
        Theme::Dark => "Switch to Light Mode",
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let theme = use_theme();

    let on_click = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Theme toggle requested from settings");
            toggle.emit(());
        })
    };

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-6">{"Settings"}</h1>
            <button class="btn btn-neutral shadow-lg" onclick={on_click}>
                { toggle_label(theme.theme) }
            </button>
        </div>
    }
}
