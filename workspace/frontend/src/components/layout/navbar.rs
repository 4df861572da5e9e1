use chrono::Local;
use yew::prelude::*;

use crate::hooks::use_theme;

pub const APP_TITLE: &str = "Analytics Dashboard";

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_theme();
    let today = Local::now().format("%-m/%-d/%Y").to_string();

    let on_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0 h-16">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="dashboard-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-2xl font-bold">{ APP_TITLE }</h1>
            </div>
            <div class="flex-none gap-2 items-center">
                <span class="text-sm text-base-content/60 hidden sm:inline">{ today }</span>
                <button
                    class="btn btn-ghost btn-circle"
                    aria-label="toggle theme"
                    onclick={on_toggle}
                >
                    if theme.theme.is_dark() {
                        <i class="fas fa-sun text-xl"></i>
                    } else {
                        <i class="fas fa-moon text-xl"></i>
                    }
                </button>
            </div>
        </div>
    }
}
