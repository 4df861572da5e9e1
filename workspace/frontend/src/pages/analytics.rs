use yew::prelude::*;

use crate::components::charts::BarChart;
use crate::hooks::use_dataset;

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
    let dataset = use_dataset();

    html! {
        <div class="h-[28rem]">
            <BarChart data={dataset.user_chart.clone()} title="Monthly User Growth" />
        </div>
    }
}
