use yew::prelude::*;

use crate::components::charts::LineChart;
use crate::hooks::use_dataset;

#[function_component(TrendsPage)]
pub fn trends_page() -> Html {
    let dataset = use_dataset();

    html! {
        <div class="h-[28rem]">
            <LineChart data={dataset.revenue_chart.clone()} title="Revenue Trend" />
        </div>
    }
}
