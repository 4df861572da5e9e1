use yew::prelude::*;

use crate::components::charts::PieChart;
use crate::hooks::use_dataset;

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let dataset = use_dataset();

    html! {
        <div class="h-[28rem]">
            <PieChart data={dataset.category_chart.clone()} title="Sales Distribution Report" />
        </div>
    }
}
