use compute::kpi::REVEAL_DELAY;
use yew::prelude::*;

use crate::components::activity_table::ActivityTable;
use crate::components::charts::{BarChart, LineChart, PieChart};
use crate::components::kpi_card::KpiCard;
use crate::hooks::{use_dataset, use_reveal};

/// Entrance classes for a block that fades and rises in once the page is revealed.
fn entrance(visible: bool, delay_ms: u32) -> String {
    let state = if visible {
        "translate-y-0 opacity-100 scale-100"
    } else {
        "translate-y-12 opacity-0 scale-95"
    };
    format!("transition-all duration-1000 delay-{} {}", delay_ms, state)
}

#[function_component(OverviewPage)]
pub fn overview_page() -> Html {
    let dataset = use_dataset();
    let visible = use_reveal(REVEAL_DELAY);

    html! {
        <div class="h-full flex flex-col gap-6 min-h-0">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 lg:gap-6 flex-shrink-0">
                { for dataset.kpis.iter().enumerate().map(|(i, kpi)| html! {
                    <KpiCard key={i} metric={kpi.clone()} />
                }) }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class={classes!("h-80", entrance(visible, 300))}>
                    <LineChart data={dataset.revenue_chart.clone()} title="Revenue Trend" />
                </div>
                <div class={classes!("h-80", entrance(visible, 500))}>
                    <BarChart data={dataset.user_chart.clone()} title="User Growth" />
                </div>
                <div class={classes!("h-80", entrance(visible, 700))}>
                    <PieChart data={dataset.category_chart.clone()} title="Category Distribution" />
                </div>
            </div>

            <ActivityTable
                rows={dataset.table_data.clone()}
                title="Recent Activity"
                {visible}
                class={classes!(entrance(visible, 1000))}
            />
        </div>
    }
}
