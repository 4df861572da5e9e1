use compute::chart::tooltip::pie_tooltip;
use compute::chart::PieLayout;
use model::MetricPoint;
use yew::prelude::*;

use super::card::ChartCard;
use super::plotly_chart::PlotlyChart;
use super::tooltip::ChartTooltip;
use super::traces::{pie_data, pie_layout};
use crate::hooks::use_chart_pointer;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub data: Vec<MetricPoint>,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    let (pointer, on_pointer) = use_chart_pointer(props.data.len());

    // Recomputed every render: the total always matches the slices drawn.
    let layout = PieLayout::compute(&props.data);
    let tooltip = pie_tooltip(&layout, pointer.hover);

    html! {
        <ChartCard title={props.title.clone()} class={props.class.clone()}>
            <PlotlyChart
                data={pie_data(&layout, pointer.hover)}
                layout={pie_layout()}
                len={layout.slices.len()}
                {on_pointer}
            />
            <div class="absolute inset-0 flex flex-col items-center justify-center pointer-events-none">
                <span class="text-xs uppercase tracking-wide text-base-content/60">{"Total"}</span>
                <span class="text-2xl font-bold">{ layout.center_label() }</span>
            </div>
            <ChartTooltip content={tooltip} position={pointer.position} />
        </ChartCard>
    }
}
