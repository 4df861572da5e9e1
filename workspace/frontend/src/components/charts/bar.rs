use compute::chart::palette::BAR_GRADIENT;
use compute::chart::tooltip::cartesian_tooltip;
use compute::chart::CartesianSeries;
use model::MetricPoint;
use yew::prelude::*;

use super::card::ChartCard;
use super::plotly_chart::PlotlyChart;
use super::tooltip::ChartTooltip;
use super::traces::{bar_data, cartesian_layout};
use crate::hooks::use_chart_pointer;

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<MetricPoint>,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let (pointer, on_pointer) = use_chart_pointer(props.data.len());

    let series = CartesianSeries::bar(&props.data, pointer.hover);
    let tooltip = cartesian_tooltip(&props.data, pointer.hover, &BAR_GRADIENT.css());

    html! {
        <ChartCard title={props.title.clone()} class={props.class.clone()}>
            <PlotlyChart
                data={bar_data(&series)}
                layout={cartesian_layout()}
                len={series.len()}
                {on_pointer}
            />
            <ChartTooltip content={tooltip} position={pointer.position} />
        </ChartCard>
    }
}
