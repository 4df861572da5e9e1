use compute::chart::palette::LINE_GRADIENT;
use compute::chart::tooltip::cartesian_tooltip;
use compute::chart::CartesianSeries;
use model::MetricPoint;
use yew::prelude::*;

use super::card::ChartCard;
use super::plotly_chart::PlotlyChart;
use super::tooltip::ChartTooltip;
use super::traces::{cartesian_layout, line_data};
use crate::hooks::use_chart_pointer;

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub data: Vec<MetricPoint>,
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let (pointer, on_pointer) = use_chart_pointer(props.data.len());

    let series = CartesianSeries::line(&props.data, pointer.hover);
    let tooltip = cartesian_tooltip(&props.data, pointer.hover, &LINE_GRADIENT.css());

    html! {
        <ChartCard title={props.title.clone()} class={props.class.clone()}>
            <PlotlyChart
                data={line_data(&series)}
                layout={cartesian_layout()}
                len={series.len()}
                {on_pointer}
            />
            <ChartTooltip content={tooltip} position={pointer.position} />
        </ChartCard>
    }
}
