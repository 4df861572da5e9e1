//! Plotly figure JSON for the chart models in `compute::chart`.
//!
//! Plotly's own hover labels are switched off (`hoverinfo: none`); the
//! tooltip is an HTML overlay driven by the chart's hover state.

use compute::chart::palette::{with_alpha, LINE_GRADIENT};
use compute::chart::{CartesianSeries, HoverState, PieLayout};
use plotly::color::Rgba;
use plotly::layout::{Axis, HoverMode, Margin};
use plotly::Layout;
use serde_json::{json, Value};

/// Inner radius of the donut as a fraction of the outer radius.
pub const PIE_HOLE: f64 = 0.55;
pub const PIE_PULL_HOVERED: f64 = 0.08;
pub const PIE_STROKE: f64 = 1.0;
pub const PIE_STROKE_HOVERED: f64 = 3.0;

pub fn bar_data(series: &CartesianSeries) -> Value {
    json!([{
        "type": "bar",
        "x": series.categories,
        "y": series.values,
        "marker": {
            "color": series.colors,
            "line": {"width": 0}
        },
        "hoverinfo": "none"
    }])
}

pub fn line_data(series: &CartesianSeries) -> Value {
    json!([{
        "type": "scatter",
        "mode": "lines+markers",
        "x": series.categories,
        "y": series.values,
        "line": {"color": LINE_GRADIENT.sample(0.5), "width": 3, "shape": "spline"},
        "fill": "tozeroy",
        "fillcolor": with_alpha(LINE_GRADIENT.primary(), 0.12),
        "marker": {
            "size": series.marker_sizes,
            "color": "#ffffff",
            "line": {"color": series.colors, "width": 3}
        },
        "hoverinfo": "none"
    }])
}

pub fn pie_data(layout: &PieLayout, hover: HoverState) -> Value {
    let labels: Vec<&str> = layout.slices.iter().map(|s| s.name.as_str()).collect();
    let values: Vec<f64> = layout.slices.iter().map(|s| s.value).collect();
    let colors: Vec<&str> = layout.slices.iter().map(|s| s.color).collect();
    let text: Vec<String> = layout
        .slices
        .iter()
        .map(|s| if s.show_label { s.percentage_text() } else { String::new() })
        .collect();
    let pull: Vec<f64> = layout
        .slices
        .iter()
        .map(|s| if hover.is_hovered(s.index) { PIE_PULL_HOVERED } else { 0.0 })
        .collect();
    let stroke: Vec<f64> = layout
        .slices
        .iter()
        .map(|s| if hover.is_hovered(s.index) { PIE_STROKE_HOVERED } else { PIE_STROKE })
        .collect();

    json!([{
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": PIE_HOLE,
        "sort": false,
        "direction": "clockwise",
        "marker": {
            "colors": colors,
            "line": {"color": "#ffffff", "width": stroke}
        },
        "pull": pull,
        "text": text,
        "textinfo": "text",
        "hoverinfo": "none"
    }])
}

fn base_layout() -> Layout {
    Layout::new()
        .show_legend(false)
        .hover_mode(HoverMode::Closest)
        .paper_background_color(Rgba::new(0, 0, 0, 0.0))
        .plot_background_color(Rgba::new(0, 0, 0, 0.0))
}

fn to_value(layout: &Layout) -> Value {
    serde_json::to_value(layout).unwrap_or_else(|e| {
        log::error!("Could not serialize chart layout: {}", e);
        Value::Null
    })
}

pub fn cartesian_layout() -> Value {
    let layout = base_layout()
        .margin(Margin::new().left(50).right(10).top(10).bottom(30))
        .x_axis(Axis::new().show_grid(false))
        .y_axis(
            Axis::new()
                .show_grid(true)
                .grid_color(Rgba::new(148, 163, 184, 0.2))
                .zero_line(false),
        );
    to_value(&layout)
}

pub fn pie_layout() -> Value {
    let layout = base_layout().margin(Margin::new().left(10).right(10).top(10).bottom(10));
    to_value(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::chart::palette::{BAR_GRADIENT, BAR_HOVER_GRADIENT};
    use model::demo::{demo_category_chart, demo_revenue_chart, demo_user_chart};
    use model::MetricPoint;

    fn hovered(index: usize) -> HoverState {
        let mut hover = HoverState::default();
        hover.pointer_move(Some(index), usize::MAX);
        hover
    }

    #[test]
    fn test_bar_colors_follow_hover() {
        let series = CartesianSeries::bar(&demo_user_chart(), hovered(1));
        let data = bar_data(&series);

        let trace = &data[0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["hoverinfo"], "none");
        assert_eq!(trace["x"][1], "Feb");
        assert_eq!(trace["marker"]["color"][1], BAR_HOVER_GRADIENT.primary());
        assert_eq!(trace["marker"]["color"][0], BAR_GRADIENT.primary());
    }

    #[test]
    fn test_line_marker_sizes() {
        let series = CartesianSeries::line(&demo_revenue_chart(), hovered(2));
        let data = line_data(&series);

        let sizes = data[0]["marker"]["size"].as_array().unwrap();
        assert_eq!(sizes[2], 16.0);
        assert_eq!(sizes[3], 10.0);
        assert_eq!(data[0]["y"][5], 25000.0);
    }

    #[test]
    fn test_pie_pull_and_stroke() {
        let layout = PieLayout::compute(&demo_category_chart());
        let data = pie_data(&layout, hovered(0));

        let trace = &data[0];
        assert_eq!(trace["pull"][0], PIE_PULL_HOVERED);
        assert_eq!(trace["pull"][1], 0.0);
        assert_eq!(trace["marker"]["line"]["width"][0], PIE_STROKE_HOVERED);
        assert_eq!(trace["text"][0], "35.0%");
        assert_eq!(trace["marker"]["colors"][2], "#f59e0b");
    }

    #[test]
    fn test_pie_hides_small_labels() {
        let points = vec![MetricPoint::new("big", 97.0), MetricPoint::new("sliver", 3.0)];
        let data = pie_data(&PieLayout::compute(&points), HoverState::default());

        assert_eq!(data[0]["text"][0], "97.0%");
        assert_eq!(data[0]["text"][1], "");
    }

    #[test]
    fn test_empty_series() {
        let data = bar_data(&CartesianSeries::bar(&[], HoverState::default()));
        assert_eq!(data[0]["x"].as_array().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_layouts_are_transparent_objects() {
        for layout in [cartesian_layout(), pie_layout()] {
            assert!(layout.is_object());
            assert_eq!(layout["showlegend"], false);
        }
    }
}
