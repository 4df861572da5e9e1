//! Content of the floating tooltip shown for the hovered data point.

use common::format_number;
use model::MetricPoint;

use super::hover::HoverState;
use super::pie::PieLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub label: String,
    pub value_text: String,
    /// Extra line under the value, e.g. the share of a pie slice.
    pub detail: Option<String>,
    /// CSS background of the colour swatch.
    pub swatch: String,
}

/// Tooltip for a bar or line chart; `None` when nothing is hovered.
pub fn cartesian_tooltip(points: &[MetricPoint], hover: HoverState, swatch: &str) -> Option<TooltipContent> {
    let point = points.get(hover.index()?)?;
    Some(TooltipContent {
        label: point.name.clone(),
        value_text: format_number(point.value),
        detail: point.date.clone(),
        swatch: swatch.to_string(),
    })
}

/// Tooltip for a pie slice, including its share of the total.
pub fn pie_tooltip(layout: &PieLayout, hover: HoverState) -> Option<TooltipContent> {
    let slice = layout.slice(hover.index()?)?;
    Some(TooltipContent {
        label: slice.name.clone(),
        value_text: format_number(slice.value),
        detail: Some(format!("{} of total", slice.percentage_text())),
        swatch: slice.color.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::BAR_GRADIENT;
    use model::demo::{demo_category_chart, demo_revenue_chart};

    fn hovered(index: usize) -> HoverState {
        let mut hover = HoverState::default();
        hover.pointer_move(Some(index), usize::MAX);
        hover
    }

    #[test]
    fn test_no_tooltip_without_hover() {
        let points = demo_revenue_chart();
        assert_eq!(cartesian_tooltip(&points, HoverState::default(), "#000"), None);
        assert_eq!(pie_tooltip(&PieLayout::compute(&points), HoverState::default()), None);
    }

    #[test]
    fn test_cartesian_tooltip() {
        let points = demo_revenue_chart();
        let tooltip = cartesian_tooltip(&points, hovered(1), &BAR_GRADIENT.css()).unwrap();

        assert_eq!(tooltip.label, "Feb");
        assert_eq!(tooltip.value_text, "19,000");
        assert_eq!(tooltip.detail, None);
        assert!(tooltip.swatch.starts_with("linear-gradient"));
    }

    #[test]
    fn test_cartesian_tooltip_shows_date() {
        let points = vec![MetricPoint::new("Mon", 5.0).with_date("2024-08-05")];
        let tooltip = cartesian_tooltip(&points, hovered(0), "#fff").unwrap();
        assert_eq!(tooltip.detail.as_deref(), Some("2024-08-05"));
    }

    #[test]
    fn test_pie_tooltip() {
        let layout = PieLayout::compute(&demo_category_chart());
        let tooltip = pie_tooltip(&layout, hovered(2)).unwrap();

        assert_eq!(tooltip.label, "Books");
        assert_eq!(tooltip.value_text, "18");
        assert_eq!(tooltip.detail.as_deref(), Some("18.0% of total"));
        assert_eq!(tooltip.swatch, "#f59e0b");
    }

    #[test]
    fn test_stale_index_yields_nothing() {
        let points = demo_revenue_chart();
        assert_eq!(cartesian_tooltip(&points, hovered(40), "#000"), None);
    }
}
