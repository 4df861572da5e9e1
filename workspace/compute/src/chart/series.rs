//! Bar and line series with per-point hover styling.

use model::MetricPoint;

use super::hover::HoverState;
use super::palette::{BAR_GRADIENT, BAR_HOVER_GRADIENT, LINE_GRADIENT};

pub const LINE_MARKER_SIZE: f64 = 10.0;
pub const LINE_MARKER_SIZE_HOVERED: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartesianKind {
    Bar,
    Line,
}

/// One category-per-point series ready to hand to the plotting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianSeries {
    pub kind: CartesianKind,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub marker_sizes: Vec<f64>,
    pub highlighted: Option<usize>,
}

impl CartesianSeries {
    pub fn bar(points: &[MetricPoint], hover: HoverState) -> Self {
        let colors = (0..points.len())
            .map(|i| {
                let gradient = if hover.is_hovered(i) { BAR_HOVER_GRADIENT } else { BAR_GRADIENT };
                gradient.primary().to_string()
            })
            .collect();
        Self::build(CartesianKind::Bar, points, hover, colors, vec![0.0; points.len()])
    }

    pub fn line(points: &[MetricPoint], hover: HoverState) -> Self {
        let last = points.len().saturating_sub(1).max(1) as f64;
        let colors = (0..points.len())
            .map(|i| LINE_GRADIENT.sample(i as f64 / last))
            .collect();
        let sizes = (0..points.len())
            .map(|i| {
                if hover.is_hovered(i) {
                    LINE_MARKER_SIZE_HOVERED
                } else {
                    LINE_MARKER_SIZE
                }
            })
            .collect();
        Self::build(CartesianKind::Line, points, hover, colors, sizes)
    }

    fn build(
        kind: CartesianKind,
        points: &[MetricPoint],
        hover: HoverState,
        colors: Vec<String>,
        marker_sizes: Vec<f64>,
    ) -> Self {
        Self {
            kind,
            categories: points.iter().map(|p| p.name.clone()).collect(),
            values: points.iter().map(|p| p.value).collect(),
            colors,
            marker_sizes,
            highlighted: hover.index().filter(|i| *i < points.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
