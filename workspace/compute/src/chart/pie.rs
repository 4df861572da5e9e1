//! Pie/donut geometry and labels.

use common::format_number;
use model::MetricPoint;
use tracing::debug;

use super::palette::palette_color;

/// Slices smaller than this share of the total get no on-slice label.
pub const LABEL_MIN_SHARE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub name: String,
    pub value: f64,
    /// Share of the total, 0.0 to 1.0.
    pub fraction: f64,
    /// Share of the total in percent, rounded to one decimal.
    pub percentage: f64,
    pub start_degrees: f64,
    pub sweep_degrees: f64,
    pub show_label: bool,
    pub color: &'static str,
}

impl PieSlice {
    pub fn percentage_text(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieLayout {
    /// Sum of the slice values that are actually drawn.
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

/// Rounds to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl PieLayout {
    pub fn compute(points: &[MetricPoint]) -> Self {
        let total: f64 = points.iter().map(|p| p.value).sum();
        if total == 0.0 && !points.is_empty() {
            debug!("Pie series of {} points sums to zero", points.len());
        }

        let mut start = 0.0;
        let slices = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let fraction = if total == 0.0 { 0.0 } else { point.value / total };
                let sweep = fraction * 360.0;
                let slice = PieSlice {
                    index,
                    name: point.name.clone(),
                    value: point.value,
                    fraction,
                    percentage: round_to_tenth(fraction * 100.0),
                    start_degrees: start,
                    sweep_degrees: sweep,
                    show_label: fraction >= LABEL_MIN_SHARE,
                    color: palette_color(index),
                };
                start += sweep;
                slice
            })
            .collect();

        Self { total, slices }
    }

    /// Text shown in the donut hole.
    pub fn center_label(&self) -> String {
        format_number(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slice(&self, index: usize) -> Option<&PieSlice> {
        self.slices.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::demo::demo_category_chart;

    #[test]
    fn test_demo_categories() {
        let layout = PieLayout::compute(&demo_category_chart());

        assert_eq!(layout.total, 100.0);
        assert_eq!(layout.center_label(), "100");
        let percentages: Vec<f64> = layout.slices.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![35.0, 28.0, 18.0, 19.0]);
        assert_eq!(layout.slices[0].percentage_text(), "35.0%");
        assert!(layout.slices.iter().all(|s| s.show_label));
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let points = vec![
            MetricPoint::new("a", 1.0),
            MetricPoint::new("b", 2.0),
            MetricPoint::new("c", 3.0),
        ];
        let layout = PieLayout::compute(&points);

        let sum: f64 = layout.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        let sweep: f64 = layout.slices.iter().map(|s| s.sweep_degrees).sum();
        assert!((sweep - 360.0).abs() < 1e-9);
        assert!((layout.slices[2].start_degrees - 180.0).abs() < 1e-9);
        assert_eq!(layout.slices[0].percentage, 16.7);
    }

    #[test]
    fn test_small_slices_lose_their_label() {
        let points = vec![MetricPoint::new("big", 96.0), MetricPoint::new("tiny", 4.0)];
        let layout = PieLayout::compute(&points);

        assert!(layout.slices[0].show_label);
        assert!(!layout.slices[1].show_label);
    }

    #[test]
    fn test_label_threshold_is_inclusive() {
        let points = vec![MetricPoint::new("rest", 95.0), MetricPoint::new("edge", 5.0)];
        assert!(PieLayout::compute(&points).slices[1].show_label);
    }

    fn points(values: &[f64]) -> Vec<MetricPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| MetricPoint::new(format!("C{}", i), *v))
            .collect()
    }

    #[test]
    fn test_rounded_percentages_stay_near_hundred() {
        // Each slice is off by at most half a tenth after rounding.
        for n in 1..=12usize {
            let layout = PieLayout::compute(&points(&vec![1.0; n]));
            let sum: f64 = layout.slices.iter().map(|s| s.percentage).sum();
            assert!((sum - 100.0).abs() <= 0.05 * n as f64 + 1e-9, "n={} sum={}", n, sum);
        }

        let seven = PieLayout::compute(&points(&[3.0; 7]));
        let sum: f64 = seven.slices.iter().map(|s| s.percentage).sum();
        assert!(seven.slices.iter().all(|s| s.percentage == 14.3));
        assert!((sum - 100.1).abs() < 1e-9, "{}", sum);

        let uneven = PieLayout::compute(&points(&[7.0, 13.0, 0.5, 41.0, 2.25, 19.0]));
        let sum: f64 = uneven.slices.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.3, "{}", sum);
    }

    #[test]
    fn test_center_total_is_exact_input_sum() {
        let layout = PieLayout::compute(&points(&[1.0, 2.0, 3.45]));

        assert!((layout.total - 6.45).abs() < 1e-12, "{}", layout.total);
        assert_eq!(layout.center_label(), "6.45");
        let percentages: Vec<f64> = layout.slices.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, vec![15.5, 31.0, 53.5]);
    }

    #[test]
    fn test_zero_total() {
        let points = vec![MetricPoint::new("a", 0.0), MetricPoint::new("b", 0.0)];
        let layout = PieLayout::compute(&points);

        assert_eq!(layout.total, 0.0);
        assert_eq!(layout.center_label(), "0");
        assert!(layout.slices.iter().all(|s| s.fraction == 0.0 && s.percentage == 0.0));
        assert!(layout.slices.iter().all(|s| !s.show_label));
    }

    #[test]
    fn test_colors_follow_palette() {
        let points: Vec<MetricPoint> = (0..9).map(|i| MetricPoint::new(format!("c{}", i), 1.0)).collect();
        let layout = PieLayout::compute(&points);

        assert_eq!(layout.slices[7].color, layout.slices[0].color);
        assert_eq!(layout.slices[8].color, palette_color(1));
    }

    #[test]
    fn test_empty_series() {
        let layout = PieLayout::compute(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.total, 0.0);
    }
}
