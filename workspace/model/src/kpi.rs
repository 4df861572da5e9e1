use serde::{Deserialize, Serialize};

/// Direction of a KPI relative to the previous period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    /// Also used for any trend string the data source sends that we do not know.
    #[default]
    #[serde(other)]
    Neutral,
}

impl Trend {
    /// The trend a `change` value implies by convention.
    pub fn implied_by(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}

/// Display format of a KPI value. Selects rendering only, never the number itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    Currency,
    Percentage,
    #[default]
    #[serde(other)]
    Number,
}

/// A single labelled summary metric with a period-over-period change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiMetric {
    pub label: String,
    pub value: f64,
    /// Change versus the previous period, in percent.
    pub change: f64,
    pub trend: Trend,
    #[serde(default)]
    pub format: MetricFormat,
}

impl KpiMetric {
    pub fn new(label: impl Into<String>, value: f64, change: f64, trend: Trend, format: MetricFormat) -> Self {
        Self {
            label: label.into(),
            value,
            change,
            trend,
            format,
        }
    }

    /// True when `trend` agrees with the sign of `change`.
    pub fn trend_matches_change(&self) -> bool {
        self.trend == Trend::implied_by(self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_number_when_missing() {
        let kpi: KpiMetric = serde_json::from_str(
            r#"{ "label": "Active Users", "value": 2840, "change": -2.1, "trend": "down" }"#,
        )
        .unwrap();

        assert_eq!(kpi.format, MetricFormat::Number);
        assert_eq!(kpi.trend, Trend::Down);
    }

    #[test]
    fn test_unknown_categories_fall_back() {
        let kpi: KpiMetric = serde_json::from_str(
            r#"{ "label": "x", "value": 1, "change": 0, "trend": "sideways", "format": "bytes" }"#,
        )
        .unwrap();

        assert_eq!(kpi.trend, Trend::Neutral);
        assert_eq!(kpi.format, MetricFormat::Number);
    }

    #[test]
    fn test_trend_matches_change() {
        let up = KpiMetric::new("Revenue", 1.0, 12.5, Trend::Up, MetricFormat::Currency);
        let wrong = KpiMetric::new("Users", 1.0, -2.1, Trend::Up, MetricFormat::Number);
        let flat = KpiMetric::new("Flat", 1.0, 0.0, Trend::Neutral, MetricFormat::Number);

        assert!(up.trend_matches_change());
        assert!(!wrong.trend_matches_change());
        assert!(flat.trend_matches_change());
    }
}
