use serde::{Deserialize, Serialize};

use crate::activity::ActivityRow;
use crate::kpi::KpiMetric;
use crate::metric::MetricPoint;

/// Immutable snapshot that every dashboard page renders from.
///
/// Field names follow the camelCase contract of the data provider
/// (`revenueChart`, `tableData`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDataset {
    pub kpis: Vec<KpiMetric>,
    pub revenue_chart: Vec<MetricPoint>,
    pub user_chart: Vec<MetricPoint>,
    pub category_chart: Vec<MetricPoint>,
    pub table_data: Vec<ActivityRow>,
}

/// Names of the chart series in a dataset, used when reporting problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSeries {
    Revenue,
    Users,
    Categories,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 3] = [ChartSeries::Revenue, ChartSeries::Users, ChartSeries::Categories];

    pub fn key(&self) -> &'static str {
        match self {
            ChartSeries::Revenue => "revenueChart",
            ChartSeries::Users => "userChart",
            ChartSeries::Categories => "categoryChart",
        }
    }
}

impl DashboardDataset {
    pub fn series(&self, series: ChartSeries) -> &[MetricPoint] {
        match series {
            ChartSeries::Revenue => &self.revenue_chart,
            ChartSeries::Users => &self.user_chart,
            ChartSeries::Categories => &self.category_chart,
        }
    }
}
