//! Built-in demo snapshot the dashboard renders when no other data source is wired in.

use crate::activity::{ActivityRow, ActivityStatus};
use crate::dataset::DashboardDataset;
use crate::kpi::{KpiMetric, MetricFormat, Trend};
use crate::metric::MetricPoint;

pub fn demo_kpis() -> Vec<KpiMetric> {
    vec![
        KpiMetric::new("Total Revenue", 125000.0, 12.5, Trend::Up, MetricFormat::Currency),
        KpiMetric::new("Active Users", 2840.0, -2.1, Trend::Down, MetricFormat::Number),
        KpiMetric::new("Conversion Rate", 3.2, 0.8, Trend::Up, MetricFormat::Percentage),
        KpiMetric::new("Avg Order Value", 89.50, 5.2, Trend::Up, MetricFormat::Currency),
    ]
}

fn monthly(values: [f64; 6]) -> Vec<MetricPoint> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .iter()
        .zip(values)
        .map(|(month, value)| MetricPoint::new(*month, value))
        .collect()
}

pub fn demo_revenue_chart() -> Vec<MetricPoint> {
    monthly([12000.0, 19000.0, 15000.0, 22000.0, 18000.0, 25000.0])
}

pub fn demo_user_chart() -> Vec<MetricPoint> {
    monthly([2400.0, 2800.0, 2200.0, 3200.0, 2900.0, 3400.0])
}

pub fn demo_category_chart() -> Vec<MetricPoint> {
    vec![
        MetricPoint::new("Electronics", 35.0),
        MetricPoint::new("Clothing", 28.0),
        MetricPoint::new("Books", 18.0),
        MetricPoint::new("Home", 19.0),
    ]
}

fn row(id: u32, date: &str, activity: &str, user: &str, value: f64, status: ActivityStatus) -> ActivityRow {
    ActivityRow {
        id,
        date: date.to_string(),
        activity: activity.to_string(),
        user: user.to_string(),
        value,
        status,
    }
}

pub fn demo_activity() -> Vec<ActivityRow> {
    vec![
        row(1, "2024-08-04", "New User Registration", "john.doe@email.com", 250.0, ActivityStatus::Active),
        row(2, "2024-08-03", "Product Purchase", "jane.smith@email.com", 1250.0, ActivityStatus::Completed),
        row(3, "2024-08-02", "Support Ticket", "mike.wilson@email.com", 0.0, ActivityStatus::Pending),
        row(4, "2024-08-01", "Refund Request", "sarah.jones@email.com", -150.0, ActivityStatus::Processing),
        row(5, "2024-07-31", "Product Purchase", "alex.brown@email.com", 890.0, ActivityStatus::Completed),
        row(6, "2024-07-30", "Account Upgrade", "emma.davis@email.com", 99.0, ActivityStatus::Completed),
        row(7, "2024-07-29", "Password Reset", "david.miller@email.com", 0.0, ActivityStatus::Completed),
        row(8, "2024-07-28", "Product Return", "lisa.garcia@email.com", -75.0, ActivityStatus::Processing),
    ]
}

pub fn dashboard_dataset() -> DashboardDataset {
    DashboardDataset {
        kpis: demo_kpis(),
        revenue_chart: demo_revenue_chart(),
        user_chart: demo_user_chart(),
        category_chart: demo_category_chart(),
        table_data: demo_activity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let dataset = dashboard_dataset();

        assert_eq!(dataset.kpis.len(), 4);
        assert_eq!(dataset.revenue_chart.len(), 6);
        assert_eq!(dataset.user_chart.len(), 6);
        assert_eq!(dataset.category_chart.len(), 4);
        assert_eq!(dataset.table_data.len(), 8);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let total: f64 = demo_category_chart().iter().map(|p| p.value).sum();
        assert_eq!(total, 100.0);
    }
}
