//! The overview page of a dataset in its settled state.

use model::DashboardDataset;

use crate::activity::{table_rows, ActivityRowView};
use crate::chart::{CartesianSeries, HoverState, PieLayout};
use crate::kpi::KpiView;

/// What the overview page shows once every animation has finished and
/// nothing is hovered.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSnapshot {
    pub kpis: Vec<KpiView>,
    pub revenue: CartesianSeries,
    pub users: CartesianSeries,
    pub categories: PieLayout,
    pub activity: Vec<ActivityRowView>,
}

impl OverviewSnapshot {
    pub fn build(dataset: &DashboardDataset) -> Self {
        Self {
            kpis: dataset.kpis.iter().map(KpiView::settled).collect(),
            revenue: CartesianSeries::line(&dataset.revenue_chart, HoverState::default()),
            users: CartesianSeries::bar(&dataset.user_chart, HoverState::default()),
            categories: PieLayout::compute(&dataset.category_chart),
            activity: table_rows(&dataset.table_data),
        }
    }
}
