//! Data shapes of the analytics dashboard.
//!
//! Everything here is an immutable value: the dashboard receives one
//! [`DashboardDataset`] snapshot and never mutates it.

pub mod activity;
pub mod dataset;
pub mod demo;
pub mod error;
pub mod kpi;
pub mod metric;
pub mod validation;

pub use activity::{ActivityRow, ActivityStatus};
pub use dataset::{ChartSeries, DashboardDataset};
pub use error::DatasetError;
pub use kpi::{KpiMetric, MetricFormat, Trend};
pub use metric::MetricPoint;
pub use validation::{validate, DatasetIssue, Severity, ValidationReport};

// Re-export tracing for use in this crate
pub use tracing;
