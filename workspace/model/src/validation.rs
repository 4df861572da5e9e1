//! Invariant checks for a [`DashboardDataset`] snapshot.
//!
//! Hard invariants (finite numbers, unique chart keys, unique row ids) are
//! reported as errors. Conventions the renderer tolerates (trend agreeing
//! with the change sign, parseable dates, known statuses) are warnings.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::dataset::{ChartSeries, DashboardDataset};
use crate::error::{DatasetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetIssue {
    pub severity: Severity,
    /// Path-like pointer into the snapshot, e.g. `kpis[1].value`.
    pub location: String,
    pub message: String,
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.location, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<DatasetIssue>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, location: String, message: impl Into<String>) {
        self.issues.push(DatasetIssue {
            severity,
            location,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &DatasetIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &DatasetIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Turns a report with errors into [`DatasetError::Invalid`].
    pub fn into_result(self) -> Result<Vec<DatasetIssue>> {
        let first = self.errors().next().map(|e| e.to_string());
        match first {
            None => Ok(self.issues),
            Some(first) => Err(DatasetError::Invalid {
                count: self.errors().count(),
                first,
            }),
        }
    }
}

pub fn validate(dataset: &DashboardDataset) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (i, kpi) in dataset.kpis.iter().enumerate() {
        if !kpi.value.is_finite() {
            report.push(Severity::Error, format!("kpis[{}].value", i), "value must be finite");
        }
        if !kpi.change.is_finite() {
            report.push(Severity::Error, format!("kpis[{}].change", i), "change must be finite");
        } else if !kpi.trend_matches_change() {
            report.push(
                Severity::Warning,
                format!("kpis[{}].trend", i),
                format!("trend '{}' disagrees with change {}", kpi.trend.as_str(), kpi.change),
            );
        }
    }

    for series in ChartSeries::ALL {
        let mut seen = HashSet::new();
        for (i, point) in dataset.series(series).iter().enumerate() {
            if !point.value.is_finite() {
                report.push(Severity::Error, format!("{}[{}].value", series.key(), i), "value must be finite");
            }
            if !seen.insert(point.name.as_str()) {
                report.push(
                    Severity::Error,
                    format!("{}[{}].name", series.key(), i),
                    format!("duplicate category '{}'", point.name),
                );
            }
        }
    }

    let mut ids = HashSet::new();
    for (i, row) in dataset.table_data.iter().enumerate() {
        if !ids.insert(row.id) {
            report.push(Severity::Error, format!("tableData[{}].id", i), format!("duplicate id {}", row.id));
        }
        if !row.value.is_finite() {
            report.push(Severity::Error, format!("tableData[{}].value", i), "value must be finite");
        }
        if NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").is_err() {
            report.push(
                Severity::Warning,
                format!("tableData[{}].date", i),
                format!("'{}' is not an ISO date", row.date),
            );
        }
        if !row.status.is_known() {
            report.push(
                Severity::Warning,
                format!("tableData[{}].status", i),
                format!("unrecognised status '{}'", row.status),
            );
        }
    }

    for issue in report.errors() {
        warn!("Dataset invariant violated: {}", issue);
    }
    debug!(
        "Validated dataset: {} issue(s), valid = {}",
        report.issues.len(),
        report.is_valid()
    );

    report
}
