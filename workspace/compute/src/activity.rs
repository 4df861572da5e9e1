//! Cell formatting for the recent-activity table.

use common::{format_number, format_short_date};
use model::{ActivityRow, ActivityStatus};

/// What a zero-value cell shows instead of a number.
pub const ZERO_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Positive => "text-success bg-success/10",
            Tone::Negative => "text-error bg-error/10",
            Tone::Neutral => "text-base-content/50 bg-base-200",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCell {
    pub text: String,
    pub tone: Tone,
}

/// `+$250` for gains, `-$150` for losses, a dash for zero.
pub fn value_cell(value: f64) -> ValueCell {
    if value > 0.0 {
        ValueCell {
            text: format!("+${}", format_number(value)),
            tone: Tone::Positive,
        }
    } else if value < 0.0 {
        ValueCell {
            text: format!("-${}", format_number(value.abs())),
            tone: Tone::Negative,
        }
    } else {
        ValueCell {
            text: ZERO_PLACEHOLDER.to_string(),
            tone: Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub class: &'static str,
}

pub fn status_badge(status: &ActivityStatus) -> StatusBadge {
    let class = match status {
        ActivityStatus::Active => "badge badge-success",
        ActivityStatus::Completed => "badge badge-info",
        ActivityStatus::Pending => "badge badge-warning",
        ActivityStatus::Processing => "badge badge-secondary",
        ActivityStatus::Other(_) => "badge badge-ghost",
    };
    StatusBadge {
        label: status.as_str().to_string(),
        class,
    }
}

/// A table row with every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRowView {
    pub id: u32,
    pub date: String,
    pub activity: String,
    pub user: String,
    pub value: ValueCell,
    pub status: StatusBadge,
}

impl ActivityRowView {
    pub fn from_row(row: &ActivityRow) -> Self {
        Self {
            id: row.id,
            date: format_short_date(&row.date),
            activity: row.activity.clone(),
            user: row.user.clone(),
            value: value_cell(row.value),
            status: status_badge(&row.status),
        }
    }
}

/// Formats rows in input order.
pub fn table_rows(rows: &[ActivityRow]) -> Vec<ActivityRowView> {
    rows.iter().map(ActivityRowView::from_row).collect()
}
