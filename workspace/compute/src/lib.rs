//! Presentation logic of the analytics dashboard.
//!
//! Everything here is deterministic and free of browser APIs: KPI count-up
//! animations are advanced with an explicit clock, charts are built from a
//! series plus a hover state, and preferences go through [`theme::KeyValueStore`].

pub mod activity;
pub mod animation;
pub mod chart;
pub mod error;
pub mod kpi;
pub mod overview;
pub mod theme;

pub use activity::{status_badge, table_rows, value_cell, ActivityRowView, StatusBadge, Tone, ValueCell};
pub use animation::{Easing, Tween, TweenSpec};
pub use error::{ComputeError, Result};
pub use kpi::{KpiAnimation, KpiFrame, KpiTimeline, KpiView};
pub use overview::OverviewSnapshot;
pub use theme::{KeyValueStore, MemoryStore, Theme, ThemeStore};
