//! Render-ready models for the dashboard charts.
//!
//! The frontend hands a series of [`model::MetricPoint`]s and the current
//! [`HoverState`] to these builders and draws whatever comes back. Nothing
//! here knows about the plotting library.

pub mod hover;
pub mod palette;
pub mod pie;
pub mod series;
pub mod tooltip;

pub use hover::HoverState;
pub use palette::{palette_color, Gradient, CATEGORY_PALETTE};
pub use pie::{PieLayout, PieSlice};
pub use series::CartesianSeries;
pub use tooltip::TooltipContent;
