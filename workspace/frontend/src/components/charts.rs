//! Interactive charts drawn with Plotly.js.

pub mod bar;
pub mod card;
pub mod line;
pub mod pie;
pub mod plotly_chart;
pub mod tooltip;
pub mod traces;

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;
