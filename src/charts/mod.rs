//! Chart objects and the builders that produce them

mod builders;
mod palette;
mod types;

pub(crate) use builders::{bar_chart, hour_counts, interactions_scatter, pie_chart, weekday_heatmap};
pub(crate) use palette::category_color;
pub(crate) use types::{BarChart, Chart, HeatmapChart, PieChart, ScatterChart};
