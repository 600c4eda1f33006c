//! Renderer-agnostic chart objects

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::charts::palette::ColorScale;
use crate::core::CategoryCount;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BarChart {
    pub(crate) title: String,
    pub(crate) x_label: String,
    pub(crate) y_label: String,
    pub(crate) bars: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PieSlice {
    pub(crate) label: String,
    pub(crate) count: usize,
    /// Share of the whole pie in `[0, 1]`
    pub(crate) fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PieChart {
    pub(crate) title: String,
    pub(crate) label: String,
    pub(crate) slices: Vec<PieSlice>,
}

/// Single-row heatmap: one cell per column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HeatmapChart {
    pub(crate) title: String,
    pub(crate) x_label: String,
    pub(crate) row_label: String,
    pub(crate) columns: Vec<String>,
    pub(crate) values: Vec<usize>,
    pub(crate) color_scale: ColorScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScatterPoint {
    pub(crate) time: NaiveDateTime,
    pub(crate) value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ScatterChart {
    pub(crate) title: String,
    pub(crate) x_label: String,
    pub(crate) y_label: String,
    pub(crate) points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum Chart {
    Bar(BarChart),
    Pie(PieChart),
    Heatmap(HeatmapChart),
    Scatter(ScatterChart),
}

impl Chart {
    pub(crate) fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::Pie(c) => &c.title,
            Chart::Heatmap(c) => &c.title,
            Chart::Scatter(c) => &c.title,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Chart::Bar(_) => "bar",
            Chart::Pie(_) => "pie",
            Chart::Heatmap(_) => "heatmap",
            Chart::Scatter(_) => "scatter",
        }
    }

    /// Number of plotted marks (bars, slices, non-zero cells, points)
    pub(crate) fn mark_count(&self) -> usize {
        match self {
            Chart::Bar(c) => c.bars.len(),
            Chart::Pie(c) => c.slices.len(),
            Chart::Heatmap(c) => c.values.iter().filter(|&&v| v > 0).count(),
            Chart::Scatter(c) => c.points.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }
}
