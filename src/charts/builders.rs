//! Chart builders: wrap category counts into chart objects with consistent labels.
//!
//! Every builder accepts an empty input and returns a chart with no marks
//! rather than failing.

use crate::charts::palette::ColorScale;
use crate::charts::types::{
    BarChart, Chart, HeatmapChart, PieChart, PieSlice, ScatterChart, ScatterPoint,
};
use crate::consts::{VISITS_LABEL, WEEKDAYS};
use crate::core::{CategoryCount, VisitRecord, value_counts};

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One bar per category, height = count
pub(crate) fn bar_chart(column: &str, counts: Vec<CategoryCount>, title: String) -> Chart {
    Chart::Bar(BarChart {
        title,
        x_label: capitalize(column),
        y_label: VISITS_LABEL.to_string(),
        bars: counts,
    })
}

/// Proportional wedges with the same counting semantics as [`bar_chart`]
pub(crate) fn pie_chart(column: &str, counts: Vec<CategoryCount>, title: String) -> Chart {
    let total: usize = counts.iter().map(|c| c.count).sum();
    let slices = counts
        .into_iter()
        .map(|c| PieSlice {
            fraction: if total == 0 {
                0.0
            } else {
                c.count as f64 / total as f64
            },
            label: c.label,
            count: c.count,
        })
        .collect();
    Chart::Pie(PieChart {
        title,
        label: capitalize(column),
        slices,
    })
}

/// Single-row heatmap of visits per weekday, Monday through Sunday
pub(crate) fn weekday_heatmap(rows: &[&VisitRecord], title: String) -> Chart {
    let mut values = [0usize; 7];
    for row in rows {
        values[row.weekday.num_days_from_monday() as usize] += 1;
    }
    Chart::Heatmap(HeatmapChart {
        row_label: title.clone(),
        title,
        x_label: "Weekday".to_string(),
        columns: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
        values: values.to_vec(),
        color_scale: ColorScale::Viridis,
    })
}

/// Visit counts per hour of day, ascending by hour. Hours with no visits are omitted.
pub(crate) fn hour_counts(rows: &[&VisitRecord]) -> Vec<CategoryCount> {
    let mut counts = value_counts(rows.iter().map(|r| r.hour));
    counts.sort_by_key(|(hour, _)| *hour);
    counts
        .into_iter()
        .map(|(hour, count)| CategoryCount {
            label: hour.to_string(),
            count,
        })
        .collect()
}

/// Interactions over time, one point per row. Rows with a blank interaction
/// count are left out here but still count everywhere else.
pub(crate) fn interactions_scatter(rows: &[&VisitRecord], title: String) -> Chart {
    Chart::Scatter(ScatterChart {
        title,
        x_label: "Date".to_string(),
        y_label: "Total Interactions".to_string(),
        points: rows
            .iter()
            .filter_map(|r| {
                r.interactions.map(|value| ScatterPoint {
                    time: r.time,
                    value,
                })
            })
            .collect(),
    })
}
