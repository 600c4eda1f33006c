use comfy_table::{Cell, Color, Table};

use crate::charts::Chart;
use crate::consts::VISITS_LABEL;
use crate::core::SummaryStats;
use crate::dashboard::ChartSet;
use crate::output::format::{
    create_styled_table, format_number, format_value, header_cell, right_cell,
};

fn accent(use_color: bool) -> Option<Color> {
    use_color.then_some(Color::Green)
}

pub(crate) fn summary_table(summary: &SummaryStats, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Metric", use_color),
        header_cell("Value", use_color),
    ]);

    let na = || "n/a".to_string();
    let rows = [
        (
            "Program with the Most Visits",
            summary.most_visited_program.clone().unwrap_or_else(na),
        ),
        (
            "Course with the Most Visits",
            summary.most_visited_course.clone().unwrap_or_else(na),
        ),
        (
            "Busiest Hour",
            summary
                .busiest_hour
                .map(|h| format!("{h}:00"))
                .unwrap_or_else(na),
        ),
        (
            "Total Interactions",
            format_number(summary.total_interactions),
        ),
        ("Programs", format_number(summary.programs.len())),
        ("Courses", format_number(summary.courses.len())),
        ("Months", summary.months.join(", ")),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right_cell(&value, accent(use_color), false)]);
    }
    table
}

pub(crate) fn print_summary_table(summary: &SummaryStats, use_color: bool) {
    println!("\n  Office Visits Summary\n");
    println!("{}", summary_table(summary, use_color));
}

/// One line per chart: slot, kind, title and how many marks it plots
pub(crate) fn chart_overview_table(charts: &ChartSet, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Chart", use_color),
        header_cell("Kind", use_color),
        header_cell("Title", use_color),
        header_cell("Marks", use_color),
    ]);
    for named in &charts.charts {
        table.add_row(vec![
            Cell::new(named.id.as_str()),
            Cell::new(named.chart.kind()),
            Cell::new(named.chart.title()),
            right_cell(&format_number(named.chart.mark_count()), None, false),
        ]);
    }
    table
}

/// The data behind a single chart, one row per mark
pub(crate) fn chart_detail_table(chart: &Chart, use_color: bool) -> Table {
    let mut table = create_styled_table();
    match chart {
        Chart::Bar(c) => {
            table.set_header(vec![
                header_cell(&c.x_label, use_color),
                header_cell(&c.y_label, use_color),
            ]);
            for bar in &c.bars {
                table.add_row(vec![
                    Cell::new(&bar.label),
                    right_cell(&format_number(bar.count), None, false),
                ]);
            }
        }
        Chart::Pie(c) => {
            table.set_header(vec![
                header_cell(&c.label, use_color),
                header_cell("Visits", use_color),
                header_cell("Share", use_color),
            ]);
            for slice in &c.slices {
                table.add_row(vec![
                    Cell::new(&slice.label),
                    right_cell(&format_number(slice.count), None, false),
                    right_cell(&format!("{:.1}%", slice.fraction * 100.0), None, false),
                ]);
            }
        }
        Chart::Heatmap(c) => {
            table.set_header(vec![
                header_cell(&c.x_label, use_color),
                header_cell(VISITS_LABEL, use_color),
            ]);
            for (column, value) in c.columns.iter().zip(&c.values) {
                let color = if *value > 0 { accent(use_color) } else { None };
                table.add_row(vec![
                    Cell::new(column),
                    right_cell(&format_number(*value), color, false),
                ]);
            }
        }
        Chart::Scatter(c) => {
            table.set_header(vec![
                header_cell(&c.x_label, use_color),
                header_cell(&c.y_label, use_color),
            ]);
            for point in &c.points {
                table.add_row(vec![
                    Cell::new(point.time.format("%Y-%m-%d %H:%M").to_string()),
                    right_cell(&format_value(point.value), None, false),
                ]);
            }
        }
    }
    table
}

pub(crate) fn print_chart_tables(charts: &ChartSet, use_color: bool) {
    println!(
        "\n  Selection: {} / {} ({} rows)\n",
        charts.selection.program,
        charts.selection.month,
        format_number(charts.row_count)
    );
    println!("{}", chart_overview_table(charts, use_color));

    for named in &charts.charts {
        println!("\n  {}\n", named.chart.title());
        if named.chart.is_empty() {
            println!("  No data");
        } else {
            println!("{}", chart_detail_table(&named.chart, use_color));
        }
    }
}
