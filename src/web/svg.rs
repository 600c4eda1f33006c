//! Server-side SVG rendering of chart objects through plotters.
//!
//! Every chart renders to a standalone `<svg>` element. Charts with no marks
//! render their title and a "No data" label.

use std::ops::Range;

use chrono::DateTime;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::warn;

use crate::charts::{BarChart, Chart, HeatmapChart, PieChart, ScatterChart, category_color};

const SIZE: (u32, u32) = (640, 360);
const FONT: &str = "sans-serif";
const TITLE_SIZE: i32 = 18;
const LABEL_SIZE: i32 = 12;

/// Axis bounds never exceed this magnitude, so tick generation stays finite
/// even for values near `f64::MAX`
const VALUE_LIMIT: f64 = 1e300;

/// Scatter x-axis padding when every point shares one timestamp (seconds)
const MIN_TIME_PAD: f64 = 43_200.0;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub(crate) fn render_chart(chart: &Chart) -> String {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, SIZE).into_drawing_area();
        if let Err(e) = draw_chart(&root, chart).and_then(|()| root.present()) {
            warn!(title = chart.title(), "failed to render chart: {}", e);
        }
    }
    make_responsive(&buf)
}

/// Drop the fixed pixel size so the page can scale the chart; the viewBox keeps the aspect
fn make_responsive(svg: &str) -> String {
    let start = svg.find("<svg").unwrap_or(0);
    svg[start..].trim_end().replacen(
        &format!(r#"width="{}" height="{}""#, SIZE.0, SIZE.1),
        r#"class="chart-svg""#,
        1,
    )
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

fn truncate(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let head: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    if chart.is_empty() {
        return draw_no_data(root, chart.title());
    }
    match chart {
        Chart::Bar(c) => draw_bar(root, c),
        Chart::Pie(c) => draw_pie(root, c),
        Chart::Heatmap(c) => draw_heatmap(root, c),
        Chart::Scatter(c) => draw_scatter(root, c),
    }
}

fn draw_no_data<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, title: &str) -> DrawResult<DB> {
    let area = root.titled(title, (FONT, TITLE_SIZE))?;
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        "No data",
        (w as i32 / 2, h as i32 / 2),
        (FONT, 14)
            .into_font()
            .color(&RGBColor(0x88, 0x88, 0x88))
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))
}

fn draw_bar<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &BarChart) -> DrawResult<DB> {
    let n = chart.bars.len();
    let max = chart.bars.iter().map(|b| b.count).max().unwrap_or(0);
    let label_len = (SIZE.0 as usize / n.max(1) / 8).max(3);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, TITLE_SIZE))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d((0..n).into_segmented(), 0..max + max / 10 + 1)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 1)
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => chart
                .bars
                .get(*i)
                .map(|b| truncate(&b.label, label_len))
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style((FONT, LABEL_SIZE))
        .axis_desc_style((FONT, LABEL_SIZE))
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(rgb(category_color(0)).filled())
            .margin(8)
            .data(chart.bars.iter().enumerate().map(|(i, b)| (i, b.count))),
    )?;
    Ok(())
}

fn draw_pie<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &PieChart) -> DrawResult<DB> {
    let area = root.titled(&chart.title, (FONT, TITLE_SIZE))?;
    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = f64::from(w.min(h)) * 0.34;

    let sizes: Vec<f64> = chart.slices.iter().map(|s| s.count as f64).collect();
    let colors: Vec<RGBColor> = (0..chart.slices.len())
        .map(|i| rgb(category_color(i)))
        .collect();
    let labels: Vec<String> = chart
        .slices
        .iter()
        .map(|s| truncate(&s.label, 18))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, 13).into_font().color(&BLACK));
    pie.percentages((FONT, LABEL_SIZE).into_font().color(&WHITE));
    area.draw(&pie)
}

fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &HeatmapChart,
) -> DrawResult<DB> {
    let n = chart.columns.len();
    let max = chart.values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let shade = |value: usize| value as f64 / max;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, TITLE_SIZE))
        .margin(12)
        .x_label_area_size(44)
        .build_cartesian_2d((0..n).into_segmented(), 0.0..1.0)?;

    ctx.configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_labels(n + 1)
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => chart.columns.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc(chart.x_label.as_str())
        .label_style((FONT, LABEL_SIZE))
        .axis_desc_style((FONT, LABEL_SIZE))
        .draw()?;

    ctx.draw_series(chart.values.iter().enumerate().map(|(i, &value)| {
        Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), 1.0)],
            rgb(chart.color_scale.color_at(shade(value))).filled(),
        )
    }))?;

    ctx.draw_series(chart.values.iter().enumerate().map(|(i, &value)| {
        let ink = if shade(value) > 0.6 { BLACK } else { WHITE };
        Text::new(
            value.to_string(),
            (SegmentValue::CenterOf(i), 0.5),
            (FONT, 14)
                .into_font()
                .color(&ink)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )
    }))?;
    Ok(())
}

fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ScatterChart,
) -> DrawResult<DB> {
    let xs: Vec<f64> = chart
        .points
        .iter()
        .map(|p| p.time.and_utc().timestamp() as f64)
        .collect();
    let x_range = time_axis(&xs);
    let y_range = value_axis(chart.points.iter().map(|p| p.value));
    let (y_lo, y_hi) = (y_range.start, y_range.end);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, TITLE_SIZE))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)?;

    ctx.configure_mesh()
        .x_labels(5)
        .y_labels(6)
        .x_label_formatter(&|v: &f64| format_date(*v))
        .y_label_formatter(&|v: &f64| format_tick(*v))
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style((FONT, LABEL_SIZE))
        .axis_desc_style((FONT, LABEL_SIZE))
        .draw()?;

    let color = rgb(category_color(0));
    ctx.draw_series(xs.iter().zip(&chart.points).map(|(&x, p)| {
        Circle::new((x, p.value.clamp(y_lo, y_hi)), 4, color.mix(0.8).filled())
    }))?;
    Ok(())
}

/// Padded x bounds (unix seconds) around the given timestamps
fn time_axis(xs: &[f64]) -> Range<f64> {
    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..MIN_TIME_PAD;
    }
    let pad = ((hi - lo) * 0.05).max(MIN_TIME_PAD);
    (lo - pad)..(hi + pad)
}

/// Finite y bounds covering every value, zero and one. Extreme values are
/// clamped to `±VALUE_LIMIT`.
fn value_axis(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 1.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let lo = lo.max(-VALUE_LIMIT);
    let hi = hi.min(VALUE_LIMIT);
    let pad = (hi - lo) * 0.1;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    lo..(hi + pad)
}

fn format_date(secs: f64) -> String {
    DateTime::from_timestamp(secs.round() as i64, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_tick(v: f64) -> String {
    if v != 0.0 && (v.abs() >= 1e6 || v.abs() < 1e-2) {
        return format!("{v:.1e}");
    }
    let fixed = format!("{v:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
