//! Static page structure: headline, program menu, summary block, selection
//! dropdowns and the seven chart slots.
//!
//! The page carries the initial charts inline; the embedded script swaps in
//! fresh SVG from `/api/update` whenever a control changes.

use std::fmt::Write;

use crate::consts::DASHBOARD_TITLE;
use crate::core::SummaryStats;
use crate::dashboard::{ChartId, ChartSet, ControlEvent, DashboardContext, recompute};
use crate::web::svg::render_chart;

const STYLE: &str = r#"
body { font-family: system-ui, -apple-system, "Segoe UI", sans-serif; margin: 0; background: #f6f7f9; color: #222; }
.container { max-width: 1320px; margin: 0 auto; padding: 16px 24px 48px; }
h1 { text-align: center; font-weight: 300; font-size: 2.6rem; margin: 8px 0 24px; }
.menu { position: relative; display: inline-block; margin-bottom: 12px; }
.menu > button { background: #0d6efd; color: #fff; border: 0; border-radius: 6px; padding: 8px 14px; font-size: 1rem; cursor: pointer; }
.menu ul { display: none; position: absolute; z-index: 10; list-style: none; margin: 4px 0 0; padding: 4px 0; background: #fff; border: 1px solid #ddd; border-radius: 6px; min-width: 200px; box-shadow: 0 4px 12px rgba(0,0,0,.1); }
.menu.open ul { display: block; }
.menu li button { display: block; width: 100%; text-align: left; background: none; border: 0; padding: 6px 14px; font-size: .95rem; cursor: pointer; }
.menu li button:hover { background: #eef3ff; }
.summary p { font-size: 1.2rem; margin: 4px 0; color: #0d6efd; }
.summary p.total { color: #0aa2c0; }
.controls { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin: 24px 0; }
.controls select { width: 100%; padding: 8px; font-size: 1rem; border-radius: 6px; border: 1px solid #ccc; }
.charts { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.chart { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.08); padding: 8px; }
.chart.wide { grid-column: 1 / -1; }
.chart-svg { width: 100%; height: auto; display: block; }
"#;

const SCRIPT: &str = r#"
(function () {
  const programSelect = document.getElementById('program-dropdown');
  const monthSelect = document.getElementById('month-dropdown');
  const menu = document.getElementById('program-dropdown-top');
  const items = Array.from(menu.querySelectorAll('[data-index]'));
  const clicks = items.map(() => 0);

  async function update(event) {
    const body = { program: programSelect.value, month: monthSelect.value, event: event };
    const res = await fetch('/api/update', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
    if (!res.ok) { return; }
    const data = await res.json();
    for (const c of data.charts) {
      const slot = document.getElementById(c.id);
      if (slot) { slot.innerHTML = c.svg; }
    }
  }

  programSelect.addEventListener('change', () =>
    update({ kind: 'program_changed', program: programSelect.value }));
  monthSelect.addEventListener('change', () =>
    update({ kind: 'month_changed', month: monthSelect.value }));
  menu.querySelector('button').addEventListener('click', () => menu.classList.toggle('open'));
  items.forEach((item) => item.addEventListener('click', () => {
    clicks[Number(item.dataset.index)] = Date.now();
    menu.classList.remove('open');
    update({ kind: 'menu_clicked', click_timestamps: clicks });
  }));
})();
"#;

/// Escape text for HTML content and attribute values
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full dashboard page for the initial selection
pub(crate) fn render_page(ctx: &DashboardContext) -> String {
    let selection = ctx.summary.initial_selection();
    let charts = recompute(ctx, &selection, &ControlEvent::Initial);

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<h1>{title}</h1>
"#,
        title = escape(DASHBOARD_TITLE),
    );
    render_menu(&mut out, &ctx.summary.programs);
    render_summary(&mut out, &ctx.summary);
    render_controls(&mut out, &ctx.summary, &selection.program, &selection.month);
    render_chart_slots(&mut out, &charts);
    let _ = write!(out, "</div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n");
    out
}

fn render_menu(out: &mut String, programs: &[String]) {
    out.push_str(
        r#"<div class="menu" id="program-dropdown-top"><button type="button">Select a program</button><ul>"#,
    );
    for (i, program) in programs.iter().enumerate() {
        let _ = write!(
            out,
            r#"<li><button type="button" id="program-dropdown-item-{i}" data-index="{i}">{p}</button></li>"#,
            p = escape(program),
        );
    }
    out.push_str("</ul></div>\n");
}

/// The four summary lines; missing values (empty dataset) render as "n/a"
pub(crate) fn summary_lines(summary: &SummaryStats) -> [String; 4] {
    let or_na = |v: Option<&str>| v.unwrap_or("n/a").to_string();
    [
        format!(
            "Program with the Most Visits: {}",
            or_na(summary.most_visited_program.as_deref())
        ),
        format!(
            "Course with the Most Visits: {}",
            or_na(summary.most_visited_course.as_deref())
        ),
        match summary.busiest_hour {
            Some(h) => format!("Busiest Hour: {h}:00"),
            None => "Busiest Hour: n/a".to_string(),
        },
        format!("Total Interactions: {}", summary.total_interactions),
    ]
}

fn render_summary(out: &mut String, summary: &SummaryStats) {
    out.push_str(r#"<div class="summary">"#);
    let lines = summary_lines(summary);
    for (i, line) in lines.iter().enumerate() {
        let class = if i == lines.len() - 1 { " class=\"total\"" } else { "" };
        let _ = write!(out, "<p{class}>{}</p>", escape(line));
    }
    out.push_str("</div>\n");
}

fn render_select(out: &mut String, id: &str, placeholder: &str, options: &[String], selected: &str) {
    let _ = write!(out, r#"<div><select id="{id}" aria-label="{placeholder}">"#);
    if options.is_empty() {
        let _ = write!(out, r#"<option value="">{placeholder}</option>"#);
    }
    for option in options {
        let value = escape(option);
        let sel = if option == selected { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{value}"{sel}>{value}</option>"#);
    }
    out.push_str("</select></div>");
}

fn render_controls(out: &mut String, summary: &SummaryStats, program: &str, month: &str) {
    out.push_str(r#"<div class="controls">"#);
    render_select(out, "program-dropdown", "Select a program", &summary.programs, program);
    render_select(out, "month-dropdown", "Select a month", &summary.months, month);
    out.push_str("</div>\n");
}

fn render_chart_slots(out: &mut String, charts: &ChartSet) {
    out.push_str(r#"<div class="charts">"#);
    for id in ChartId::ALL {
        let class = if id.full_width() { "chart wide" } else { "chart" };
        let svg = charts.get(id).map(render_chart).unwrap_or_default();
        let _ = write!(out, r#"<div class="{class}" id="{}">{svg}</div>"#, id.as_str());
    }
    out.push_str("</div>\n");
}
