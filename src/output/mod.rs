mod format;
mod json;
mod table;

pub(crate) use json::{output_charts_json, output_summary_json};
pub(crate) use table::{print_chart_tables, print_summary_table};
