use crate::core::SummaryStats;
use crate::dashboard::ChartSet;

pub(crate) fn output_summary_json(summary: &SummaryStats) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

pub(crate) fn output_charts_json(charts: &ChartSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(charts)
}
