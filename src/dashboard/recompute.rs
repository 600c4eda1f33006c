//! The recompute handler: selection in, seven charts out

use serde::Serialize;
use tracing::debug;

use crate::charts::{
    Chart, bar_chart, hour_counts, interactions_scatter, pie_chart, weekday_heatmap,
};
use crate::consts::{COL_COURSE, COL_PROGRAM};
use crate::core::{
    Dataset, FilteredView, SelectionState, SummaryStats, category_counts, summarize,
};
use crate::dashboard::event::ControlEvent;

/// State built once at startup and shared read-only by every recompute
#[derive(Debug)]
pub(crate) struct DashboardContext {
    pub(crate) dataset: Dataset,
    pub(crate) summary: SummaryStats,
}

impl DashboardContext {
    pub(crate) fn new(dataset: Dataset) -> Self {
        let summary = summarize(&dataset);
        Self { dataset, summary }
    }
}

/// Chart slots on the page, in layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ChartId {
    ProgramBar,
    ProgramPie,
    CourseBar,
    WeekdayHeatmap,
    HourBar,
    TotalStudentsVsVisits,
    InteractionsScatter,
}

impl ChartId {
    pub(crate) const ALL: [ChartId; 7] = [
        ChartId::ProgramBar,
        ChartId::ProgramPie,
        ChartId::CourseBar,
        ChartId::WeekdayHeatmap,
        ChartId::HourBar,
        ChartId::TotalStudentsVsVisits,
        ChartId::InteractionsScatter,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ChartId::ProgramBar => "program-bar",
            ChartId::ProgramPie => "program-pie",
            ChartId::CourseBar => "course-bar",
            ChartId::WeekdayHeatmap => "weekday-heatmap",
            ChartId::HourBar => "hour-bar",
            ChartId::TotalStudentsVsVisits => "total-students-vs-visits",
            ChartId::InteractionsScatter => "interactions-scatter",
        }
    }

    /// Page layout: full-width slots take a whole row
    pub(crate) fn full_width(self) -> bool {
        matches!(
            self,
            ChartId::HourBar | ChartId::TotalStudentsVsVisits | ChartId::InteractionsScatter
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct NamedChart {
    pub(crate) id: ChartId,
    pub(crate) chart: Chart,
}

/// Output of one recompute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChartSet {
    /// Selection the charts were computed for (menu clicks already applied)
    pub(crate) selection: SelectionState,
    pub(crate) row_count: usize,
    pub(crate) charts: Vec<NamedChart>,
}

impl ChartSet {
    pub(crate) fn get(&self, id: ChartId) -> Option<&Chart> {
        self.charts.iter().find(|c| c.id == id).map(|c| &c.chart)
    }
}

/// Resolve the triggering control, filter the dataset and rebuild every chart.
///
/// Pure with respect to `ctx`: the same inputs always produce the same charts.
pub(crate) fn recompute(
    ctx: &DashboardContext,
    bound: &SelectionState,
    event: &ControlEvent,
) -> ChartSet {
    let selection = event.resolve(bound, &ctx.summary.programs);
    let view = FilteredView::new(&ctx.dataset, &selection);
    debug!(
        program = %selection.program,
        month = %selection.month,
        rows = view.len(),
        ?event,
        "recompute"
    );
    if view.is_empty() {
        debug!("selection matched no rows, charts will be empty");
    }

    let charts = build_charts(&view, &selection);
    ChartSet {
        row_count: view.len(),
        selection,
        charts,
    }
}

fn build_charts(view: &FilteredView<'_>, selection: &SelectionState) -> Vec<NamedChart> {
    let suffix = format!("({}, {})", selection.program, selection.month);
    let rows = &view.rows;
    let programs = || category_counts(rows.iter().map(|r| r.program.as_str()));

    ChartId::ALL
        .into_iter()
        .map(|id| {
            let chart = match id {
                ChartId::ProgramBar => bar_chart(
                    COL_PROGRAM,
                    programs(),
                    format!("Total Visits by Program {suffix}"),
                ),
                ChartId::ProgramPie => pie_chart(
                    COL_PROGRAM,
                    programs(),
                    format!("Proportion of Student Visits by Program {suffix}"),
                ),
                ChartId::CourseBar => bar_chart(
                    COL_COURSE,
                    category_counts(rows.iter().map(|r| r.course.as_str())),
                    format!("Total Visits by Course {suffix}"),
                ),
                ChartId::WeekdayHeatmap => {
                    weekday_heatmap(rows, format!("Busiest Weekday {suffix}"))
                }
                ChartId::HourBar => {
                    bar_chart("Hour", hour_counts(rows), format!("Busiest Hour {suffix}"))
                }
                // Same data as ProgramBar under its own title
                ChartId::TotalStudentsVsVisits => bar_chart(
                    COL_PROGRAM,
                    programs(),
                    format!("Total Students vs Total Visits by Program {suffix}"),
                ),
                ChartId::InteractionsScatter => {
                    interactions_scatter(rows, format!("Total Interactions by Day {suffix}"))
                }
            };
            NamedChart { id, chart }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{BarChart, ScatterChart};
    use crate::core::test_support::sample_dataset;

    fn ctx() -> DashboardContext {
        DashboardContext::new(sample_dataset())
    }

    fn bars(set: &ChartSet, id: ChartId) -> Vec<(String, usize)> {
        match set.get(id) {
            Some(Chart::Bar(BarChart { bars, .. })) => {
                bars.iter().map(|b| (b.label.clone(), b.count)).collect()
            }
            other => panic!("expected bar chart for {id:?}, got {other:?}"),
        }
    }

    #[test]
    fn context_summary_reflects_full_dataset() {
        let ctx = ctx();
        assert_eq!(ctx.summary.most_visited_program.as_deref(), Some("A"));
        assert_eq!(ctx.summary.busiest_hour, Some(9));
        assert_eq!(ctx.summary.total_interactions, 3);
    }

    #[test]
    fn program_a_january_scenario() {
        let set = recompute(
            &ctx(),
            &SelectionState::new("A", "January"),
            &ControlEvent::Initial,
        );
        assert_eq!(set.row_count, 2);
        assert_eq!(set.charts.len(), 7);
        assert_eq!(bars(&set, ChartId::ProgramBar), vec![("A".to_string(), 2)]);
        assert_eq!(
            bars(&set, ChartId::CourseBar),
            vec![("X".to_string(), 1), ("Y".to_string(), 1)]
        );
        assert_eq!(bars(&set, ChartId::HourBar), vec![("9".to_string(), 2)]);
    }

    #[test]
    fn empty_selection_still_builds_seven_charts() {
        let set = recompute(
            &ctx(),
            &SelectionState::new("B", "January"),
            &ControlEvent::Initial,
        );
        assert_eq!(set.row_count, 0);
        assert_eq!(set.charts.len(), 7);
        assert!(set.charts.iter().all(|c| c.chart.is_empty()));
        assert!(set.charts[0].chart.title().ends_with("(B, January)"));
    }

    #[test]
    fn recompute_is_idempotent() {
        let ctx = ctx();
        let bound = SelectionState::new("A", "January");
        let first = recompute(&ctx, &bound, &ControlEvent::Initial);
        let second = recompute(&ctx, &bound, &ControlEvent::Initial);
        assert_eq!(first, second);
    }

    #[test]
    fn menu_and_dropdown_paths_agree() {
        let ctx = ctx();
        let bound = SelectionState::new("A", "February");
        let via_dropdown = recompute(
            &ctx,
            &bound,
            &ControlEvent::ProgramChanged {
                program: "B".into(),
            },
        );
        let via_menu = recompute(
            &ctx,
            &bound,
            &ControlEvent::MenuClicked {
                click_timestamps: vec![10, 20],
            },
        );
        assert_eq!(via_dropdown, via_menu);
        assert_eq!(via_menu.row_count, 1);
    }

    #[test]
    fn chart_six_duplicates_chart_one_data() {
        let set = recompute(
            &ctx(),
            &SelectionState::new("A", "January"),
            &ControlEvent::Initial,
        );
        assert_eq!(
            bars(&set, ChartId::ProgramBar),
            bars(&set, ChartId::TotalStudentsVsVisits)
        );
        assert_ne!(
            set.get(ChartId::ProgramBar).map(Chart::title),
            set.get(ChartId::TotalStudentsVsVisits).map(Chart::title)
        );
    }

    #[test]
    fn scatter_follows_filtered_rows() {
        let set = recompute(
            &ctx(),
            &SelectionState::new("A", "January"),
            &ControlEvent::Initial,
        );
        let Some(Chart::Scatter(ScatterChart { points, .. })) =
            set.get(ChartId::InteractionsScatter)
        else {
            panic!("expected scatter");
        };
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![3.0, 2.0]);
    }

    #[test]
    fn chart_ids_serialize_kebab_case() {
        for id in ChartId::ALL {
            assert_eq!(serde_json::to_value(id).unwrap(), id.as_str());
        }
    }
}
