use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::cli::Cli;
use crate::consts::DEFAULT_BIND;
use crate::core::SelectionState;
use crate::dashboard::{ControlEvent, DashboardContext, recompute};
use crate::error::AppError;
use crate::output::{
    output_charts_json, output_summary_json, print_chart_tables, print_summary_table,
};
use crate::web::serve;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) dashboard: Arc<DashboardContext>,
}

pub(crate) fn handle_summary(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let summary = &ctx.dashboard.summary;
    if ctx.cli.json {
        println!("{}", output_summary_json(summary)?);
    } else {
        print_summary_table(summary, ctx.cli.use_color());
    }
    Ok(())
}

/// Missing program/month fall back to the selection the page opens with
pub(crate) fn handle_charts(
    ctx: &CommandContext<'_>,
    program: Option<&str>,
    month: Option<&str>,
) -> Result<(), AppError> {
    let initial = ctx.dashboard.summary.initial_selection();
    let bound = SelectionState::new(
        program.map_or(initial.program, str::to_string),
        month.map_or(initial.month, str::to_string),
    );
    let charts = recompute(&ctx.dashboard, &bound, &ControlEvent::Initial);

    if ctx.cli.json {
        println!("{}", output_charts_json(&charts)?);
    } else {
        print_chart_tables(&charts, ctx.cli.use_color());
    }
    Ok(())
}

pub(crate) fn parse_bind(bind: Option<&str>) -> Result<SocketAddr, AppError> {
    let raw = bind.unwrap_or(DEFAULT_BIND).trim();
    raw.parse().map_err(|_| AppError::InvalidBind {
        input: raw.to_string(),
    })
}

pub(crate) async fn handle_serve(
    ctx: &CommandContext<'_>,
    bind: Option<&str>,
) -> Result<(), AppError> {
    let addr = parse_bind(bind)?;
    info!(
        records = ctx.dashboard.dataset.len(),
        programs = ctx.dashboard.summary.programs.len(),
        "starting dashboard"
    );
    serve(Arc::clone(&ctx.dashboard), addr).await
}
