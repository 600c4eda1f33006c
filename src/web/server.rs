//! HTTP surface of the dashboard

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::charts::Chart;
use crate::core::{SelectionState, SummaryStats};
use crate::dashboard::{ChartId, ControlEvent, DashboardContext, recompute};
use crate::error::AppError;
use crate::web::page::render_page;
use crate::web::svg::render_chart;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    ctx: Arc<DashboardContext>,
}

/// Body of `POST /api/update`: current dropdown values plus the control that fired
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateRequest {
    #[serde(default)]
    pub(crate) program: String,
    #[serde(default)]
    pub(crate) month: String,
    #[serde(default)]
    pub(crate) event: ControlEvent,
}

#[derive(Debug, Serialize)]
pub(crate) struct RenderedChart {
    pub(crate) id: ChartId,
    pub(crate) title: String,
    pub(crate) chart: Chart,
    pub(crate) svg: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateResponse {
    pub(crate) selection: SelectionState,
    pub(crate) row_count: usize,
    pub(crate) charts: Vec<RenderedChart>,
}

pub(crate) fn router(ctx: Arc<DashboardContext>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/summary", get(summary))
        .route("/api/update", post(update))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { ctx })
}

/// Bind `addr` and serve until Ctrl-C
pub(crate) async fn serve(ctx: Arc<DashboardContext>, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await.map_err(AppError::Server)?;
    info!("dashboard listening on http://{}", addr);

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.ctx))
}

async fn summary(State(state): State<AppState>) -> Json<SummaryStats> {
    Json(state.ctx.summary.clone())
}

async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Json<UpdateResponse> {
    let bound = SelectionState::new(request.program, request.month);
    let set = recompute(&state.ctx, &bound, &request.event);

    let charts = set
        .charts
        .into_iter()
        .map(|named| RenderedChart {
            id: named.id,
            title: named.chart.title().to_string(),
            svg: render_chart(&named.chart),
            chart: named.chart,
        })
        .collect();

    Json(UpdateResponse {
        selection: set.selection,
        row_count: set.row_count,
        charts,
    })
}

async fn health() -> &'static str {
    "ok"
}
