//! Reactive recompute: control events, dashboard context and the seven-chart set

mod event;
mod recompute;

pub(crate) use event::ControlEvent;
pub(crate) use recompute::{ChartId, ChartSet, DashboardContext, recompute};
