//! Control events: which selection control fired, and with what value

use serde::Deserialize;

use crate::core::SelectionState;

/// A change on one of the page's selection controls
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ControlEvent {
    /// First render, no control has fired yet
    #[default]
    Initial,
    /// Bound program dropdown changed
    ProgramChanged { program: String },
    /// Bound month dropdown changed
    MonthChanged { month: String },
    /// A top-level menu item was clicked. One timestamp per menu item in menu
    /// order, 0 for items never clicked.
    MenuClicked { click_timestamps: Vec<u64> },
}

impl ControlEvent {
    /// Selection the recompute should run against.
    ///
    /// A menu click only overrides the program for this one resolution; the
    /// bound selection passed in is left untouched.
    pub(crate) fn resolve(&self, bound: &SelectionState, menu: &[String]) -> SelectionState {
        match self {
            ControlEvent::Initial => bound.clone(),
            ControlEvent::ProgramChanged { program } => SelectionState {
                program: program.clone(),
                month: bound.month.clone(),
            },
            ControlEvent::MonthChanged { month } => SelectionState {
                program: bound.program.clone(),
                month: month.clone(),
            },
            ControlEvent::MenuClicked { click_timestamps } => {
                match latest_click(click_timestamps).and_then(|i| menu.get(i)) {
                    Some(program) => SelectionState {
                        program: program.clone(),
                        month: bound.month.clone(),
                    },
                    None => bound.clone(),
                }
            }
        }
    }
}

/// Index of the most recent click; ties go to the earlier item, no clicks is `None`
fn latest_click(timestamps: &[u64]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (i, &ts) in timestamps.iter().enumerate() {
        if ts == 0 {
            continue;
        }
        if best.is_none_or(|(_, best_ts)| ts > best_ts) {
            best = Some((i, ts));
        }
    }
    best.map(|(i, _)| i)
}
