//! Selection filtering

use crate::core::types::{Dataset, SelectionState, VisitRecord};

/// Rows matching a selection, borrowed from the dataset in dataset order.
/// Rebuilt on every recompute and dropped once the charts exist.
#[derive(Debug, Clone)]
pub(crate) struct FilteredView<'a> {
    pub(crate) rows: Vec<&'a VisitRecord>,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn new(dataset: &'a Dataset, selection: &SelectionState) -> Self {
        let rows = dataset
            .records
            .iter()
            .filter(|r| r.program == selection.program && r.month_name() == selection.month)
            .collect();
        FilteredView { rows }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
