//! Core module - visit data model, aggregation and filtering

mod aggregator;
mod filter;
mod types;

pub(crate) use aggregator::{category_counts, summarize, value_counts};
pub(crate) use filter::FilteredView;
pub(crate) use types::{
    CategoryCount, Dataset, SelectionState, SummaryStats, VisitRecord,
};
