//! Data source layer: reads the visit CSV into a [`Dataset`](crate::core::Dataset)

mod loader;
mod timestamp;

pub(crate) use loader::load_dataset;
