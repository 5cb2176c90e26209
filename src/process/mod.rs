// src/process/mod.rs

pub mod dataset;
pub mod filter;
pub mod pivot;

pub use dataset::Dataset;
pub use filter::RowFilter;
pub use pivot::{pivot, WideTable};
