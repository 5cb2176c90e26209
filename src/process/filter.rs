use std::collections::HashSet;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::dataset::Dataset;

const ENTITY_COLUMN: &str = "Entity";
const YEAR_COLUMN: &str = "Year";

/// Keeps rows whose `Entity` is in the allow-list and whose `Year` parses to
/// an integer inside the inclusive range. Rows with an unparseable year are
/// skipped, not errors; grapher exports sometimes carry footer or annotation
/// rows.
#[derive(Debug, Clone)]
pub struct RowFilter {
    entities: HashSet<String>,
    years: RangeInclusive<i32>,
}

impl RowFilter {
    pub fn new(entities: impl IntoIterator<Item = String>, years: RangeInclusive<i32>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
            years,
        }
    }

    /// Filter `dataset`, preserving row order and the full column schema.
    /// Fails with `NoMatchingRows` when nothing survives, so callers can
    /// tell "fetched fine but filters matched nothing" apart from a
    /// transport failure.
    pub fn apply(&self, dataset: &Dataset) -> Result<Dataset> {
        let entity_idx = dataset.column_index(ENTITY_COLUMN);
        let year_idx = dataset.column_index(YEAR_COLUMN);

        let mut kept = Vec::new();
        if let (Some(entity_idx), Some(year_idx)) = (entity_idx, year_idx) {
            for row in dataset.rows() {
                let Some(year) = row.get(year_idx).and_then(|y| y.trim().parse::<i32>().ok())
                else {
                    continue;
                };
                let entity = row.get(entity_idx).map(String::as_str).unwrap_or("");
                if self.entities.contains(entity) && self.years.contains(&year) {
                    kept.push(row.clone());
                }
            }
        }

        if kept.is_empty() {
            return Err(Error::NoMatchingRows);
        }
        debug!(
            kept = kept.len(),
            total = dataset.len(),
            "applied entity/year filter"
        );
        Ok(Dataset::new(dataset.columns().to_vec(), kept))
    }
}
