use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::Result;
use crate::process::dataset::Dataset;

const ENTITY_COLUMN: &str = "Entity";
const YEAR_COLUMN: &str = "Year";

/// Wide-format table: one row per year, one value series per entity.
/// Missing or non-numeric cells are `None`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    years: Vec<i32>,
    series: BTreeMap<String, Vec<Option<f64>>>,
}

impl WideTable {
    /// Years in ascending order; every series has one slot per year.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn series(&self, entity: &str) -> Option<&[Option<f64>]> {
        self.series.get(entity).map(Vec::as_slice)
    }

    /// The `(year, value)` pairs of one entity's series, gaps removed.
    pub fn points(&self, entity: &str) -> Option<Vec<(i32, f64)>> {
        let values = self.series.get(entity)?;
        Some(
            self.years
                .iter()
                .zip(values)
                .filter_map(|(year, value)| value.map(|v| (*year, v)))
                .collect(),
        )
    }

    /// Period-over-period percentage change per entity:
    /// `(v[i] - v[i-1]) / v[i-1] * 100`. The first year has no prior value
    /// and stays `None`, as does any year whose prior value is missing or
    /// zero.
    pub fn pct_change(&self) -> WideTable {
        let series = self
            .series
            .iter()
            .map(|(entity, values)| {
                let mut changes = vec![None; values.len()];
                for i in 1..values.len() {
                    if let (Some(prev), Some(cur)) = (values[i - 1], values[i]) {
                        if prev != 0.0 {
                            changes[i] = Some((cur - prev) / prev * 100.0);
                        }
                    }
                }
                (entity.clone(), changes)
            })
            .collect();

        WideTable {
            years: self.years.clone(),
            series,
        }
    }
}

/// Pivot a long-format dataset into one series per entity, keyed by year.
/// `value_column` names the metric column explicitly; nothing here guesses
/// it from substrings, and an unknown name fails fast with
/// `SchemaMismatch`.
pub fn pivot(dataset: &Dataset, value_column: &str) -> Result<WideTable> {
    let entity_idx = dataset.require_column(ENTITY_COLUMN)?;
    let year_idx = dataset.require_column(YEAR_COLUMN)?;
    let value_idx = dataset.require_column(value_column)?;

    let mut years = BTreeSet::new();
    let mut entities = BTreeSet::new();
    let mut cells: HashMap<(String, i32), f64> = HashMap::new();

    for row in dataset.rows() {
        let Some(year) = row.get(year_idx).and_then(|y| y.trim().parse::<i32>().ok()) else {
            continue;
        };
        let Some(entity) = row.get(entity_idx) else {
            continue;
        };
        years.insert(year);
        entities.insert(entity.clone());
        if let Some(value) = row.get(value_idx).and_then(|v| v.trim().parse::<f64>().ok()) {
            cells.insert((entity.clone(), year), value);
        }
    }

    let years: Vec<i32> = years.into_iter().collect();
    let series = entities
        .into_iter()
        .map(|entity| {
            let values = years
                .iter()
                .map(|year| cells.get(&(entity.clone(), *year)).copied())
                .collect();
            (entity, values)
        })
        .collect();

    Ok(WideTable { years, series })
}
