// src/core/normalize.rs
//
// Result Normalizer: project the scraping collaborator's heterogeneous
// record set onto a stable, display-ready column schema.
//
// The column set is a schema-level decision made once per result set:
// a desired column is kept iff at least one record in the set carries
// the key. Individual records missing a kept column get an empty cell.

use serde_json::Value;

use crate::record::{JobRecord, cell_text, schema_keys};

/// The record set projected onto the caller's desired display columns.
/// Row count and order always match the input record set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl NormalizedView {
    pub fn empty() -> Self {
        Self { columns: Vec::new(), rows: Vec::new() }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell by row index and column name (no cloning).
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let ci = self.column_index(column)?;
        self.rows.get(row)?.get(ci).map(|s| s.as_str())
    }

    /// Materialize the view back into records (idempotence checks,
    /// re-projection with a narrower column list).
    pub fn to_records(&self) -> Vec<JobRecord> {
        self.rows
            .iter()
            .map(|row| {
                let mut rec = JobRecord::new();
                for (ci, col) in self.columns.iter().enumerate() {
                    let cell = row.get(ci).cloned().unwrap_or_default();
                    rec.insert(col.clone(), Value::String(cell));
                }
                rec
            })
            .collect()
    }
}

/// Project `records` onto `desired` columns.
///
/// Output column set = `desired ∩ (union of keys across records)`,
/// ordered by `desired`. Cannot fail; degrades by omission only.
pub fn normalize(records: &[JobRecord], desired: &[&str]) -> NormalizedView {
    if records.is_empty() {
        // desired ∩ ∅ = ∅: no columns declared for an empty set
        return NormalizedView::empty();
    }

    let present = schema_keys(records);
    let columns: Vec<String> = desired
        .iter()
        .filter(|c| present.contains(**c))
        .map(|c| s!(*c))
        .collect();

    let rows = records
        .iter()
        .map(|rec| {
            columns
                .iter()
                .map(|col| rec.get(col).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    NormalizedView { columns, rows }
}
