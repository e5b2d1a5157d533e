//! Per-geography tables keyed by (region code, place name).

pub mod arrow;

pub use self::arrow::{breakdown_to_record_batch, pretty, write_parquet};

use std::collections::HashSet;
use std::fmt;

use crate::error::{AcsError, Result};

/// Two-level row key: outermost administrative code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoKey {
    pub region_code: String,
    pub place_name: String,
}

impl GeoKey {
    pub fn new(region_code: impl Into<String>, place_name: impl Into<String>) -> Self {
        Self {
            region_code: region_code.into(),
            place_name: place_name.into(),
        }
    }
}

impl fmt::Display for GeoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.region_code, self.place_name)
    }
}

/// A labelled column. `None` marks a missing value: null upstream, or no
/// partner row in a join.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Row-indexed numeric table. Keys and labels are unique; every column has
/// one value per key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    index: Vec<GeoKey>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(index: Vec<GeoKey>, columns: Vec<Column>) -> Result<Self> {
        let mut keys = HashSet::with_capacity(index.len());
        if let Some(dup) = index.iter().find(|k| !keys.insert(*k)) {
            return Err(AcsError::InvalidTable(format!("duplicate row key {}", dup)));
        }
        let mut labels = HashSet::with_capacity(columns.len());
        for col in &columns {
            if !labels.insert(col.label.as_str()) {
                return Err(AcsError::InvalidTable(format!(
                    "duplicate column `{}`",
                    col.label
                )));
            }
            if col.values.len() != index.len() {
                return Err(AcsError::InvalidTable(format!(
                    "column `{}` has {} values for {} rows",
                    col.label,
                    col.values.len(),
                    index.len()
                )));
            }
        }
        Ok(Self { index, columns })
    }

    pub fn index(&self) -> &[GeoKey] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.index.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn position(&self, key: &GeoKey) -> Option<usize> {
        self.index.iter().position(|k| k == key)
    }

    /// Value at (`key`, `label`); `None` when the row, the column or the value
    /// is missing.
    pub fn value(&self, key: &GeoKey, label: &str) -> Option<f64> {
        let row = self.position(key)?;
        self.column(label)?.values[row]
    }

    /// One row, transposed to (label, value) pairs in column order.
    pub fn row(&self, key: &GeoKey) -> Option<Vec<(String, Option<f64>)>> {
        let row = self.position(key)?;
        Some(
            self.columns
                .iter()
                .map(|c| (c.label.clone(), c.values[row]))
                .collect(),
        )
    }

    pub fn filter_region(&self, region_code: &str) -> Table {
        self.filter(|k| k.region_code == region_code)
    }

    pub fn filter_place(&self, place_name: &str) -> Table {
        self.filter(|k| k.place_name == place_name)
    }

    pub fn filter(&self, keep: impl Fn(&GeoKey) -> bool) -> Table {
        let rows: Vec<usize> = (0..self.index.len())
            .filter(|&i| keep(&self.index[i]))
            .collect();
        self.take(&rows)
    }

    /// Rows at `rows`, in that order. Positions must be in range and distinct.
    pub(crate) fn take(&self, rows: &[usize]) -> Table {
        Table {
            index: rows.iter().map(|&i| self.index[i].clone()).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    label: c.label.clone(),
                    values: rows.iter().map(|&i| c.values[i]).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec![
                GeoKey::new("01", "Alabama"),
                GeoKey::new("01", "Autauga County, Alabama"),
                GeoKey::new("02", "Alaska"),
            ],
            vec![
                Column::new("total", vec![Some(100.0), Some(10.0), Some(50.0)]),
                Column::new("share", vec![Some(0.5), None, Some(0.25)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_keys_and_labels() {
        let dup_key = Table::new(
            vec![GeoKey::new("01", "A"), GeoKey::new("01", "A")],
            vec![Column::new("x", vec![None, None])],
        );
        assert!(matches!(dup_key, Err(AcsError::InvalidTable(_))));

        let dup_label = Table::new(
            vec![GeoKey::new("01", "A")],
            vec![Column::new("x", vec![None]), Column::new("x", vec![None])],
        );
        assert!(dup_label.is_err());

        let ragged = Table::new(vec![GeoKey::new("01", "A")], vec![Column::new("x", vec![])]);
        assert!(ragged.is_err());
    }

    #[test]
    fn lookups() {
        let t = sample();
        let alaska = GeoKey::new("02", "Alaska");
        assert_eq!(t.value(&alaska, "share"), Some(0.25));
        assert_eq!(t.value(&alaska, "nope"), None);
        assert_eq!(
            t.value(&GeoKey::new("01", "Autauga County, Alabama"), "share"),
            None
        );
        assert_eq!(
            t.row(&alaska).unwrap(),
            vec![("total".to_string(), Some(50.0)), ("share".to_string(), Some(0.25))]
        );
        assert!(t.row(&GeoKey::new("99", "Nowhere")).is_none());
    }

    #[test]
    fn filters_keep_order() {
        let t = sample();
        let alabama = t.filter_region("01");
        assert_eq!(alabama.num_rows(), 2);
        assert_eq!(alabama.index()[1].place_name, "Autauga County, Alabama");
        assert_eq!(alabama.column("total").unwrap().values, vec![Some(100.0), Some(10.0)]);

        assert_eq!(t.filter_place("Alaska").num_rows(), 1);
        assert!(t.filter_region("99").is_empty());
    }
}
