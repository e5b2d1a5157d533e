//! Percentage-of-total indicators, composite buckets, and the left join that
//! assembles a per-geography report.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{AcsError, Result};
use crate::table::{Column, GeoKey, Table};

/// Label of the composite poverty indicator: everyone below 1.85× the
/// poverty line.
pub const BELOW_185_PERCENT: &str = "under 185%";

/// What a zero total produces when deriving a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionPolicy {
    /// Every zero divisor yields NaN.
    #[default]
    #[serde(rename = "nan")]
    NotANumber,
    /// Plain float division: ±inf for x/0, NaN for 0/0.
    Ieee,
    /// Zero divisors are an `UndefinedRatio` error.
    Fail,
}

impl DivisionPolicy {
    fn divide(
        self,
        numerator: Option<f64>,
        divisor: Option<f64>,
        key: &GeoKey,
        label: &str,
    ) -> Result<Option<f64>> {
        let (n, d) = match (numerator, divisor) {
            (Some(n), Some(d)) => (n, d),
            _ => return Ok(None),
        };
        if d != 0.0 {
            return Ok(Some(n / d));
        }
        match self {
            DivisionPolicy::NotANumber => Ok(Some(f64::NAN)),
            DivisionPolicy::Ieee => Ok(Some(n / d)),
            DivisionPolicy::Fail => Err(AcsError::UndefinedRatio {
                row: key.to_string(),
                column: label.to_string(),
            }),
        }
    }
}

/// Divide every column but the first by the first, row-wise, and drop the
/// first. Missing numerators or totals stay missing.
pub fn percentages(table: &Table, policy: DivisionPolicy) -> Result<Table> {
    let (total, rest) = table.columns().split_first().ok_or_else(|| {
        AcsError::InvalidTable("percentages needs a leading total column".into())
    })?;

    let columns = rest
        .iter()
        .map(|col| {
            let values = table
                .index()
                .iter()
                .enumerate()
                .map(|(row, key)| policy.divide(col.values[row], total.values[row], key, &col.label))
                .collect::<Result<Vec<_>>>()?;
            Ok(Column::new(col.label.clone(), values))
        })
        .collect::<Result<Vec<_>>>()?;

    Table::new(table.index().to_vec(), columns)
}

/// Replace the `included` columns by one column `label` holding their sum.
///
/// The total (first column) cannot be included. Columns not named stay, in
/// order, and the composite is appended last. Missing buckets are skipped; a
/// row with every included bucket missing is missing.
pub fn aggregate_threshold(table: &Table, included: &[&str], label: &str) -> Result<Table> {
    if included.is_empty() {
        return Err(AcsError::InvalidTable(
            "aggregate needs at least one column".into(),
        ));
    }
    let total = table
        .columns()
        .first()
        .ok_or_else(|| AcsError::InvalidTable("aggregate of an empty table".into()))?;
    let included: HashSet<&str> = included.iter().copied().collect();
    if included.contains(total.label.as_str()) {
        return Err(AcsError::InvalidTable(format!(
            "total column `{}` cannot be aggregated",
            total.label
        )));
    }
    if let Some(unknown) = included.iter().find(|l| table.column(l).is_none()) {
        return Err(AcsError::InvalidTable(format!("no column `{}` to aggregate", unknown)));
    }

    let (summed, mut kept): (Vec<&Column>, Vec<&Column>) = table
        .columns()
        .iter()
        .partition(|c| included.contains(c.label.as_str()));

    let composite = (0..table.num_rows())
        .map(|row| {
            summed
                .iter()
                .filter_map(|c| c.values[row])
                .fold(None, |acc: Option<f64>, v| Some(acc.unwrap_or(0.0) + v))
        })
        .collect();
    let composite = Column::new(label, composite);
    kept.push(&composite);

    Table::new(
        table.index().to_vec(),
        kept.into_iter().cloned().collect(),
    )
}

/// Left join of `derived` tables onto `population` by (region code, place
/// name). Every population row appears once, in order; absent partners give
/// missing values. Clashing column labels are rejected.
pub fn combine(population: &Table, derived: &[&Table]) -> Result<Table> {
    let mut labels: HashSet<String> = population.labels().into_iter().map(String::from).collect();
    let mut columns = population.columns().to_vec();

    for table in derived {
        let rows: HashMap<&GeoKey, usize> = table
            .index()
            .iter()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();
        let lookup: Vec<Option<usize>> = population
            .index()
            .iter()
            .map(|k| rows.get(k).copied())
            .collect();

        for col in table.columns() {
            if !labels.insert(col.label.clone()) {
                return Err(AcsError::InvalidTable(format!(
                    "column `{}` appears in more than one joined table",
                    col.label
                )));
            }
            columns.push(Column::new(
                col.label.clone(),
                lookup
                    .iter()
                    .map(|row| row.and_then(|i| col.values[i]))
                    .collect(),
            ));
        }
    }

    Table::new(population.index().to_vec(), columns)
}
