//! Raw fetch results → tables keyed by (region code, place name) with
//! human-readable column labels.

use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::VariableGroup;
use crate::error::{AcsError, Result};
use crate::fetch::RawTable;
use crate::geography::Scope;
use crate::table::{Column, GeoKey, Table};

/// How rows are ordered after relabelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Descending by the group's total, then grouped by ascending region code
    /// keeping the value order inside each region.
    ValueWithinRegion,
    /// Alphabetical by place name.
    PlaceName,
    /// As returned by the service.
    Natural,
}

impl RowOrder {
    pub fn for_scope(scope: Scope) -> Self {
        match scope {
            Scope::County => RowOrder::ValueWithinRegion,
            Scope::State => RowOrder::PlaceName,
            Scope::TribalArea => RowOrder::Natural,
        }
    }
}

/// Relabel `raw` through `group` and order its rows.
///
/// Fails with a schema violation when a group code is missing from `raw`, a
/// descriptor carries no region code, or two rows collapse onto the same key.
pub fn normalize(raw: &RawTable, group: &VariableGroup, order: RowOrder) -> Result<Table> {
    if group.is_empty() {
        return Err(AcsError::InvalidTable(format!(
            "variable group `{}` is empty",
            group.name()
        )));
    }
    let sliced = raw.select(&group.codes())?;

    let mut seen = HashSet::with_capacity(sliced.num_rows());
    let mut index = Vec::with_capacity(sliced.num_rows());
    for row in &sliced.rows {
        let code = row.geo.region_code().ok_or_else(|| {
            AcsError::SchemaViolation(format!(
                "descriptor for `{}` carries no region code",
                row.geo.name
            ))
        })?;
        let key = GeoKey::new(code, row.geo.name.clone());
        if !seen.insert(key.clone()) {
            return Err(AcsError::SchemaViolation(format!(
                "geography {} appears twice in the response",
                key
            )));
        }
        index.push(key);
    }

    let columns = group
        .variables()
        .iter()
        .enumerate()
        .map(|(i, var)| {
            Column::new(
                var.label,
                sliced.rows.iter().map(|row| row.values[i]).collect(),
            )
        })
        .collect();

    let table = Table::new(index, columns)?;
    let rows = row_order(&table, order);
    debug!(group = group.name(), rows = table.num_rows(), ?order, "normalized");
    Ok(table.take(&rows))
}

fn row_order(table: &Table, order: RowOrder) -> Vec<usize> {
    let mut rows: Vec<usize> = (0..table.num_rows()).collect();
    let index = table.index();
    match order {
        RowOrder::Natural => {}
        RowOrder::PlaceName => rows.sort_by(|&a, &b| index[a].place_name.cmp(&index[b].place_name)),
        RowOrder::ValueWithinRegion => {
            if let Some(total) = table.columns().first() {
                rows.sort_by(|&a, &b| descending(total.values[a], total.values[b]));
            }
            // stable: keeps the value order inside each region
            rows.sort_by(|&a, &b| index[a].region_code.cmp(&index[b].region_code));
        }
    }
    rows
}

/// Largest first; missing values last.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variable;
    use crate::derive::{percentages, DivisionPolicy};
    use crate::fetch::{GeoDescriptor, RawRow};

    static SPEAKERS: &[Variable] = &[
        Variable::new("A", "total"),
        Variable::new("B", "x speakers"),
        Variable::new("C", "y speakers"),
    ];

    fn group() -> VariableGroup {
        VariableGroup::new("speakers", SPEAKERS)
    }

    fn county(state: &str, county: &str, name: &str, values: [f64; 3]) -> RawRow {
        RawRow {
            geo: GeoDescriptor::new(
                name,
                vec![
                    ("state".to_string(), state.to_string()),
                    ("county".to_string(), county.to_string()),
                ],
            ),
            values: values.into_iter().map(Some).collect(),
        }
    }

    fn raw(rows: Vec<RawRow>) -> RawTable {
        RawTable {
            variables: vec!["A".into(), "B".into(), "C".into()],
            rows,
        }
    }

    fn names(table: &Table) -> Vec<&str> {
        table.index().iter().map(|k| k.place_name.as_str()).collect()
    }

    #[test]
    fn relabels_and_keys_rows() {
        let table = normalize(
            &raw(vec![
                county("01", "003", "CountyTwo", [50.0, 25.0, 0.0]),
                county("01", "001", "CountyOne", [100.0, 10.0, 5.0]),
            ]),
            &group(),
            RowOrder::ValueWithinRegion,
        )
        .unwrap();

        assert_eq!(table.labels(), vec!["total", "x speakers", "y speakers"]);
        assert_eq!(
            table.index(),
            &[GeoKey::new("01", "CountyOne"), GeoKey::new("01", "CountyTwo")]
        );
        assert_eq!(
            table.value(&GeoKey::new("01", "CountyTwo"), "x speakers"),
            Some(25.0)
        );
    }

    #[test]
    fn raw_rows_to_speaker_shares() {
        let table = normalize(
            &raw(vec![
                county("01", "003", "CountyTwo", [50.0, 25.0, 0.0]),
                county("01", "001", "CountyOne", [100.0, 10.0, 5.0]),
            ]),
            &group(),
            RowOrder::ValueWithinRegion,
        )
        .unwrap();
        let pct = percentages(&table, DivisionPolicy::default()).unwrap();

        let one = GeoKey::new("01", "CountyOne");
        let two = GeoKey::new("01", "CountyTwo");
        assert_eq!(pct.index(), &[one.clone(), two.clone()]);
        assert_eq!(pct.labels(), vec!["x speakers", "y speakers"]);
        assert_eq!(pct.value(&one, "x speakers"), Some(0.10));
        assert_eq!(pct.value(&one, "y speakers"), Some(0.05));
        assert_eq!(pct.value(&two, "x speakers"), Some(0.50));
        assert_eq!(pct.value(&two, "y speakers"), Some(0.0));
    }

    #[test]
    fn regions_are_contiguous_and_ascending() {
        let table = normalize(
            &raw(vec![
                county("02", "010", "Big North", [900.0, 0.0, 0.0]),
                county("01", "001", "Big South", [800.0, 0.0, 0.0]),
                county("02", "020", "Small North", [300.0, 0.0, 0.0]),
                county("01", "003", "Small South", [200.0, 0.0, 0.0]),
                county("02", "030", "Mid North", [500.0, 0.0, 0.0]),
            ]),
            &group(),
            RowOrder::ValueWithinRegion,
        )
        .unwrap();

        assert_eq!(
            names(&table),
            vec!["Big South", "Small South", "Big North", "Mid North", "Small North"]
        );
    }

    #[test]
    fn missing_totals_sort_last_within_region() {
        let mut unknown = county("01", "005", "Unknown", [0.0, 0.0, 0.0]);
        unknown.values[0] = None;
        let table = normalize(
            &raw(vec![unknown, county("01", "001", "Known", [1.0, 0.0, 0.0])]),
            &group(),
            RowOrder::ValueWithinRegion,
        )
        .unwrap();
        assert_eq!(names(&table), vec!["Known", "Unknown"]);
    }

    #[test]
    fn state_scope_sorts_by_name_and_tribal_keeps_order() {
        let rows = vec![
            county("02", "", "Zeta", [1.0, 0.0, 0.0]),
            county("01", "", "Alpha", [2.0, 0.0, 0.0]),
        ];
        let by_name = normalize(&raw(rows.clone()), &group(), RowOrder::for_scope(Scope::State))
            .unwrap();
        assert_eq!(names(&by_name), vec!["Alpha", "Zeta"]);

        let natural = normalize(&raw(rows), &group(), RowOrder::for_scope(Scope::TribalArea))
            .unwrap();
        assert_eq!(names(&natural), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn descriptor_without_region_code_is_fatal() {
        let mut bad = county("01", "001", "Headless", [1.0, 1.0, 1.0]);
        bad.geo.params.clear();
        let err = normalize(&raw(vec![bad]), &group(), RowOrder::Natural).unwrap_err();
        assert!(matches!(err, AcsError::SchemaViolation(msg) if msg.contains("Headless")));
    }

    #[test]
    fn missing_group_code_is_fatal() {
        let mut partial = raw(vec![county("01", "001", "One", [1.0, 1.0, 1.0])]);
        partial.variables[2] = "Q".into();
        assert!(matches!(
            normalize(&partial, &group(), RowOrder::Natural),
            Err(AcsError::SchemaViolation(_))
        ));
    }

    #[test]
    fn duplicate_geography_is_fatal() {
        let rows = vec![
            county("01", "001", "Twin", [1.0, 1.0, 1.0]),
            county("01", "002", "Twin", [2.0, 2.0, 2.0]),
        ];
        assert!(matches!(
            normalize(&raw(rows), &group(), RowOrder::Natural),
            Err(AcsError::SchemaViolation(_))
        ));
    }
}
