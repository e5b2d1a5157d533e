//! Per-state program coverage rates, read from the CSV export of the coverage
//! workbook. The first column holds the state display name.

use serde::Serialize;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, warn};

use crate::error::{AcsError, Result};

/// `Count` columns are head counts ("Number ..."); everything else is a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeasureKind {
    Rate,
    Count,
}

impl MeasureKind {
    fn of_column(name: &str) -> Self {
        if name.contains("Number") {
            MeasureKind::Count
        } else {
            MeasureKind::Rate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageValue {
    pub column: String,
    pub kind: MeasureKind,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRow {
    pub state: String,
    pub values: Vec<CoverageValue>,
}

impl CoverageRow {
    pub fn get(&self, column: &str) -> Option<&CoverageValue> {
        self.values.iter().find(|v| v.column == column)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoverageTable {
    columns: Vec<String>,
    rows: Vec<CoverageRow>,
}

impl CoverageTable {
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(path = %path.display(), states = table.rows.len(), "loaded coverage table");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let columns: Vec<String> = headers.iter().skip(1).map(String::from).collect();
        if headers.is_empty() {
            return Err(AcsError::SchemaViolation(
                "coverage table has no header row".into(),
            ));
        }

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let state = match record.get(0) {
                Some(s) if !s.is_empty() => s.to_string(),
                // footnote or blank line
                _ => continue,
            };
            let values = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let cell = record.get(i + 1).unwrap_or("");
                    let value = parse_cell(cell);
                    if value.is_none() && !cell.is_empty() {
                        warn!(state = %state, column = %column, cell, "unparseable coverage cell");
                    }
                    CoverageValue {
                        column: column.clone(),
                        kind: MeasureKind::of_column(column),
                        value,
                    }
                })
                .collect();
            rows.push(CoverageRow { state, values });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact match on the state display name.
    pub fn lookup(&self, state_name: &str) -> Option<&CoverageRow> {
        self.rows.iter().find(|r| r.state == state_name)
    }
}

/// `"1,234"` → 1234, `"45%"` → 0.45, blank → missing.
fn parse_cell(cell: &str) -> Option<f64> {
    let cleaned: String = cell.chars().filter(|&c| c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    match cleaned.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok().map(|v| v / 100.0),
        None => cleaned.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const SHEET: &str = "\
State,Number Eligible,Number Participating,Coverage Rate
Alabama,\"150,000\",\"90,000\",60%
Alaska,20000,15000,0.75
Guam,,,
";

    #[test]
    fn parses_counts_and_rates() {
        let table = CoverageTable::from_reader(SHEET.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.columns(),
            &["Number Eligible", "Number Participating", "Coverage Rate"]
        );

        let alabama = table.lookup("Alabama").unwrap();
        let eligible = alabama.get("Number Eligible").unwrap();
        assert_eq!(eligible.kind, MeasureKind::Count);
        assert_eq!(eligible.value, Some(150_000.0));
        let rate = alabama.get("Coverage Rate").unwrap();
        assert_eq!(rate.kind, MeasureKind::Rate);
        assert_eq!(rate.value, Some(0.6));

        assert_eq!(
            table.lookup("Alaska").unwrap().get("Coverage Rate").unwrap().value,
            Some(0.75)
        );
        assert!(table
            .lookup("Guam")
            .unwrap()
            .values
            .iter()
            .all(|v| v.value.is_none()));
    }

    #[test]
    fn lookup_is_exact() {
        let table = CoverageTable::from_reader(SHEET.as_bytes()).unwrap();
        assert!(table.lookup("alabama").is_none());
        assert!(table.lookup("Texas").is_none());
    }

    #[test]
    fn reads_from_disk() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("coverage.csv");
        File::create(&path)?.write_all(SHEET.as_bytes())?;
        let table = CoverageTable::from_csv(&path)?;
        assert!(table.lookup("Alaska").is_some());
        Ok(())
    }

    #[test]
    fn cell_formats() {
        assert_eq!(parse_cell("12.5 %"), Some(0.125));
        assert_eq!(parse_cell("1,000,000"), Some(1e6));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("n/a"), None);
    }
}
