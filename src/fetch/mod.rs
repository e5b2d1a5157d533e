// src/fetch/mod.rs

pub mod api;
pub mod parse;

use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
    thread,
    time::Duration,
};
use tracing::{error, warn};

use crate::error::{AcsError, Result};
use crate::geography::Scope;

/// Arguments of one call to the statistical service. Equal requests are
/// served from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchRequest {
    pub dataset: String,
    pub year: u16,
    pub scope: Scope,
    pub variables: Vec<String>,
}

impl FetchRequest {
    pub fn new<I, S>(dataset: impl Into<String>, year: u16, scope: Scope, variables: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        if variables.is_empty() {
            return Err(AcsError::InvalidTable(
                "a fetch request needs at least one variable".into(),
            ));
        }
        let mut seen = HashSet::with_capacity(variables.len());
        if let Some(dup) = variables.iter().find(|v| !seen.insert(*v)) {
            return Err(AcsError::InvalidTable(format!(
                "variable `{}` requested twice",
                dup
            )));
        }
        Ok(Self {
            dataset: dataset.into(),
            year,
            scope,
            variables,
        })
    }

    /// The serialized argument tuple.
    pub fn cache_key(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} [{} variables]",
            self.dataset,
            self.year,
            self.scope.predicate(),
            self.variables.len()
        )
    }
}

/// Opaque per-row geography as the service describes it: a display name plus
/// the administrative (level, code) pairs, outermost level first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoDescriptor {
    pub name: String,
    pub params: Vec<(String, String)>,
}

impl GeoDescriptor {
    pub fn new(name: impl Into<String>, params: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Code of the outermost administrative level (state FIPS for states and
    /// counties, the area code for tribal areas).
    pub fn region_code(&self) -> Option<&str> {
        self.params
            .first()
            .map(|(_, code)| code.as_str())
            .filter(|code| !code.is_empty())
    }

    /// Stable identity used to line up rows of the same geography.
    pub fn key(&self) -> String {
        self.params
            .iter()
            .map(|(level, code)| format!("{}:{}", level, code))
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub geo: GeoDescriptor,
    /// One value per `RawTable::variables` entry; `None` where the service sent null.
    pub values: Vec<Option<f64>>,
}

/// A fetch result: numeric values keyed by geography descriptor, one column
/// per requested variable code, in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub variables: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, code: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == code)
    }

    /// Slice `codes` out of this table, in the given order.
    pub fn select<S: AsRef<str>>(&self, codes: &[S]) -> Result<RawTable> {
        let positions = codes
            .iter()
            .map(|code| {
                self.column_index(code.as_ref()).ok_or_else(|| {
                    AcsError::SchemaViolation(format!(
                        "variable `{}` is absent from the response",
                        code.as_ref()
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RawTable {
            variables: codes.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| RawRow {
                    geo: row.geo.clone(),
                    values: positions.iter().map(|&i| row.values[i]).collect(),
                })
                .collect(),
        })
    }

    /// Stack tables fetched for different scopes. All parts must carry the
    /// same variables in the same order.
    pub fn concat(parts: Vec<RawTable>) -> Result<RawTable> {
        let mut parts = parts.into_iter();
        let mut out = parts
            .next()
            .ok_or_else(|| AcsError::InvalidTable("nothing to concatenate".into()))?;
        for part in parts {
            if part.variables != out.variables {
                return Err(AcsError::SchemaViolation(format!(
                    "cannot concatenate responses with different columns: {:?} vs {:?}",
                    out.variables, part.variables
                )));
            }
            out.rows.extend(part.rows);
        }
        Ok(out)
    }

    /// Append the columns of `other` (same geographies, different variables),
    /// lining rows up by descriptor. Used to reassemble chunked requests.
    pub fn widen(mut self, other: RawTable) -> Result<RawTable> {
        if self.rows.len() != other.rows.len() {
            return Err(AcsError::SchemaViolation(format!(
                "chunked responses disagree on row count: {} vs {}",
                self.rows.len(),
                other.rows.len()
            )));
        }
        let mut by_geo: HashMap<String, Vec<Option<f64>>> = other
            .rows
            .into_iter()
            .map(|row| (row.geo.key(), row.values))
            .collect();
        for row in &mut self.rows {
            let extra = by_geo.remove(&row.geo.key()).ok_or_else(|| {
                AcsError::SchemaViolation(format!(
                    "`{}` missing from a chunked response",
                    row.geo.name
                ))
            })?;
            row.values.extend(extra);
        }
        self.variables.extend(other.variables);
        Ok(self)
    }
}

/// The seam to the external statistical service.
pub trait Downloader {
    fn download(&self, request: &FetchRequest) -> Result<RawTable>;
}

impl<D: Downloader + ?Sized> Downloader for &D {
    fn download(&self, request: &FetchRequest) -> Result<RawTable> {
        (**self).download(request)
    }
}

impl<D: Downloader + ?Sized> Downloader for Arc<D> {
    fn download(&self, request: &FetchRequest) -> Result<RawTable> {
        (**self).download(request)
    }
}

impl<D: Downloader + ?Sized> Downloader for Box<D> {
    fn download(&self, request: &FetchRequest) -> Result<RawTable> {
        (**self).download(request)
    }
}

/// Run `op`, retrying external-call failures with exponential backoff.
/// Other errors are returned immediately.
pub fn with_retry<T>(
    max_retries: u32,
    initial_backoff: Duration,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut attempts = 0;
    loop {
        match op() {
            Ok(t) => return Ok(t),
            Err(e) if e.is_retryable() && attempts < max_retries => {
                attempts += 1;
                let backoff = initial_backoff.saturating_mul(2u32.saturating_pow(attempts - 1));
                warn!(attempt = attempts, delay_ms = backoff.as_millis() as u64, error = %e, "Retrying");
                thread::sleep(backoff);
            }
            Err(e) => {
                if attempts > 0 {
                    error!(attempts, error = %e, "Exhausted retries");
                }
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn row(name: &str, params: &[(&str, &str)], values: &[f64]) -> RawRow {
        RawRow {
            geo: GeoDescriptor::new(
                name,
                params
                    .iter()
                    .map(|(l, c)| (l.to_string(), c.to_string()))
                    .collect(),
            ),
            values: values.iter().copied().map(Some).collect(),
        }
    }

    fn table(variables: &[&str], rows: Vec<RawRow>) -> RawTable {
        RawTable {
            variables: variables.iter().map(|v| v.to_string()).collect(),
            rows,
        }
    }

    #[test]
    fn region_code_is_outermost_param() {
        let county = GeoDescriptor::new(
            "Autauga County, Alabama",
            vec![("state".into(), "01".into()), ("county".into(), "001".into())],
        );
        assert_eq!(county.region_code(), Some("01"));
        assert_eq!(county.key(), "state:01/county:001");
        assert_eq!(GeoDescriptor::new("nowhere", vec![]).region_code(), None);
    }

    #[test]
    fn select_reorders_and_rejects_unknown_codes() {
        let t = table(
            &["A", "B", "C"],
            vec![row("One", &[("state", "01")], &[1.0, 2.0, 3.0])],
        );
        let sliced = t.select(&["C", "A"]).unwrap();
        assert_eq!(sliced.variables, vec!["C", "A"]);
        assert_eq!(sliced.rows[0].values, vec![Some(3.0), Some(1.0)]);

        let err = t.select(&["Z"]).unwrap_err();
        assert!(matches!(err, AcsError::SchemaViolation(_)));
    }

    #[test]
    fn concat_requires_matching_columns() {
        let states = table(&["A"], vec![row("Alabama", &[("state", "01")], &[5.0])]);
        let counties = table(
            &["A"],
            vec![row("Autauga", &[("state", "01"), ("county", "001")], &[1.0])],
        );
        let both = RawTable::concat(vec![states.clone(), counties]).unwrap();
        assert_eq!(both.num_rows(), 2);

        let other = table(&["B"], vec![]);
        assert!(RawTable::concat(vec![states, other]).is_err());
        assert!(RawTable::concat(vec![]).is_err());
    }

    #[test]
    fn widen_lines_up_rows_by_descriptor() {
        let left = table(
            &["A"],
            vec![
                row("One", &[("state", "01")], &[1.0]),
                row("Two", &[("state", "02")], &[2.0]),
            ],
        );
        let right = table(
            &["B"],
            vec![
                row("Two", &[("state", "02")], &[20.0]),
                row("One", &[("state", "01")], &[10.0]),
            ],
        );
        let wide = left.widen(right).unwrap();
        assert_eq!(wide.variables, vec!["A", "B"]);
        assert_eq!(wide.rows[0].values, vec![Some(1.0), Some(10.0)]);
        assert_eq!(wide.rows[1].values, vec![Some(2.0), Some(20.0)]);
    }

    #[test]
    fn empty_variable_list_is_rejected() {
        let vars: Vec<String> = vec![];
        assert!(FetchRequest::new("acs5", 2019, Scope::State, vars).is_err());
    }

    #[test]
    fn duplicate_variables_are_rejected() {
        let err = FetchRequest::new("acs5", 2019, Scope::State, ["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, AcsError::InvalidTable(msg) if msg.contains("`A`")));
    }

    #[test]
    fn backoff_saturates_instead_of_overflowing() {
        let calls = Cell::new(0u32);
        let out: Result<()> = with_retry(40, Duration::ZERO, || {
            calls.set(calls.get() + 1);
            Err(AcsError::ExternalCall {
                request: "r".into(),
                message: "down".into(),
            })
        });
        assert!(matches!(out, Err(AcsError::ExternalCall { .. })));
        assert_eq!(calls.get(), 41);
    }

    #[test]
    fn cache_key_distinguishes_arguments() {
        let a = FetchRequest::new("acs5", 2019, Scope::State, ["A"]).unwrap();
        let b = FetchRequest::new("acs5", 2019, Scope::County, ["A"]).unwrap();
        assert_eq!(a.cache_key().unwrap(), a.clone().cache_key().unwrap());
        assert_ne!(a.cache_key().unwrap(), b.cache_key().unwrap());
    }

    #[test]
    fn retry_only_external_failures() {
        let calls = Cell::new(0);
        let out = with_retry(3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(AcsError::ExternalCall {
                    request: "r".into(),
                    message: "boom".into(),
                })
            } else {
                Ok(7)
            }
        });
        assert_eq!(out.unwrap(), 7);
        assert_eq!(calls.get(), 3);

        let calls = Cell::new(0);
        let out: Result<()> = with_retry(3, Duration::from_millis(1), || {
            calls.set(calls.get() + 1);
            Err(AcsError::SchemaViolation("bad".into()))
        });
        assert!(out.is_err());
        assert_eq!(calls.get(), 1);
    }
}
