// src/fetch/parse.rs

use serde_json::Value;
use std::collections::HashSet;

use super::{GeoDescriptor, RawRow, RawTable};
use crate::error::{AcsError, Result};

const NAME_COLUMN: &str = "NAME";

/// Parse the service's array-of-arrays JSON body.
///
/// The first row is the header. `NAME` carries the display name, each
/// requested variable its own column, and every remaining column is an
/// administrative level of the row's geography, in response order.
pub fn parse_response<S: AsRef<str>>(body: &str, variables: &[S]) -> Result<RawTable> {
    let grid: Vec<Vec<Value>> = serde_json::from_str(body).map_err(|e| {
        AcsError::SchemaViolation(format!("response is not a JSON table: {}", e))
    })?;
    let mut grid = grid.into_iter();
    let header = grid
        .next()
        .ok_or_else(|| AcsError::SchemaViolation("response has no header row".into()))?
        .into_iter()
        .map(|cell| match cell {
            Value::String(s) => Ok(s),
            other => Err(AcsError::SchemaViolation(format!(
                "non-text header cell {}",
                other
            ))),
        })
        .collect::<Result<Vec<String>>>()?;

    let position = |name: &str| header.iter().position(|h| h == name);
    let name_idx = position(NAME_COLUMN)
        .ok_or_else(|| AcsError::SchemaViolation("response has no NAME column".into()))?;
    let value_idx = variables
        .iter()
        .map(|v| {
            position(v.as_ref()).ok_or_else(|| {
                AcsError::SchemaViolation(format!(
                    "variable `{}` is absent from the response",
                    v.as_ref()
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let claimed: HashSet<usize> = value_idx.iter().copied().chain([name_idx]).collect();
    let geo_idx: Vec<usize> = (0..header.len()).filter(|i| !claimed.contains(i)).collect();

    let mut rows = Vec::new();
    for (line, cells) in grid.enumerate() {
        if cells.len() != header.len() {
            return Err(AcsError::SchemaViolation(format!(
                "row {} has {} cells, header has {}",
                line + 1,
                cells.len(),
                header.len()
            )));
        }
        let name = text(&cells[name_idx]).ok_or_else(|| {
            AcsError::SchemaViolation(format!("row {} has no display name", line + 1))
        })?;
        let params = geo_idx
            .iter()
            .map(|&i| {
                let code = text(&cells[i]).ok_or_else(|| {
                    AcsError::SchemaViolation(format!(
                        "row {} (`{}`) has no `{}` code",
                        line + 1,
                        name,
                        header[i]
                    ))
                })?;
                Ok((header[i].clone(), code))
            })
            .collect::<Result<Vec<_>>>()?;
        let values = value_idx
            .iter()
            .map(|&i| number(&cells[i], &header[i], &name))
            .collect::<Result<Vec<_>>>()?;

        rows.push(RawRow {
            geo: GeoDescriptor::new(name, params),
            values,
        });
    }

    Ok(RawTable {
        variables: variables.iter().map(|v| v.as_ref().to_string()).collect(),
        rows,
    })
}

fn text(cell: &Value) -> Option<String> {
    match cell {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(cell: &Value, column: &str, place: &str) -> Result<Option<f64>> {
    match cell {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse::<f64>().map(Some).map_err(|_| {
            AcsError::SchemaViolation(format!(
                "`{}` for `{}` is not numeric: {:?}",
                column, place, s
            ))
        }),
        other => Err(AcsError::SchemaViolation(format!(
            "`{}` for `{}` has unexpected value {}",
            column, place, other
        ))),
    }
}
