//! Columnar data ingestion
//!
//! Materializes the host's columnar payload (a JSON object mapping column
//! names to same-length arrays of row values) as a Polars DataFrame, and
//! provides typed access for the aggregation step. Row-count alignment is
//! enforced here so downstream code can index columns safely.

use super::error::{PluginError, Result};
use polars::prelude::*;

/// Columnar data supplied by the host element
#[derive(Debug)]
pub struct Frame {
    df: DataFrame,
}

impl Frame {
    /// Build a frame from the host's column map
    ///
    /// Each entry must be a JSON array. Arrays holding only numbers (and
    /// nulls) become f64 columns; everything else becomes a string column
    /// with numbers and booleans stringified.
    ///
    /// # Errors
    /// Returns `MisalignedColumns` when arrays have differing lengths and
    /// `Request` when an entry is not an array or holds nested values.
    pub fn from_columns(columns: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut columns_vec = Vec::with_capacity(columns.len());
        let mut expected_len: Option<usize> = None;

        for (name, value) in columns {
            let cells = value.as_array().ok_or_else(|| {
                PluginError::Request(format!("column '{}' is not an array", name))
            })?;

            match expected_len {
                Some(expected) if cells.len() != expected => {
                    return Err(PluginError::MisalignedColumns {
                        column: name.clone(),
                        expected,
                        actual: cells.len(),
                    });
                }
                Some(_) => {}
                None => expected_len = Some(cells.len()),
            }

            let series = json_column_to_series(name, cells)?;
            columns_vec.push(series.into_column());
        }

        let df = DataFrame::new(columns_vec)?;
        Ok(Frame { df })
    }

    /// Number of rows shared by all columns
    pub fn n_rows(&self) -> usize {
        self.df.height()
    }

    /// True when the frame holds no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0 || self.df.width() == 0
    }

    /// True when a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Read a dimension column as strings, one value per row
    ///
    /// Numeric columns are stringified the way the host UI displays them
    /// (integral floats without a trailing fraction). Null cells fail fast.
    pub fn string_values(&self, name: &str) -> Result<Vec<String>> {
        let col = self.column(name)?;

        match col.dtype() {
            DataType::String => col
                .str()?
                .into_iter()
                .enumerate()
                .map(|(row, opt)| {
                    opt.map(|s| s.to_string())
                        .ok_or_else(|| null_value(name, row))
                })
                .collect(),
            DataType::Float64 => col
                .f64()?
                .into_iter()
                .enumerate()
                .map(|(row, opt)| opt.map(format_f64).ok_or_else(|| null_value(name, row)))
                .collect(),
            DataType::Int64 => col
                .i64()?
                .into_iter()
                .enumerate()
                .map(|(row, opt)| {
                    opt.map(|v| v.to_string())
                        .ok_or_else(|| null_value(name, row))
                })
                .collect(),
            _ => {
                // Remaining dtypes go through a cast
                let cast = col.cast(&DataType::String)?;
                cast.str()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, opt)| {
                        opt.map(|s| s.to_string())
                            .ok_or_else(|| null_value(name, row))
                    })
                    .collect()
            }
        }
    }

    /// Read a measure column as f64 weights, one value per row
    ///
    /// # Errors
    /// Returns `NonNumericWeight` for string columns (no implicit coercion)
    /// and `NullValue` for null cells.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let col = self.column(name)?;

        // Zero rows: nothing to read, whatever the dtype
        if col.len() == 0 {
            return Ok(Vec::new());
        }

        match col.dtype() {
            DataType::Float64 => col
                .f64()?
                .into_iter()
                .enumerate()
                .map(|(row, opt)| opt.ok_or_else(|| null_value(name, row)))
                .collect(),
            DataType::Int64 => col
                .i64()?
                .into_iter()
                .enumerate()
                .map(|(row, opt)| opt.map(|v| v as f64).ok_or_else(|| null_value(name, row)))
                .collect(),
            _ => Err(PluginError::NonNumericWeight {
                column: name.to_string(),
            }),
        }
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.df
            .column(name)
            .map_err(|_| PluginError::MissingColumn(name.to_string()))
    }
}

fn null_value(column: &str, row: usize) -> PluginError {
    PluginError::NullValue {
        column: column.to_string(),
        row,
    }
}

/// Convert one JSON column array to a Polars Series (columnar, no records)
fn json_column_to_series(name: &str, cells: &[serde_json::Value]) -> Result<Series> {
    use serde_json::Value;

    let all_numeric = cells
        .iter()
        .all(|v| matches!(v, Value::Number(_) | Value::Null));

    if all_numeric && cells.iter().any(|v| v.is_number()) {
        let values: Vec<Option<f64>> = cells.iter().map(|v| v.as_f64()).collect();
        return Ok(Series::new(name.into(), values));
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|v| match v {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(PluginError::Request(format!(
                "unsupported value {} in column '{}'",
                other, name
            ))),
        })
        .collect::<Result<_>>()?;

    Ok(Series::new(name.into(), values))
}

/// Format an f64 cell the way the host UI displays it
fn format_f64(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}
