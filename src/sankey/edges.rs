//! Edge aggregation
//!
//! Converts the ordered dimension/measure column selection into a
//! deduplicated, weighted edge list. Each adjacent dimension pair
//! contributes one edge candidate per row; candidates sharing a
//! (source, target) pair are summed into a single edge.

use crate::sigma::error::{PluginError, Result};
use crate::sigma::Frame;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One aggregated link of the flow diagram
///
/// Field names match the renderer's source/target/value bindings. Identity
/// is the ordered (from, to) pair, case- and whitespace-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub value: f64,
}

/// Aggregate the selected columns into a deduplicated edge list
///
/// For each adjacent dimension pair `i` and each row `j`, the candidate
/// `dimensions[i][j] -> dimensions[i+1][j]` is weighed by `measures[i][j]`.
/// Candidates are keyed by the (from, to) tuple; the first occurrence
/// inserts an edge, repeats add into its value. Output preserves the
/// first-insertion order of distinct pairs.
///
/// Fewer than two dimensions means there are no transitions to aggregate
/// (the source data has not loaded, or the selection is incomplete) and the
/// result is empty.
///
/// # Errors
/// Fails fast on a missing dimension/measure column, a measure selection
/// that does not pair up with the dimensions, non-numeric weights, and null
/// cells. Structural errors never yield a partially-populated edge list.
pub fn aggregate_edges(
    dimensions: &[String],
    measures: &[String],
    frame: &Frame,
) -> Result<Vec<Edge>> {
    if dimensions.len() < 2 {
        return Ok(Vec::new());
    }

    if measures.len() != dimensions.len() - 1 {
        return Err(PluginError::MeasureCountMismatch {
            expected: dimensions.len() - 1,
            actual: measures.len(),
        });
    }

    let mut edges: Vec<Edge> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for i in 0..dimensions.len() - 1 {
        let from_values = frame.string_values(&dimensions[i])?;
        let to_values = frame.string_values(&dimensions[i + 1])?;
        let weights = frame.numeric_values(&measures[i])?;

        for j in 0..from_values.len() {
            let key = (from_values[j].clone(), to_values[j].clone());
            match index.entry(key) {
                Entry::Occupied(slot) => edges[*slot.get()].value += weights[j],
                Entry::Vacant(slot) => {
                    let (from, to) = slot.key().clone();
                    slot.insert(edges.len());
                    edges.push(Edge {
                        from,
                        to,
                        value: weights[j],
                    });
                }
            }
        }
    }

    Ok(edges)
}
