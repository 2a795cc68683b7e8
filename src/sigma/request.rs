//! Host request envelope
//!
//! A single JSON document carries everything the host hands the plugin per
//! recomputation: the editor-panel configuration object and the columnar
//! data of the selected source element.

use super::error::{PluginError, Result};
use serde::Deserialize;

/// One recomputation request from the host
///
/// ```json
/// {
///   "config": { "dimension": ["Stage A", "Stage B"], "measures": ["Count"] },
///   "data": { "Stage A": ["X"], "Stage B": ["Y"], "Count": [3] }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct PluginRequest {
    /// Editor-panel configuration values keyed by property name
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,

    /// Column name to row-value array, all arrays the same length
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl PluginRequest {
    /// Parse a request from its JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PluginError::Request(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        let request = PluginRequest::from_json(
            r#"{
                "config": {
                    "dimension": ["Stage A", "Stage B"],
                    "measures": ["Count"],
                    "opacity": "0.7"
                },
                "data": {
                    "Stage A": ["X", "Y"],
                    "Stage B": ["Y", "Z"],
                    "Count": [3, 5]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(request.config["opacity"], "0.7");
        assert_eq!(request.data["Count"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let request = PluginRequest::from_json("{}").unwrap();
        assert!(request.config.is_empty());
        assert!(request.data.is_empty());
    }

    #[test]
    fn test_malformed_request() {
        let err = PluginRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, PluginError::Request(_)));
    }
}
