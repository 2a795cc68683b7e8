//! Render model handed to the rendering collaborator
//!
//! The plugin core does not lay out or draw anything. Its output is a plain
//! data document: the aggregated edge list, the resolved color table, and
//! the series settings the chart component applies verbatim. Field names
//! match the renderer's source/target/value bindings.

use crate::sankey::{ColorEntry, Edge};
use serde::{Deserialize, Serialize};

/// Chart series settings carried as data rather than renderer calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSettings {
    pub source_id_field: String,
    pub target_id_field: String,
    pub value_field: String,
    pub padding_right: u32,
    pub node_align: String,
    pub node_padding: u32,
    pub node_width: u32,
    pub link_tension: f64,
    pub fill_opacity: f64,
    pub fill_style: String,
    pub control_point_distance: f64,
}

impl SeriesSettings {
    /// Build the settings block for one render
    ///
    /// Only opacity and tension vary per configuration; the rest is the
    /// fixed chart geometry of this plugin.
    pub fn new(fill_opacity: f64, link_tension: f64) -> Self {
        SeriesSettings {
            source_id_field: "from".to_string(),
            target_id_field: "to".to_string(),
            value_field: "value".to_string(),
            padding_right: 150,
            node_align: "left".to_string(),
            node_padding: 100,
            node_width: 10,
            link_tension,
            fill_opacity,
            fill_style: "source".to_string(),
            control_point_distance: 0.0,
        }
    }
}

/// Complete output of one recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Deduplicated weighted links, in first-insertion order
    pub edges: Vec<Edge>,
    /// Node id to fill value, defaults merged with user overrides
    pub colors: Vec<ColorEntry>,
    /// Chart settings for the rendering collaborator
    pub series: SeriesSettings,
}

impl RenderModel {
    /// Serialize for the rendering collaborator
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sankey::Fill;

    #[test]
    fn test_series_settings_fields() {
        let settings = SeriesSettings::new(0.55, 0.0);
        assert_eq!(settings.source_id_field, "from");
        assert_eq!(settings.target_id_field, "to");
        assert_eq!(settings.value_field, "value");
        assert_eq!(settings.padding_right, 150);
        assert_eq!(settings.node_align, "left");
        assert_eq!(settings.node_padding, 100);
        assert_eq!(settings.node_width, 10);
        assert_eq!(settings.fill_style, "source");
        assert_eq!(settings.control_point_distance, 0.0);
    }

    #[test]
    fn test_render_model_json_field_names() {
        let model = RenderModel {
            edges: vec![Edge {
                from: "X".to_string(),
                to: "Y".to_string(),
                value: 3.0,
            }],
            colors: vec![ColorEntry {
                id: "X".to_string(),
                fill: Fill::Text("#ABCDEF".to_string()),
            }],
            series: SeriesSettings::new(0.7, 0.2),
        };

        let json = model.to_json().unwrap();
        assert!(json.contains("\"from\": \"X\""));
        assert!(json.contains("\"to\": \"Y\""));
        assert!(json.contains("\"value\": 3.0"));
        assert!(json.contains("\"fill\": \"#ABCDEF\""));
        assert!(json.contains("\"sourceIdField\": \"from\""));
        assert!(json.contains("\"fillOpacity\": 0.7"));
        assert!(json.contains("\"linkTension\": 0.2"));
    }
}
