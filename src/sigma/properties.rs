//! Editor-panel property definitions with defaults from plugin.json
//!
//! This module parses plugin.json at compile time to extract the editor-panel
//! property descriptors and their default values. Defaults are defined in ONE
//! place (plugin.json) so no fallback values are scattered through the code.

use std::collections::HashMap;

/// Plugin.json embedded at compile time
const PLUGIN_JSON: &str = include_str!("../../plugin.json");

/// Property descriptor from the plugin.json editorPanel array
#[derive(Debug, Clone)]
pub struct PropertyDef {
    pub name: String,
    pub kind: PropertyKind,
    pub default_value: String,
    pub placeholder: String,
    pub description: String,
    /// Text properties only: whether the editor shows a multiline input
    pub multiline: bool,
    /// Column properties only: whether several columns may be selected
    pub allow_multiple: bool,
    /// Column properties only: the element property supplying the columns
    pub source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Reference to a workbook element
    Element,
    /// Column selection backed by an element property
    Column,
    /// Free-form text
    Text,
}

/// Registry of all editor-panel properties with their defaults from plugin.json
pub struct PropertyRegistry {
    properties: HashMap<String, PropertyDef>,
    /// Property names in editor-panel order
    panel_order: Vec<String>,
}

impl PropertyRegistry {
    /// Parse plugin.json and build the registry
    ///
    /// This is called once at startup. Panics if plugin.json is malformed
    /// (which should never happen since it's compile-time embedded).
    pub fn from_plugin_json() -> Self {
        let json: serde_json::Value =
            serde_json::from_str(PLUGIN_JSON).expect("plugin.json is invalid JSON");

        let panel_array = json["editorPanel"]
            .as_array()
            .expect("plugin.json missing 'editorPanel' array");

        let mut properties = HashMap::new();
        let mut panel_order = Vec::new();

        for prop in panel_array {
            let name = prop["name"]
                .as_str()
                .expect("property missing 'name'")
                .to_string();

            let kind_str = prop["kind"].as_str().expect("property missing 'kind'");
            let kind = match kind_str {
                "ElementProperty" => PropertyKind::Element,
                "ColumnProperty" => PropertyKind::Column,
                "TextProperty" => PropertyKind::Text,
                other => panic!("Unknown property kind: {}", other),
            };

            let default_value = prop["defaultValue"].as_str().unwrap_or("").to_string();
            let placeholder = prop["placeholder"].as_str().unwrap_or("").to_string();
            let description = prop["description"].as_str().unwrap_or("").to_string();
            let multiline = prop["multiline"].as_bool().unwrap_or(false);
            let allow_multiple = prop["allowMultiple"].as_bool().unwrap_or(false);
            let source = prop["source"].as_str().map(|s| s.to_string());

            panel_order.push(name.clone());
            properties.insert(
                name.clone(),
                PropertyDef {
                    name,
                    kind,
                    default_value,
                    placeholder,
                    description,
                    multiline,
                    allow_multiple,
                    source,
                },
            );
        }

        Self {
            properties,
            panel_order,
        }
    }

    /// Get the default value for a property
    pub fn get_default(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|p| p.default_value.as_str())
    }

    /// Get the property descriptor
    pub fn get_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.get(name)
    }

    /// Property descriptors in editor-panel order
    pub fn panel(&self) -> impl Iterator<Item = &PropertyDef> {
        self.panel_order
            .iter()
            .filter_map(move |name| self.properties.get(name))
    }
}

/// Global registry instance (initialized lazily)
static REGISTRY: std::sync::OnceLock<PropertyRegistry> = std::sync::OnceLock::new();

/// Get the global property registry
pub fn registry() -> &'static PropertyRegistry {
    REGISTRY.get_or_init(PropertyRegistry::from_plugin_json)
}

/// Typed reader over the host-supplied configuration values
///
/// Reads property values from the host config object, using defaults from
/// plugin.json. A user value wins when present and non-empty.
pub struct PluginPropertyReader {
    /// Values from the host (user-set)
    user_values: HashMap<String, serde_json::Value>,
}

impl PluginPropertyReader {
    /// Create from the host config object (may be None if nothing is set)
    pub fn new(config: Option<&serde_json::Map<String, serde_json::Value>>) -> Self {
        let user_values = config
            .map(|map| {
                map.iter()
                    // Empty string = not set (host convention)
                    .filter(|(_, v)| !matches!(v, serde_json::Value::String(s) if s.is_empty()))
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Self { user_values }
    }

    /// Get string property (user value or default from plugin.json)
    pub fn get_string(&self, name: &str) -> String {
        if let Some(serde_json::Value::String(value)) = self.user_values.get(name) {
            return value.clone();
        }

        registry().get_default(name).unwrap_or("").to_string()
    }

    /// Get optional string property (None if empty)
    pub fn get_optional_string(&self, name: &str) -> Option<String> {
        let value = self.get_string(name);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Get f64 property with validation
    ///
    /// Parses the trimmed string value as f64. If parsing fails, uses the
    /// default from plugin.json and logs a warning. No range validation is
    /// performed here; out-of-range values are the renderer's concern.
    pub fn get_f64(&self, name: &str) -> f64 {
        let value = self.get_string(name);
        let default_str = registry().get_default(name).unwrap_or("0");
        let default = default_str.parse::<f64>().unwrap_or(0.0);

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return default;
        }

        match trimmed.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                eprintln!(
                    "Invalid numeric value '{}' for property '{}'. Using default: {}",
                    trimmed, name, default
                );
                default
            }
        }
    }

    /// Get a multi-column selection as an ordered list of column names
    ///
    /// Missing or non-array values resolve to an empty list. Non-string and
    /// empty entries are skipped with a warning.
    pub fn get_column_list(&self, name: &str) -> Vec<String> {
        let Some(serde_json::Value::Array(items)) = self.user_values.get(name) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
                other => {
                    eprintln!(
                        "Skipping invalid entry {:?} in column selection '{}'",
                        other, name
                    );
                    None
                }
            })
            .collect()
    }
}
