//! Plugin configuration from editor-panel properties
//!
//! Configuration is resolved from the host-supplied config object. All
//! default values come from plugin.json - no hardcoded fallbacks in this
//! code. Property definitions and defaults are parsed from plugin.json at
//! compile time via the `PluginPropertyReader`, which keeps defaults in a
//! single place.

use crate::sigma::PluginPropertyReader;

#[derive(Debug, Clone)]
pub struct SankeyConfig {
    /// Workbook element supplying the columnar data
    pub source: Option<String>,

    /// Ordered stage columns; adjacent pairs form the diagram layers
    pub dimensions: Vec<String>,

    /// Weight columns, pairwise aligned with the dimension transitions
    pub measures: Vec<String>,

    /// Free-form per-node color overrides, one "name, color" pair per line
    pub custom: Option<String>,

    /// Link fill opacity (default from plugin.json: 0.55)
    pub opacity: f64,

    /// Link curve tension (default from plugin.json: 0)
    pub link_tension: f64,
}

impl SankeyConfig {
    /// Resolve the configuration from host properties
    ///
    /// All defaults come from plugin.json via PluginPropertyReader. The
    /// numeric parameters are passed through unclamped; range handling is
    /// the renderer's concern.
    pub fn from_properties(props: &PluginPropertyReader) -> Self {
        let source = props.get_optional_string("source");

        let dimensions = props.get_column_list("dimension");
        let measures = props.get_column_list("measures");

        // Override text is free-form; parsing happens in the color resolver
        let custom = props.get_optional_string("custom");

        let opacity = props.get_f64("opacity");
        let link_tension = props.get_f64("linkTension");

        Self {
            source,
            dimensions,
            measures,
            custom,
            opacity,
            link_tension,
        }
    }
}
