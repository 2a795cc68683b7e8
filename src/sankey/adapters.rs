//! Renderer adapter lookups
//!
//! The renderer asks three questions per node or link: what fill to use,
//! what tooltip to show, and what label to draw. Each answer is a pure
//! lookup over the resolved color table and the aggregated edge list, so
//! the functions here take those as arguments instead of capturing any
//! rendering object's state.

use super::colors::ColorEntry;
use super::edges::Edge;

/// Find the first color entry matching an id (case-insensitive, trimmed)
pub fn find_color<'a>(table: &'a [ColorEntry], id: &str) -> Option<&'a ColorEntry> {
    let needle = id.trim().to_lowercase();
    table
        .iter()
        .find(|entry| entry.id.trim().to_lowercase() == needle)
}

/// Fill for a node rectangle
///
/// None means the table has no usable fill for this id and the renderer
/// keeps its series default.
pub fn node_fill(table: &[ColorEntry], node_id: &str) -> Option<[u8; 3]> {
    find_color(table, node_id).and_then(|entry| entry.fill.to_rgb())
}

/// Fill for a link, keyed by its source node (fillStyle: "source")
pub fn link_fill(table: &[ColorEntry], from_id: &str) -> Option<[u8; 3]> {
    node_fill(table, from_id)
}

/// Incoming and outgoing flow sums for one node
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTotals {
    pub incoming: f64,
    pub outgoing: f64,
    pub has_incoming: bool,
    pub has_outgoing: bool,
}

/// Sum the flows touching a node
pub fn node_totals(edges: &[Edge], node_id: &str) -> NodeTotals {
    let mut totals = NodeTotals::default();

    for edge in edges {
        if edge.to == node_id {
            totals.incoming += edge.value;
            totals.has_incoming = true;
        }
        if edge.from == node_id {
            totals.outgoing += edge.value;
            totals.has_outgoing = true;
        }
    }

    totals
}

/// Tooltip for a node: one line per incoming link
///
/// Source-only nodes get an empty tooltip.
pub fn tooltip_text(edges: &[Edge], node_id: &str) -> String {
    let mut tooltip = String::new();

    for edge in edges.iter().filter(|e| e.to == node_id) {
        tooltip.push_str(&format!("{} - {}\n", edge.from, format_value(edge.value)));
    }

    tooltip
}

/// Label for a node: its name and total flow
///
/// Nodes with incoming links show the incoming sum (root nodes count
/// differently than their children); source-only nodes show the outgoing
/// sum. Ids absent from the edge list get no label.
pub fn node_label(edges: &[Edge], node_id: &str) -> Option<String> {
    let totals = node_totals(edges, node_id);

    if totals.has_incoming {
        Some(format!("{}: {}", node_id, format_value(totals.incoming)))
    } else if totals.has_outgoing {
        Some(format!("{}: {}", node_id, format_value(totals.outgoing)))
    } else {
        None
    }
}

/// Format a flow value for display, without a trailing fraction on whole
/// numbers
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sankey::colors::{resolve_colors, Fill, DEFAULT_COLORS};

    fn edge(from: &str, to: &str, value: f64) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
            value,
        }
    }

    fn sample_edges() -> Vec<Edge> {
        vec![
            edge("X", "Y", 3.0),
            edge("X", "Z", 2.0),
            edge("Y", "Z", 5.0),
        ]
    }

    #[test]
    fn test_find_color_case_insensitive() {
        let entry = find_color(&DEFAULT_COLORS, "Opp Created").unwrap();
        assert_eq!(entry.id, "opp created");
        assert!(find_color(&DEFAULT_COLORS, "unknown node").is_none());
    }

    #[test]
    fn test_node_fill_from_defaults() {
        assert_eq!(
            node_fill(&DEFAULT_COLORS, "stage 2"),
            Some([0xC8, 0x99, 0x33])
        );
        assert_eq!(node_fill(&DEFAULT_COLORS, "unknown node"), None);
    }

    #[test]
    fn test_node_fill_from_override() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("My Node, #102030"));
        assert_eq!(node_fill(&table, "my node"), Some([0x10, 0x20, 0x30]));
    }

    #[test]
    fn test_empty_fill_falls_back() {
        let table = vec![ColorEntry {
            id: "pending".to_string(),
            fill: Fill::Text(String::new()),
        }];
        // An entry exists but its fill is unusable: keep the series default
        assert!(find_color(&table, "pending").is_some());
        assert_eq!(node_fill(&table, "pending"), None);
    }

    #[test]
    fn test_link_fill_uses_source_id() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("X, #445566"));
        assert_eq!(link_fill(&table, "X"), Some([0x44, 0x55, 0x66]));
    }

    #[test]
    fn test_node_totals() {
        let edges = sample_edges();

        let z = node_totals(&edges, "Z");
        assert!(z.has_incoming);
        assert!(!z.has_outgoing);
        assert_eq!(z.incoming, 7.0);

        let y = node_totals(&edges, "Y");
        assert_eq!(y.incoming, 3.0);
        assert_eq!(y.outgoing, 5.0);

        let absent = node_totals(&edges, "W");
        assert!(!absent.has_incoming && !absent.has_outgoing);
    }

    #[test]
    fn test_tooltip_lists_incoming_links() {
        let edges = sample_edges();
        assert_eq!(tooltip_text(&edges, "Z"), "X - 2\nY - 5\n");
        assert_eq!(tooltip_text(&edges, "X"), "");
    }

    #[test]
    fn test_node_label_prefers_incoming() {
        let edges = sample_edges();
        assert_eq!(node_label(&edges, "X").unwrap(), "X: 5");
        assert_eq!(node_label(&edges, "Y").unwrap(), "Y: 3");
        assert_eq!(node_label(&edges, "Z").unwrap(), "Z: 7");
        assert_eq!(node_label(&edges, "W"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-4.0), "-4");
    }
}
