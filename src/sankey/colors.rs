//! Node color resolution
//!
//! Builds the node-id to fill-value table the renderer consults: built-in
//! defaults overlaid with the user's free-form override text, one
//! `name, color` pair per line. Identifier matching is case-insensitive on
//! trimmed names; the policy is applied uniformly here and in the adapter
//! lookups.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A node fill value
///
/// Built-in defaults carry packed 0xRRGGBB values; user overrides carry the
/// raw text the user typed (usually a hex color). An empty or unparsable
/// text fill means "fall back to the series default" at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    Packed(u32),
    Text(String),
}

impl Fill {
    /// Resolve to RGB bytes, or None when the renderer should keep its
    /// default fill
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        match self {
            Fill::Packed(packed) => Some([
                ((packed >> 16) & 0xFF) as u8,
                ((packed >> 8) & 0xFF) as u8,
                (packed & 0xFF) as u8,
            ]),
            Fill::Text(text) => parse_hex_color(text),
        }
    }
}

/// One entry of the color table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub id: String,
    pub fill: Fill,
}

impl ColorEntry {
    fn packed(id: &str, fill: u32) -> Self {
        ColorEntry {
            id: id.to_string(),
            fill: Fill::Packed(fill),
        }
    }
}

/// Built-in node colors, never mutated; the resolver merges into a copy
pub static DEFAULT_COLORS: Lazy<Vec<ColorEntry>> = Lazy::new(|| {
    vec![
        ColorEntry::packed("opp created", 0xD8D4D5),
        ColorEntry::packed("stage 2", 0xC89933),
        ColorEntry::packed("stage 2, trial", 0xC89933),
        ColorEntry::packed("no Stage 2", 0xDB6C79),
        ColorEntry::packed("no Stage 2, no trial", 0xDB6C79),
        ColorEntry::packed("won, astro deployed", 0x1B9D51),
    ]
});

/// Merge user override text into a copy of the default color table
///
/// Each non-empty line splits on its first comma into a name and a color,
/// both trimmed. A blank name skips the line. A matching entry (first
/// case-insensitive trimmed match) has its fill replaced in place; an
/// unseen name appends a new entry. Lines without a comma or with an empty
/// color yield an empty-string fill, which the renderer treats as "use the
/// series default".
///
/// Output order: defaults in their original positions, then new entries in
/// the order they appeared in the override text.
pub fn resolve_colors(defaults: &[ColorEntry], override_text: Option<&str>) -> Vec<ColorEntry> {
    let mut table = defaults.to_vec();

    let Some(text) = override_text else {
        return table;
    };

    for line in text.lines() {
        let (raw_name, raw_color) = match line.split_once(',') {
            Some((name, color)) => (name, color),
            None => (line, ""),
        };

        let name = raw_name.trim();
        if name.is_empty() {
            continue;
        }
        let color = raw_color.trim();

        match find_entry_mut(&mut table, name) {
            Some(entry) => entry.fill = Fill::Text(color.to_string()),
            None => table.push(ColorEntry {
                id: name.to_string(),
                fill: Fill::Text(color.to_string()),
            }),
        }
    }

    table
}

fn find_entry_mut<'a>(table: &'a mut [ColorEntry], name: &str) -> Option<&'a mut ColorEntry> {
    let needle = name.to_lowercase();
    table
        .iter_mut()
        .find(|entry| entry.id.trim().to_lowercase() == needle)
}

/// Parse a hex color string to RGB bytes
///
/// Supports `#RRGGBB`, `#RRGGBBAA`, and both without the leading `#`
/// (alpha ignored). Anything else is None.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim().trim_start_matches('#');

    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_default_in_place() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("stage 2, #000000"));

        assert_eq!(table.len(), DEFAULT_COLORS.len());
        let entry = &table[1];
        assert_eq!(entry.id, "stage 2");
        assert_eq!(entry.fill, Fill::Text("#000000".to_string()));
        // Neighbors keep their defaults and positions
        assert_eq!(table[0], DEFAULT_COLORS[0]);
        assert_eq!(table[2], DEFAULT_COLORS[2]);
    }

    #[test]
    fn test_override_match_is_case_insensitive() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("STAGE 2, #000000"));

        assert_eq!(table.len(), DEFAULT_COLORS.len());
        assert_eq!(table[1].fill, Fill::Text("#000000".to_string()));
        // The default id spelling is preserved on replacement
        assert_eq!(table[1].id, "stage 2");
    }

    #[test]
    fn test_unseen_name_appends() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("brand new node, #ABCDEF"));

        assert_eq!(table.len(), DEFAULT_COLORS.len() + 1);
        assert_eq!(table[..DEFAULT_COLORS.len()], DEFAULT_COLORS[..]);
        assert_eq!(
            table[DEFAULT_COLORS.len()],
            ColorEntry {
                id: "brand new node".to_string(),
                fill: Fill::Text("#ABCDEF".to_string()),
            }
        );
    }

    #[test]
    fn test_blank_lines_tolerated() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("\n\n , #fff\n"));
        assert_eq!(table[..], DEFAULT_COLORS[..]);
    }

    #[test]
    fn test_no_override_text_copies_defaults() {
        let table = resolve_colors(&DEFAULT_COLORS, None);
        assert_eq!(table[..], DEFAULT_COLORS[..]);
    }

    #[test]
    fn test_missing_comma_yields_empty_fill() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("lonely node"));

        let entry = table.last().unwrap();
        assert_eq!(entry.id, "lonely node");
        assert_eq!(entry.fill, Fill::Text(String::new()));
        assert_eq!(entry.fill.to_rgb(), None);
    }

    #[test]
    fn test_split_on_first_comma_only() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("stage 2, trial, #fff"));

        // The first comma bounds the name; the rest is the (invalid) color
        assert_eq!(table[1].id, "stage 2");
        assert_eq!(table[1].fill, Fill::Text("trial, #fff".to_string()));
    }

    #[test]
    fn test_new_entries_keep_override_order() {
        let table = resolve_colors(&DEFAULT_COLORS, Some("first, #111111\nsecond, #222222"));

        let appended: Vec<&str> = table[DEFAULT_COLORS.len()..]
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(appended, ["first", "second"]);
    }

    #[test]
    fn test_defaults_are_not_mutated() {
        let before = DEFAULT_COLORS.clone();
        let _ = resolve_colors(&DEFAULT_COLORS, Some("stage 2, #000000"));
        assert_eq!(before[..], DEFAULT_COLORS[..]);
    }

    #[test]
    fn test_packed_fill_to_rgb() {
        assert_eq!(Fill::Packed(0xD8D4D5).to_rgb(), Some([0xD8, 0xD4, 0xD5]));
        assert_eq!(Fill::Packed(0x1B9D51).to_rgb(), Some([0x1B, 0x9D, 0x51]));
    }

    #[test]
    fn test_text_fill_to_rgb() {
        assert_eq!(
            Fill::Text("#C89933".to_string()).to_rgb(),
            Some([0xC8, 0x99, 0x33])
        );
        assert_eq!(Fill::Text(String::new()).to_rgb(), None);
        assert_eq!(Fill::Text("not a color".to_string()).to_rgb(), None);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("FF0000"), Some([255, 0, 0]));
        assert_eq!(parse_hex_color("#440154FF"), Some([68, 1, 84]));
        assert_eq!(parse_hex_color(" #1B9D51 "), Some([27, 157, 81]));

        assert_eq!(parse_hex_color("#FFF"), None); // Too short
        assert_eq!(parse_hex_color("GGGGGG"), None); // Invalid hex
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_default_table_contents() {
        assert_eq!(DEFAULT_COLORS.len(), 6);
        assert_eq!(DEFAULT_COLORS[0].id, "opp created");
        assert_eq!(DEFAULT_COLORS[0].fill, Fill::Packed(0xD8D4D5));
        assert_eq!(DEFAULT_COLORS[5].id, "won, astro deployed");
        assert_eq!(DEFAULT_COLORS[5].fill, Fill::Packed(0x1B9D51));
    }
}
