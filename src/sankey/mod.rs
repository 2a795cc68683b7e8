//! Sankey transformation core
//!
//! Pure, synchronous functions turning the selected columns into the data
//! the chart component consumes:
//! - `edges.rs`: columnar selection -> deduplicated weighted edge list
//! - `colors.rs`: built-in defaults + override text -> node color table
//! - `adapters.rs`: fill/tooltip/label lookups over the two results

pub mod adapters;
pub mod colors;
pub mod edges;

pub use colors::{parse_hex_color, resolve_colors, ColorEntry, Fill, DEFAULT_COLORS};
pub use edges::{aggregate_edges, Edge};
