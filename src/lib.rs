//! Sankey Flow Plugin Library
//!
//! This library provides the core modules for the Sankey workbook plugin:
//! the transformation of columnar element data into a deduplicated weighted
//! edge list, and the node color table merging built-in defaults with user
//! overrides. Layout and drawing belong to the chart component consuming
//! the render model.
//!
//! Module organization:
//! - `sigma`: host-plugin interface layer (properties, request, frame, result)
//! - `sankey`: transformation core (edges, colors, adapters)
//! - `config`: plugin configuration resolved from editor-panel properties
//! - `pipeline`: shared recomputation pipeline

pub mod config;
pub mod pipeline;
pub mod sankey;
pub mod sigma;
