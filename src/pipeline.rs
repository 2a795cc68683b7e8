//! Shared recomputation pipeline
//!
//! Turns one (configuration, columnar data) pair into the render model the
//! chart component consumes. The host re-runs this on every config or data
//! change; the pipeline is stateless, so a stale result is simply discarded
//! in favor of the newest one.
//!
//! The pipeline:
//! 1. Aggregates the dimension/measure selection into the edge list
//! 2. Resolves the node color table (defaults + override text)
//! 3. Assembles the series settings for the renderer

use crate::config::SankeyConfig;
use crate::sankey::{aggregate_edges, resolve_colors, DEFAULT_COLORS};
use crate::sigma::error::Result;
use crate::sigma::{Frame, RenderModel, SeriesSettings};

/// Build the render model for one recomputation
///
/// Structural problems (missing or misaligned columns, unpaired measures,
/// non-numeric weights) abort the whole computation rather than producing a
/// partially-populated edge list. Malformed override lines are tolerated
/// inside the color resolver and never surface here.
pub fn build_flow(config: &SankeyConfig, frame: &Frame) -> Result<RenderModel> {
    let edges = aggregate_edges(&config.dimensions, &config.measures, frame)?;

    let colors = resolve_colors(&DEFAULT_COLORS, config.custom.as_deref());

    let series = SeriesSettings::new(config.opacity, config.link_tension);

    Ok(RenderModel {
        edges,
        colors,
        series,
    })
}
