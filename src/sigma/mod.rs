//! Sigma host-plugin interface layer
//!
//! Everything host-facing lives here: the editor-panel property registry,
//! the request envelope, columnar data ingestion, and the render model
//! returned to the chart component.
//!
//! Structure:
//! - `properties.rs`: editor-panel schema (plugin.json) and typed reader
//! - `request.rs`: request envelope (config + data)
//! - `frame.rs`: columnar JSON to DataFrame ingestion
//! - `result.rs`: render model for the rendering collaborator
//! - `error.rs`: error types

pub mod error;
pub mod frame;
pub mod properties;
pub mod request;
pub mod result;

// Re-exports for convenience
pub use error::{PluginError, Result};
pub use frame::Frame;
pub use properties::{registry, PluginPropertyReader};
pub use request::PluginRequest;
pub use result::{RenderModel, SeriesSettings};
