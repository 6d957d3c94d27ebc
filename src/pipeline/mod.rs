//! Export pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder that validates page constants
//! - [`ExportPipeline`]: composes a snapshot and hands the tree to a renderer
//! - [`ExportConfig`]: JSON-loadable page, QR service and theme settings
//!
//! # Example
//!
//! ```ignore
//! use flyer::{CatalogSnapshot, PipelineBuilder};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_config_file("export.json")?
//!     .build()?;
//!
//! let snapshot = CatalogSnapshot::from_json(&editor_state)?;
//! let bytes = pipeline.export(snapshot, Vec::new()).await?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::ExportConfig;
pub use orchestrator::ExportPipeline;
