#![allow(dead_code)]

pub mod fixtures;

use flyer::{CatalogSnapshot, DocumentTree, PipelineBuilder, PipelineError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Exports `snapshot` through a default pipeline and parses the JSON tree back.
pub fn export_as_json(snapshot: &CatalogSnapshot) -> Result<Value, PipelineError> {
    let pipeline = PipelineBuilder::new().build()?;
    let bytes = pipeline.export_to_writer(snapshot, Vec::new())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Composes `snapshot` with the default A4 pipeline.
pub fn compose(snapshot: &CatalogSnapshot) -> Result<DocumentTree, PipelineError> {
    Ok(PipelineBuilder::new().build()?.compose(snapshot))
}
