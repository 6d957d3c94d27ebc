//! DocumentRenderer trait for abstracting the page-description backend.
//!
//! The composer only builds a [`DocumentTree`]; turning it into bytes of a
//! concrete format (PDF, images, a debug dump) is the renderer's job.

use flyer_doctree::DocumentTree;
use log::debug;
use std::fmt::Debug;
use std::io::Write;
use thiserror::Error;

/// Error type for rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image '{src}' could not be used: {message}")]
    UnusableImage { src: String, message: String },

    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

/// A backend that serializes a composed document.
///
/// Implementations must treat the tree as read-only and either write the
/// whole document or fail; the pipeline discards the writer on error.
pub trait DocumentRenderer: Send + Sync + Debug {
    /// Writes `tree` to `writer`.
    fn render(&self, tree: &DocumentTree, writer: &mut dyn Write) -> Result<(), RenderError>;

    /// Returns a human-readable name for this renderer (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Writes the tree as JSON. Useful for debugging layouts and as a hand-off
/// format for renderers living outside this process.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeRenderer {
    pretty: bool,
}

impl JsonTreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentRenderer for JsonTreeRenderer {
    fn render(&self, tree: &DocumentTree, writer: &mut dyn Write) -> Result<(), RenderError> {
        debug!("Serializing document tree with {} page(s) as JSON.", tree.page_count());
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, tree)?;
        } else {
            serde_json::to_writer(&mut *writer, tree)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json-tree"
    }
}
