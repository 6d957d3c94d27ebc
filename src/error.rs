use flyer_layout::LayoutError;
use flyer_traits::RenderError;
use thiserror::Error;

/// Everything that can make an export fail.
///
/// An export is all-or-nothing: any of these aborts the whole attempt and no
/// partial document is handed back.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
