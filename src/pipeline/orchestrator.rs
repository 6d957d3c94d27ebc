use crate::error::PipelineError;
use flyer_compose::{CatalogSnapshot, DocumentComposer};
use flyer_doctree::DocumentTree;
use flyer_traits::DocumentRenderer;
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

/// Composes catalog snapshots and hands the result to a renderer.
///
/// The pipeline holds only immutable state behind `Arc`s, so one instance can
/// serve any number of overlapping exports.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    composer: Arc<DocumentComposer>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl ExportPipeline {
    pub(super) fn new(composer: Arc<DocumentComposer>, renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { composer, renderer }
    }

    pub fn composer(&self) -> &DocumentComposer {
        &self.composer
    }

    pub fn renderer_name(&self) -> &'static str {
        self.renderer.name()
    }

    /// Builds the document tree without rendering it.
    pub fn compose(&self, snapshot: &CatalogSnapshot) -> DocumentTree {
        self.composer.compose_snapshot(snapshot)
    }

    /// Composes and renders `snapshot` on the calling thread.
    pub fn export_to_writer<W: Write>(
        &self,
        snapshot: &CatalogSnapshot,
        writer: W,
    ) -> Result<W, PipelineError> {
        run_export(&self.composer, self.renderer.as_ref(), snapshot, writer)
    }

    /// Composes and renders `snapshot` on the blocking thread pool.
    ///
    /// The snapshot is moved in, so later edits on the caller's side cannot
    /// leak into this export.
    pub async fn export<W>(&self, snapshot: CatalogSnapshot, writer: W) -> Result<W, PipelineError>
    where
        W: Write + Send + 'static,
    {
        let composer = Arc::clone(&self.composer);
        let renderer = Arc::clone(&self.renderer);
        task::spawn_blocking(move || run_export(&composer, renderer.as_ref(), &snapshot, writer)).await?
    }
}

/// The renderer writes into a scratch buffer first; `writer` only ever sees a
/// complete document.
fn run_export<W: Write>(
    composer: &DocumentComposer,
    renderer: &dyn DocumentRenderer,
    snapshot: &CatalogSnapshot,
    mut writer: W,
) -> Result<W, PipelineError> {
    let start = Instant::now();
    let tree = composer.compose_snapshot(snapshot);
    debug!(
        "Composed {} page(s) in {:?}; rendering with '{}'.",
        tree.page_count(),
        start.elapsed(),
        renderer.name()
    );

    let mut buffer = Vec::new();
    renderer.render(&tree, &mut buffer)?;
    writer.write_all(&buffer)?;
    writer.flush()?;

    info!(
        "Exported {} product(s) on {} page(s) ({} bytes) in {:?}.",
        snapshot.products.len(),
        tree.page_count(),
        buffer.len(),
        start.elapsed()
    );
    Ok(writer)
}
