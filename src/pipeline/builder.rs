use super::config::ExportConfig;
use super::orchestrator::ExportPipeline;
use crate::error::PipelineError;
use flyer_compose::{DocumentComposer, QrCodeService};
use flyer_layout::{LayoutPlanner, PageConfig};
use flyer_style::Theme;
use flyer_traits::{DocumentRenderer, JsonTreeRenderer};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating an [`ExportPipeline`].
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: ExportConfig,
    renderer: Option<Arc<dyn DocumentRenderer>>,
}

impl PipelineBuilder {
    /// Creates a builder with A4 page constants and the JSON tree renderer.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the whole configuration with one read from JSON.
    pub fn with_config_json(self, json: &str) -> Result<Self, PipelineError> {
        Ok(self.with_config(ExportConfig::from_json(json)?))
    }

    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read export config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_config_json(&source)
    }

    pub fn with_page_config(mut self, page: PageConfig) -> Self {
        self.config.page = page;
        self
    }

    pub fn with_qr_service(mut self, qr: QrCodeService) -> Self {
        self.config.qr = qr;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    /// Selects the backend the composed document is handed to.
    pub fn with_renderer<R: DocumentRenderer + 'static>(mut self, renderer: R) -> Self {
        let renderer: Arc<dyn DocumentRenderer> = Arc::new(renderer);
        self.renderer = Some(renderer);
        self
    }

    /// Validates the page constants and creates the pipeline.
    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        if self.config.qr.base_url.trim().is_empty() {
            return Err(PipelineError::Config(
                "The QR code service needs a base URL.".to_string(),
            ));
        }

        let planner = LayoutPlanner::new(self.config.page)?;
        let composer = DocumentComposer::new(planner)
            .with_theme(self.config.theme)
            .with_qr_service(self.config.qr);
        let renderer = self
            .renderer
            .unwrap_or_else(|| Arc::new(JsonTreeRenderer::new()));

        log::info!(
            "Built export pipeline for {:?} pages with the '{}' renderer.",
            self.config.page.page_size,
            renderer.name()
        );
        Ok(ExportPipeline::new(Arc::new(composer), renderer))
    }
}
