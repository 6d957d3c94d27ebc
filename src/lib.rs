//! Flyer: layout and document-composition engine for product flyers.
//!
//! A catalog snapshot (products plus presentation settings) is planned onto
//! fixed-size pages, composed into a renderer-agnostic [`DocumentTree`] and
//! handed to a [`DocumentRenderer`].
//!
//! The work is split across the workspace crates:
//!
//! - `flyer-types`, `flyer-style`: colours, geometry, text and theme values
//! - `flyer-layout`: grid geometry and pagination
//! - `flyer-doctree`: the composed document
//! - `flyer-compose`: inclusion rules and the document composer
//! - `flyer-traits`: the renderer seam
//!
//! This crate ties them together in an export [`pipeline`].

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{ExportConfig, ExportPipeline, PipelineBuilder};

pub use flyer_compose::{
    blank_products, reconcile_products, CatalogSettings, CatalogSnapshot, DocumentComposer,
    FooterSettings, HeaderSettings, LayoutMode, Product, QrCodeService,
};
pub use flyer_doctree::{Card, DocumentTree, Node, Page, Region};
pub use flyer_layout::{GridColumns, LayoutError, LayoutOption, LayoutPlanner, PageConfig};
pub use flyer_style::{ImageShape, PageSize, Theme};
pub use flyer_traits::{DocumentRenderer, JsonTreeRenderer, RenderError};
pub use flyer_types::{Color, ImageRef};
