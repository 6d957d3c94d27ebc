//! Document Tree
//!
//! The in-memory representation of a composed flyer: pages made of a header
//! band, a content grid and a footer band, each holding absolutely positioned
//! nodes. All coordinates are PDF points with the origin at the top-left
//! corner of the page. The tree is a plain value; renderers only read it.

mod node;
mod page;

pub use node::{FillNode, FillRole, ImageNode, ImageRole, Node, TextNode, TextRole};
pub use page::{Card, ContentRegion, GridCell, Page, Region, RegionKind};

use flyer_types::Size;
use serde::Serialize;

/// The complete output of one composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTree {
    pub page_size: Size,
    pub pages: Vec<Page>,
}

impl DocumentTree {
    pub fn new(page_size: Size, pages: Vec<Page>) -> Self {
        Self { page_size, pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All cards in reading order across every page.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.pages.iter().flat_map(|page| page.content.cards())
    }

    /// Every positioned node of the document, page by page, header first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.pages.iter().flat_map(|page| page.nodes())
    }
}
