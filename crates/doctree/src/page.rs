use crate::node::{FillRole, ImageNode, ImageRole, Node, TextNode, TextRole};
use flyer_types::Rect;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionKind {
    Header,
    Footer,
}

/// A band of the page (header or footer) with its nodes.
///
/// A region without nodes is a placeholder: its rect is still reserved so the
/// page geometry does not depend on which optional fields were filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub kind: RegionKind,
    pub rect: Rect,
    pub nodes: Vec<Node>,
}

impl Region {
    pub fn new(kind: RegionKind, rect: Rect, nodes: Vec<Node>) -> Self {
        Self { kind, rect, nodes }
    }

    pub fn placeholder(kind: RegionKind, rect: Rect) -> Self {
        Self::new(kind, rect, Vec::new())
    }

    pub fn is_placeholder(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNode> {
        self.nodes.iter().filter_map(Node::as_text)
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageNode> {
        self.nodes.iter().filter_map(Node::as_image)
    }

    pub fn text(&self, role: TextRole) -> Option<&TextNode> {
        self.texts().find(|t| t.role == role)
    }

    pub fn image(&self, role: ImageRole) -> Option<&ImageNode> {
        self.images().find(|i| i.role == role)
    }

    pub fn has_fill(&self, role: FillRole) -> bool {
        self.nodes
            .iter()
            .filter_map(Node::as_fill)
            .any(|fill| fill.role == role)
    }
}

/// The composed presentation of one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub product_id: usize,
    pub rect: Rect,
    pub nodes: Vec<Node>,
}

impl Card {
    pub fn text(&self, role: TextRole) -> Option<&TextNode> {
        self.nodes.iter().filter_map(Node::as_text).find(|t| t.role == role)
    }

    pub fn image(&self) -> Option<&ImageNode> {
        self.nodes.iter().filter_map(Node::as_image).next()
    }

    pub fn title(&self) -> Option<&TextNode> {
        self.text(TextRole::ProductTitle)
    }

    pub fn original_price(&self) -> Option<&TextNode> {
        self.text(TextRole::OriginalPrice)
    }

    pub fn discount_price(&self) -> Option<&TextNode> {
        self.text(TextRole::DiscountPrice)
    }
}

/// One slot of the content grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub slot: usize,
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
    pub card: Option<Card>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRegion {
    pub rect: Rect,
    pub columns: usize,
    pub rows: usize,
    /// `columns * rows` cells in row-major order.
    pub cells: Vec<GridCell>,
}

impl ContentRegion {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cells.iter().filter_map(|cell| cell.card.as_ref())
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub header: Region,
    pub content: ContentRegion,
    pub footer: Region,
}

impl Page {
    pub fn product_ids(&self) -> Vec<usize> {
        self.content.cards().map(|card| card.product_id).collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.header
            .nodes
            .iter()
            .chain(self.content.cards().flat_map(|card| card.nodes.iter()))
            .chain(self.footer.nodes.iter())
    }
}
