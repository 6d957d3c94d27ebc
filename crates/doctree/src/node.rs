use flyer_style::{ImageShape, ObjectFit, TextStyle};
use flyer_types::{Color, ImageRef, Rect};
use serde::Serialize;

/// What a text node stands for. Renderers may ignore it; tests and tooling
/// use it to find nodes without relying on their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextRole {
    HeaderTitle,
    HeaderSubtitle,
    ProductTitle,
    OriginalPrice,
    DiscountPrice,
    Website,
    SocialHandles,
    Address,
    FooterText,
}

impl TextRole {
    /// Lines carrying the shop's contact channels.
    pub fn is_contact(&self) -> bool {
        matches!(self, TextRole::Website | TextRole::SocialHandles | TextRole::Address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRole {
    HeaderLogo,
    ProductImage,
    FooterLogo,
    QrCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRole {
    FooterBackground,
    CardBackground,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillNode {
    pub role: FillRole,
    pub rect: Rect,
    pub color: Color,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub role: TextRole,
    pub rect: Rect,
    pub content: String,
    pub style: TextStyle,
}

/// An image clipped to `rect` with rounded corners of `corner_radius`.
///
/// `src` is handed to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub role: ImageRole,
    pub rect: Rect,
    pub src: ImageRef,
    pub shape: ImageShape,
    pub fit: ObjectFit,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Fill(FillNode),
    Text(TextNode),
    Image(ImageNode),
}

impl Node {
    pub fn rect(&self) -> Rect {
        match self {
            Node::Fill(fill) => fill.rect,
            Node::Text(text) => text.rect,
            Node::Image(image) => image.rect,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageNode> {
        match self {
            Node::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_fill(&self) -> Option<&FillNode> {
        match self {
            Node::Fill(fill) => Some(fill),
            _ => None,
        }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Fill(_) => "fill",
            Node::Text(_) => "text",
            Node::Image(_) => "image",
        }
    }
}
