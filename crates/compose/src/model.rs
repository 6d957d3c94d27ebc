//! The editor's state as the composer sees it: a frozen list of products and
//! the presentation settings of one flyer.
//!
//! Blank strings coming from the editor are normalised to "absent" on input,
//! so the composer only has to ask whether an optional field is present.

use flyer_layout::{GridColumns, LayoutOption};
use flyer_style::ImageShape;
use flyer_types::{Color, ImageRef};
use serde::{Deserialize, Deserializer, Serialize};

/// Red used by the editor for both the footer band and the discount price.
pub const DEFAULT_ACCENT: Color = Color::rgb(0xFF, 0x3B, 0x30);

fn default_accent() -> Color {
    DEFAULT_ACCENT
}

fn blank_image_as_none<'de, D>(deserializer: D) -> Result<Option<ImageRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ImageRef::non_empty))
}

/// Returns the trimmed value when it holds something to show.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Position-derived identity; carries no meaning beyond list order.
    #[serde(default)]
    pub id: usize,
    #[serde(default, deserialize_with = "blank_image_as_none")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_price: String,
    #[serde(default)]
    pub discount_price: String,
}

impl Product {
    pub fn blank(id: usize) -> Self {
        Self { id, ..Default::default() }
    }

    pub fn new(
        id: usize,
        title: impl Into<String>,
        original_price: impl Into<String>,
        discount_price: impl Into<String>,
    ) -> Self {
        Self {
            id,
            image: None,
            title: title.into(),
            original_price: original_price.into(),
            discount_price: discount_price.into(),
        }
    }

    pub fn with_image(mut self, image: impl Into<ImageRef>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSettings {
    #[serde(deserialize_with = "blank_image_as_none")]
    pub logo: Option<ImageRef>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSettings {
    pub background_color: Color,
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub tiktok: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    /// Link encoded into the scannable code.
    pub qr_code_link: Option<String>,
    /// Free-form disclaimer line.
    pub text: Option<String>,
    #[serde(deserialize_with = "blank_image_as_none")]
    pub logo: Option<ImageRef>,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_ACCENT,
            whatsapp: None,
            instagram: None,
            facebook: None,
            tiktok: None,
            website: None,
            address: None,
            qr_code_link: None,
            text: None,
            logo: None,
        }
    }
}

impl FooterSettings {
    /// `(label, handle)` of every social channel, in display order.
    pub fn social_handles(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("WhatsApp", present(&self.whatsapp)),
            ("Instagram", present(&self.instagram)),
            ("Facebook", present(&self.facebook)),
            ("TikTok", present(&self.tiktok)),
        ]
    }
}

/// How the grid of a flyer is chosen.
///
/// On the wire the two shapes are told apart by their key: `layout` for a
/// named layout, `gridColumns` for the simple column picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutMode {
    NamedLayout {
        layout: LayoutOption,
    },
    GridColumns {
        #[serde(rename = "gridColumns")]
        columns: GridColumns,
    },
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::NamedLayout {
            layout: LayoutOption::Grid4x3,
        }
    }
}

impl LayoutMode {
    pub fn layout(&self) -> LayoutOption {
        match self {
            LayoutMode::NamedLayout { layout } => *layout,
            LayoutMode::GridColumns { columns } => columns.layout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSettings {
    #[serde(default)]
    pub header: HeaderSettings,
    #[serde(default)]
    pub footer: FooterSettings,
    #[serde(flatten)]
    pub mode: LayoutMode,
    #[serde(default = "default_accent")]
    pub primary_color: Color,
    #[serde(default)]
    pub image_shape: ImageShape,
    /// Prefix printed before each price, e.g. `R$`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            header: HeaderSettings::default(),
            footer: FooterSettings::default(),
            mode: LayoutMode::default(),
            primary_color: DEFAULT_ACCENT,
            image_shape: ImageShape::Square,
            currency_symbol: None,
        }
    }
}

impl CatalogSettings {
    pub fn layout(&self) -> LayoutOption {
        self.mode.layout()
    }

    /// Formats a price for display, applying the currency prefix if any.
    /// The price itself is an opaque string and is never altered.
    pub fn format_price(&self, price: &str) -> String {
        match present(&self.currency_symbol) {
            Some(symbol) => format!("{} {}", symbol, price),
            None => price.to_string(),
        }
    }
}

/// The immutable input of one export.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub settings: CatalogSettings,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, settings: CatalogSettings) -> Self {
        Self { products, settings }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
