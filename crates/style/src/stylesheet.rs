//! The fixed presentation theme of a flyer.
//!
//! Every value here is a default that can be overridden from configuration;
//! the user-facing settings (primary color, image shape, footer background)
//! are applied on top by the composer.

use crate::font::FontWeight;
use crate::text::{TextAlign, TextDecoration, TextStyle};
use flyer_types::{Color, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub card: CardStyle,
    pub header: HeaderStyle,
    pub footer: FooterStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardStyle {
    pub background: Color,
    pub padding: f32,
    /// Share of the inner card height reserved for the product image.
    pub image_fraction: f32,
    pub image_spacing: f32,
    pub image_corner_radius: f32,
    pub title: TextStyle,
    pub title_spacing: f32,
    pub price_gap: f32,
    pub original_price: TextStyle,
    /// The color is replaced by the catalog's primary color.
    pub discount_price: TextStyle,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            padding: 10.0,
            image_fraction: 0.7,
            image_spacing: 8.0,
            image_corner_radius: 2.0,
            title: TextStyle { line_height: 1.4, ..TextStyle::sized(10.0) }.with_max_lines(2),
            title_spacing: 4.0,
            price_gap: 5.0,
            original_price: TextStyle::sized(10.0)
                .with_color(Color::gray(0x66))
                .with_decoration(TextDecoration::LineThrough),
            discount_price: TextStyle::sized(12.0).bold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderStyle {
    pub padding: f32,
    pub item_spacing: f32,
    pub logo_max: Size,
    pub title: TextStyle,
    pub subtitle: TextStyle,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            padding: 12.0,
            item_spacing: 6.0,
            logo_max: Size::new(200.0, 80.0),
            title: TextStyle::sized(28.0)
                .bold()
                .with_color(Color::rgb(0x1a, 0x36, 0x5d))
                .aligned(TextAlign::Center),
            subtitle: TextStyle::sized(16.0)
                .with_color(Color::rgb(0x4a, 0x55, 0x68))
                .aligned(TextAlign::Center),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterStyle {
    pub padding: f32,
    pub line_spacing: f32,
    pub contact: TextStyle,
    pub text: TextStyle,
    pub logo_max: Size,
}

impl Default for FooterStyle {
    fn default() -> Self {
        Self {
            padding: 12.0,
            line_spacing: 2.0,
            contact: TextStyle::sized(12.0).with_color(Color::WHITE),
            text: TextStyle {
                font_weight: FontWeight::Light,
                ..TextStyle::sized(10.0).with_color(Color::WHITE)
            },
            logo_max: Size::new(120.0, 48.0),
        }
    }
}
