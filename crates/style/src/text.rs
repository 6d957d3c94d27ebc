use crate::font::FontWeight;
use flyer_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// Resolved style of a single text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_size: f32,
    /// Multiplier applied to `font_size` to get the height of one line.
    pub line_height: f32,
    /// Lines reserved for this run; longer text is clipped by the renderer.
    pub max_lines: u8,
    pub font_weight: FontWeight,
    pub color: Color,
    pub text_align: TextAlign,
    pub text_decoration: TextDecoration,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            line_height: 1.2,
            max_lines: 1,
            font_weight: FontWeight::Regular,
            color: Color::BLACK,
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f32) -> Self {
        Self { font_size, ..Default::default() }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = decoration;
        self
    }

    pub fn with_max_lines(mut self, lines: u8) -> Self {
        self.max_lines = lines.max(1);
        self
    }

    /// Same style with the font size multiplied by `factor`.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.font_size *= factor.max(0.0);
        self
    }

    /// Height reserved for this run in points.
    pub fn block_height(&self) -> f32 {
        self.font_size * self.line_height * f32::from(self.max_lines.max(1))
    }

    /// Rough single-line advance of `content`, assuming an average glyph
    /// width of `AVERAGE_ADVANCE` em. Only used to split rows between runs.
    pub fn estimated_width(&self, content: &str) -> f32 {
        const AVERAGE_ADVANCE: f32 = 0.55;
        content.chars().count() as f32 * self.font_size * AVERAGE_ADVANCE
    }
}
