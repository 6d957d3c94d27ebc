//! How images are cropped and scaled into their boxes.
use flyer_types::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageShape {
    #[default]
    Square,
    #[serde(alias = "circular")]
    Circle,
}

impl ImageShape {
    /// The rect the image is clipped to inside `frame`.
    ///
    /// A circle needs equal sides, so it takes the largest centred square.
    pub fn mask_rect(&self, frame: Rect) -> Rect {
        match self {
            ImageShape::Square => frame,
            ImageShape::Circle => {
                let side = frame.width.min(frame.height);
                Rect {
                    x: frame.x + (frame.width - side) / 2.0,
                    y: frame.y + (frame.height - side) / 2.0,
                    width: side,
                    height: side,
                }
            }
        }
    }

    /// Corner radius for the clip path of `mask`.
    pub fn corner_radius(&self, mask: Rect, square_radius: f32) -> f32 {
        match self {
            ImageShape::Square => square_radius.min(mask.width.min(mask.height) / 2.0),
            ImageShape::Circle => mask.width.min(mask.height) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale to fill the mask, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the mask, letterboxing.
    Contain,
}
