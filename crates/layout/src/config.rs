use crate::LayoutError;
use flyer_style::PageSize;
use serde::{Deserialize, Serialize};

/// Fixed page constants the planner works against.
///
/// The header and footer bands take fixed fractions of the page height; the
/// remaining content band is padded on every side and cards are separated by
/// `gap`. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub page_size: PageSize,
    /// Defaults to `0.15`.
    pub header_fraction: f32,
    /// Defaults to `0.10`.
    pub footer_fraction: f32,
    /// Defaults to `12.0`.
    pub content_padding: f32,
    /// Space between neighbouring cards. Defaults to `8.0`.
    pub gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            header_fraction: 0.15,
            footer_fraction: 0.10,
            content_padding: 12.0,
            gap: 8.0,
        }
    }
}

impl PageConfig {
    pub fn page_width(&self) -> f32 {
        self.page_size.width()
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.height()
    }

    pub fn header_height(&self) -> f32 {
        self.page_height() * self.header_fraction
    }

    pub fn footer_height(&self) -> f32 {
        self.page_height() * self.footer_fraction
    }

    pub fn content_height(&self) -> f32 {
        self.page_height() * (1.0 - self.header_fraction - self.footer_fraction)
    }

    /// Checks the constants that do not depend on the chosen layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size.dimensions_pt();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidPageConfig(format!(
                "page size must be positive, got {} x {}",
                width, height
            )));
        }
        for (name, fraction) in [
            ("headerFraction", self.header_fraction),
            ("footerFraction", self.footer_fraction),
        ] {
            if !(0.0..1.0).contains(&fraction) {
                return Err(LayoutError::InvalidPageConfig(format!(
                    "{} must be in [0, 1), got {}",
                    name, fraction
                )));
            }
        }
        if self.header_fraction + self.footer_fraction >= 1.0 {
            return Err(LayoutError::InvalidPageConfig(format!(
                "header and footer leave no content band ({} + {} >= 1)",
                self.header_fraction, self.footer_fraction
            )));
        }
        if !(self.content_padding >= 0.0 && self.gap >= 0.0) {
            return Err(LayoutError::InvalidPageConfig(format!(
                "padding and gap must be non-negative, got {} and {}",
                self.content_padding, self.gap
            )));
        }
        Ok(())
    }
}
