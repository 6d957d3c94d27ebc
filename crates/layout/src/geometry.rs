use crate::config::PageConfig;
use crate::option::LayoutOption;
use flyer_types::{Rect, Size};
use serde::Serialize;

/// Concrete page and card dimensions for one layout option.
///
/// ```text
/// card_width  = (W - 2p - (cols - 1) g) / cols
/// card_height = (H (1 - hf - ff) - 2p - (rows - 1) g) / rows
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub option: LayoutOption,
    pub page: Size,
    pub header_height: f32,
    pub footer_height: f32,
    pub content_height: f32,
    pub padding: f32,
    pub gap: f32,
    pub card: Size,
}

impl PageGeometry {
    pub fn compute(option: LayoutOption, config: &PageConfig) -> Self {
        let columns = option.columns();
        let rows = option.rows();
        debug_assert!(columns >= 1 && rows >= 1);

        let page = Size::new(config.page_width(), config.page_height());
        let content_height = config.content_height();
        let padding = config.content_padding;
        let gap = config.gap;

        let card_width = (page.width - 2.0 * padding - (columns - 1) as f32 * gap) / columns as f32;
        let card_height = (content_height - 2.0 * padding - (rows - 1) as f32 * gap) / rows as f32;

        Self {
            option,
            page,
            header_height: config.header_height(),
            footer_height: config.footer_height(),
            content_height,
            padding,
            gap,
            card: Size::new(card_width, card_height),
        }
    }

    pub fn columns(&self) -> usize {
        self.option.columns()
    }

    pub fn rows(&self) -> usize {
        self.option.rows()
    }

    pub fn capacity(&self) -> usize {
        self.option.capacity()
    }

    pub fn header_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page.width, self.header_height)
    }

    pub fn content_rect(&self) -> Rect {
        Rect::new(0.0, self.header_height, self.page.width, self.content_height)
    }

    pub fn footer_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.page.height - self.footer_height,
            self.page.width,
            self.footer_height,
        )
    }

    /// `(row, column)` of a grid slot in row-major order.
    pub fn cell_position(&self, slot: usize) -> (usize, usize) {
        (slot / self.columns(), slot % self.columns())
    }

    pub fn cell_rect(&self, slot: usize) -> Rect {
        let (row, column) = self.cell_position(slot);
        Rect::new(
            self.padding + column as f32 * (self.card.width + self.gap),
            self.header_height + self.padding + row as f32 * (self.card.height + self.gap),
            self.card.width,
            self.card.height,
        )
    }

    pub fn cell_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.capacity()).map(|slot| self.cell_rect(slot))
    }
}
