use crate::card::{compose_card, CardContext};
use crate::footer::{compose_footer, FooterContext};
use crate::header::{compose_header, HeaderContext};
use crate::model::{CatalogSettings, CatalogSnapshot, LayoutMode, Product};
use crate::qr::QrCodeService;
use flyer_doctree::{ContentRegion, DocumentTree, GridCell, Page};
use flyer_layout::{LayoutPlanner, PageGeometry};
use flyer_style::Theme;
use log::info;

/// Turns a catalog snapshot into a [`DocumentTree`].
///
/// Composition is a pure function of its inputs: the same products and
/// settings always produce an identical tree.
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    planner: LayoutPlanner,
    theme: Theme,
    qr_service: QrCodeService,
}

impl DocumentComposer {
    pub fn new(planner: LayoutPlanner) -> Self {
        Self {
            planner,
            ..Default::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_qr_service(mut self, qr_service: QrCodeService) -> Self {
        self.qr_service = qr_service;
        self
    }

    pub fn planner(&self) -> &LayoutPlanner {
        &self.planner
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn compose_snapshot(&self, snapshot: &CatalogSnapshot) -> DocumentTree {
        self.compose(&snapshot.products, &snapshot.settings)
    }

    /// Lays `products` out in order, `capacity` per page, and repeats the
    /// header and footer on every page. No products means no pages.
    pub fn compose(&self, products: &[Product], settings: &CatalogSettings) -> DocumentTree {
        let option = settings.layout();
        let plan = self.planner.plan(option, products.len());
        let geometry = plan.geometry;

        let header_ctx = HeaderContext {
            header: &settings.header,
            style: &self.theme.header,
            shape: settings.image_shape,
            banner: matches!(settings.mode, LayoutMode::NamedLayout { .. }),
        };
        let header = compose_header(&header_ctx, geometry.header_rect());

        let footer_ctx = FooterContext {
            footer: &settings.footer,
            style: &self.theme.footer,
            shape: settings.image_shape,
            qr_service: &self.qr_service,
        };
        let footer = compose_footer(&footer_ctx, geometry.footer_rect());

        let pages: Vec<Page> = plan
            .slices(products)
            .enumerate()
            .map(|(index, slice)| Page {
                number: index + 1,
                header: header.clone(),
                content: self.compose_content(&geometry, slice, settings),
                footer: footer.clone(),
            })
            .collect();

        info!(
            "Composed {} product(s) into {} page(s) using the {} layout.",
            products.len(),
            pages.len(),
            option
        );

        DocumentTree::new(geometry.page, pages)
    }

    fn compose_content(
        &self,
        geometry: &PageGeometry,
        slice: &[Product],
        settings: &CatalogSettings,
    ) -> ContentRegion {
        let cells = geometry
            .cell_rects()
            .enumerate()
            .map(|(slot, rect)| {
                let (row, column) = geometry.cell_position(slot);
                let card = slice.get(slot).map(|product| {
                    let ctx = CardContext {
                        product,
                        settings,
                        style: &self.theme.card,
                    };
                    compose_card(&ctx, rect)
                });
                GridCell {
                    slot,
                    row,
                    column,
                    rect,
                    card,
                }
            })
            .collect();

        ContentRegion {
            rect: geometry.content_rect(),
            columns: geometry.columns(),
            rows: geometry.rows(),
            cells,
        }
    }
}
