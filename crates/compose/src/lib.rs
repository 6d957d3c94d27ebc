//! Flyer composition.
//!
//! Resolves a [`CatalogSnapshot`] into a paginated
//! [`DocumentTree`](flyer_doctree::DocumentTree): the layout planner decides
//! how many products go on each page and where every card sits, and the
//! inclusion rules of each region decide which optional elements appear.

mod card;
mod composer;
mod footer;
mod header;
pub mod model;
mod qr;
mod reconcile;
pub mod rules;
mod stack;

pub use card::{card_rules, CardContext};
pub use composer::DocumentComposer;
pub use footer::{footer_rules, FooterContext};
pub use header::{header_rules, HeaderContext};
pub use model::{
    CatalogSettings, CatalogSnapshot, FooterSettings, HeaderSettings, LayoutMode, Product, DEFAULT_ACCENT,
};
pub use qr::QrCodeService;
pub use reconcile::{blank_products, reconcile_products};
pub use rules::{Fragment, InclusionRule};
