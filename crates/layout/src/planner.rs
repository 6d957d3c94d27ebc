use crate::algorithms::pagination;
use crate::config::PageConfig;
use crate::geometry::PageGeometry;
use crate::option::LayoutOption;
use crate::LayoutError;
use log::debug;
use std::ops::Range;

/// Resolves layout options against a validated [`PageConfig`].
///
/// The configuration is checked once, for every option in the closed set, so
/// planning itself cannot fail.
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    config: PageConfig,
}

impl LayoutPlanner {
    pub fn new(config: PageConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        for option in LayoutOption::ALL {
            let geometry = PageGeometry::compute(option, &config);
            if !(geometry.card.width > 0.0 && geometry.card.height > 0.0) {
                return Err(LayoutError::DegenerateGrid {
                    option,
                    card_width: geometry.card.width,
                    card_height: geometry.card.height,
                });
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn geometry(&self, option: LayoutOption) -> PageGeometry {
        PageGeometry::compute(option, &self.config)
    }

    /// Plans `product_count` products onto pages of `option`.
    pub fn plan(&self, option: LayoutOption, product_count: usize) -> PagePlan {
        let geometry = self.geometry(option);
        let pages = pagination::page_ranges(product_count, option.capacity());
        debug!(
            "Planned {} product(s) on {} page(s) of {} ({:.2} x {:.2} pt cards).",
            product_count,
            pages.len(),
            option,
            geometry.card.width,
            geometry.card.height
        );
        PagePlan { geometry, pages }
    }
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self {
            config: PageConfig::default(),
        }
    }
}

/// Geometry plus the product index range of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    pub pages: Vec<Range<usize>>,
}

impl PagePlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The slice of `items` assigned to each page, in order.
    ///
    /// `items` must be the list the plan was made for.
    pub fn slices<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        self.pages.iter().map(move |range| &items[range.clone()])
    }
}
