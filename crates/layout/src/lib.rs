use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid page configuration: {0}")]
    InvalidPageConfig(String),
    #[error(
        "Layout {option} leaves no room for cards: computed card size {card_width:.2} x {card_height:.2}."
    )]
    DegenerateGrid {
        option: LayoutOption,
        card_width: f32,
        card_height: f32,
    },
    #[error("Unknown layout option: '{0}'")]
    UnknownLayout(String),
}

pub mod algorithms;
pub mod config;
pub mod geometry;
pub mod option;
pub mod planner;

pub use self::config::PageConfig;
pub use self::geometry::PageGeometry;
pub use self::option::{GridColumns, LayoutOption};
pub use self::planner::{LayoutPlanner, PagePlan};

// Re-export geometry types so callers do not need a direct dependency
pub use flyer_types::geometry::{Rect, Size};

#[cfg(test)]
mod planner_test;
