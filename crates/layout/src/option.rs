//! The closed set of grid layouts a flyer page can use.

use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named grid configuration.
///
/// The set is fixed at compile time; every variant has at least one column and
/// one row, so `capacity()` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutOption {
    #[default]
    #[serde(rename = "4x3")]
    Grid4x3,
    #[serde(rename = "3x3")]
    Grid3x3,
    #[serde(rename = "4x2")]
    Grid4x2,
    #[serde(rename = "2x3")]
    Grid2x3,
    #[serde(rename = "3x2")]
    Grid3x2,
}

impl LayoutOption {
    pub const ALL: [LayoutOption; 5] = [
        LayoutOption::Grid4x3,
        LayoutOption::Grid3x3,
        LayoutOption::Grid4x2,
        LayoutOption::Grid2x3,
        LayoutOption::Grid3x2,
    ];

    /// The layouts offered by the named-layout editor.
    pub const NAMED: [LayoutOption; 3] = [
        LayoutOption::Grid4x3,
        LayoutOption::Grid3x3,
        LayoutOption::Grid4x2,
    ];

    pub const fn columns(&self) -> usize {
        match self {
            LayoutOption::Grid4x3 | LayoutOption::Grid4x2 => 4,
            LayoutOption::Grid3x3 | LayoutOption::Grid3x2 => 3,
            LayoutOption::Grid2x3 => 2,
        }
    }

    pub const fn rows(&self) -> usize {
        match self {
            LayoutOption::Grid4x3 | LayoutOption::Grid3x3 | LayoutOption::Grid2x3 => 3,
            LayoutOption::Grid4x2 | LayoutOption::Grid3x2 => 2,
        }
    }

    /// Maximum number of products on one page.
    pub const fn capacity(&self) -> usize {
        self.columns() * self.rows()
    }

    pub const fn name(&self) -> &'static str {
        match self {
            LayoutOption::Grid4x3 => "4x3",
            LayoutOption::Grid3x3 => "3x3",
            LayoutOption::Grid4x2 => "4x2",
            LayoutOption::Grid2x3 => "2x3",
            LayoutOption::Grid3x2 => "3x2",
        }
    }
}

impl fmt::Display for LayoutOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutOption {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LayoutOption::ALL
            .into_iter()
            .find(|option| option.name() == wanted)
            .ok_or_else(|| LayoutError::UnknownLayout(s.to_string()))
    }
}

/// Column count of the simple grid-columns editor.
///
/// Each choice maps onto a six-product layout from the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridColumns {
    Two,
    #[default]
    Three,
}

impl GridColumns {
    pub fn layout(&self) -> LayoutOption {
        match self {
            GridColumns::Two => LayoutOption::Grid2x3,
            GridColumns::Three => LayoutOption::Grid3x2,
        }
    }
}

impl TryFrom<u8> for GridColumns {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(GridColumns::Two),
            3 => Ok(GridColumns::Three),
            other => Err(format!("Unsupported column count: {}", other)),
        }
    }
}

impl From<GridColumns> for u8 {
    fn from(columns: GridColumns) -> Self {
        match columns {
            GridColumns::Two => 2,
            GridColumns::Three => 3,
        }
    }
}
