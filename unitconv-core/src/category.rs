//! Conversion categories

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ConversionError;

/// A closed grouping of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Speed,
    Area,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Speed,
        Category::Area,
    ];

    /// Display name (e.g., "Length")
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Speed => "Speed",
            Category::Area => "Area",
        }
    }

    /// True when conversions go through a per-unit scalar factor.
    /// Temperature is the only affine category.
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    /// Case-insensitive; "mass" and "velocity" are accepted as aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" => Ok(Category::Length),
            "weight" | "mass" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            "speed" | "velocity" => Ok(Category::Speed),
            "area" => Ok(Category::Area),
            _ => Err(ConversionError::UnsupportedCategory(s.trim().to_string())),
        }
    }
}
