//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use unitconv_core::Category;
use crate::TemperatureScale;

/// How values in a unit relate to the category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    /// base_value = value * factor
    Factor(f64),
    /// Affine temperature scale, converted through Celsius
    Temperature(TemperatureScale),
}

/// A unit scoped to exactly one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The canonical name (e.g., "Meters", "km/h")
    pub name: String,
    /// Short display symbol (e.g., "m", "°C")
    pub symbol: String,
    /// Owning category
    pub category: Category,
    /// Relation to the base unit
    pub scale: Scale,
}

impl Unit {
    /// Create a unit with a proportional factor
    pub fn linear(name: &str, symbol: &str, category: Category, factor: f64) -> Self {
        Unit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            category,
            scale: Scale::Factor(factor),
        }
    }

    /// Create a temperature unit
    pub fn temperature(symbol: &str, scale: TemperatureScale) -> Self {
        Unit {
            name: scale.name().to_string(),
            symbol: symbol.to_string(),
            category: Category::Temperature,
            scale: Scale::Temperature(scale),
        }
    }

    /// Conversion factor, if this is a linear unit
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Factor(f) => Some(f),
            Scale::Temperature(_) => None,
        }
    }

    /// Temperature scale, if this is a temperature unit
    pub fn temperature_scale(&self) -> Option<TemperatureScale> {
        match self.scale {
            Scale::Temperature(t) => Some(t),
            Scale::Factor(_) => None,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        match self.scale {
            Scale::Factor(f) => f == 1.0,
            Scale::Temperature(t) => t == TemperatureScale::Celsius,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters() -> Unit {
        Unit::linear("Meters", "m", Category::Length, 1.0)
    }

    fn kilometers() -> Unit {
        Unit::linear("Kilometers", "km", Category::Length, 1000.0)
    }

    #[test]
    fn test_base_unit() {
        assert!(meters().is_base());
        assert!(!kilometers().is_base());
        assert!(Unit::temperature("°C", TemperatureScale::Celsius).is_base());
        assert!(!Unit::temperature("K", TemperatureScale::Kelvin).is_base());
    }

    #[test]
    fn test_factor_only_for_linear() {
        assert_eq!(kilometers().factor(), Some(1000.0));
        let kelvin = Unit::temperature("K", TemperatureScale::Kelvin);
        assert_eq!(kelvin.factor(), None);
        assert_eq!(kelvin.temperature_scale(), Some(TemperatureScale::Kelvin));
    }

    #[test]
    fn test_temperature_unit_name() {
        let f = Unit::temperature("°F", TemperatureScale::Fahrenheit);
        assert_eq!(f.name, "Fahrenheit");
        assert_eq!(f.category, Category::Temperature);
        assert_eq!(format!("{}", f), "Fahrenheit");
    }
}
