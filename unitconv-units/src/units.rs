//! Unit definitions - the fixed tables for each category

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::{Category, ConversionError};
use crate::{Unit, TemperatureScale};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units, ordered per category
pub struct UnitRegistry {
    units: HashMap<Category, Vec<Unit>>,
    /// (category, lowercase alias) -> canonical name
    aliases: HashMap<(Category, String), String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Units of a category, base unit first
    pub fn units_for(&self, category: Category) -> &[Unit] {
        self.units.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Canonical unit names of a category, in display order
    pub fn unit_names(&self, category: Category) -> Vec<&str> {
        self.units_for(category).iter().map(|u| u.name.as_str()).collect()
    }

    /// Get a unit by its exact canonical name
    pub fn get(&self, category: Category, name: &str) -> Option<&Unit> {
        self.units_for(category).iter().find(|u| u.name == name)
    }

    /// Get a unit by canonical name, symbol or alias, ignoring case
    pub fn resolve(&self, category: Category, text: &str) -> Option<&Unit> {
        let text = text.trim();
        if let Some(unit) = self.get(category, text) {
            return Some(unit);
        }
        let key = text.to_lowercase();
        if let Some(unit) = self.units_for(category).iter()
            .find(|u| u.name.to_lowercase() == key || u.symbol.to_lowercase() == key)
        {
            return Some(unit);
        }
        self.aliases.get(&(category, key))
            .and_then(|canonical| self.get(category, canonical))
    }

    /// Categories in which `text` names a unit
    pub fn categories_for(&self, text: &str) -> Vec<Category> {
        Category::ALL.iter()
            .copied()
            .filter(|c| self.resolve(*c, text).is_some())
            .collect()
    }

    /// Conversion factor of a unit relative to its category's base unit
    pub fn factor_for(&self, category: Category, name: &str) -> Result<f64, ConversionError> {
        if !category.is_linear() {
            return Err(ConversionError::NoFactorTable(category));
        }
        self.get(category, name)
            .and_then(|u| u.factor())
            .ok_or_else(|| ConversionError::UnknownUnit {
                category,
                unit: name.to_string(),
            })
    }

    /// The unit with factor 1 (Celsius for temperature)
    pub fn base_unit(&self, category: Category) -> Option<&Unit> {
        self.units_for(category).iter().find(|u| u.is_base())
    }

    fn register(&mut self, unit: Unit) {
        debug_assert!(unit.factor().map_or(true, |f| f.is_finite() && f > 0.0),
            "factor for {} must be positive", unit.name);
        self.units.entry(unit.category).or_default().push(unit);
    }

    fn alias(&mut self, category: Category, alias: &str, name: &str) {
        self.aliases.insert((category, alias.to_lowercase()), name.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_speed_units();
        self.register_area_units();
    }

    fn register_length_units(&mut self) {
        use Category::Length;
        self.register(Unit::linear("Meters", "m", Length, 1.0));
        self.register(Unit::linear("Kilometers", "km", Length, 1000.0));
        self.register(Unit::linear("Miles", "mi", Length, 1609.34));
        self.register(Unit::linear("Feet", "ft", Length, 0.3048));
        self.register(Unit::linear("Inches", "in", Length, 0.0254));

        self.alias(Length, "meter", "Meters");
        self.alias(Length, "metre", "Meters");
        self.alias(Length, "metres", "Meters");
        self.alias(Length, "kilometer", "Kilometers");
        self.alias(Length, "kilometre", "Kilometers");
        self.alias(Length, "kilometres", "Kilometers");
        self.alias(Length, "mile", "Miles");
        self.alias(Length, "foot", "Feet");
        self.alias(Length, "inch", "Inches");
    }

    fn register_weight_units(&mut self) {
        use Category::Weight;
        self.register(Unit::linear("Kilograms", "kg", Weight, 1.0));
        self.register(Unit::linear("Grams", "g", Weight, 0.001));
        self.register(Unit::linear("Pounds", "lb", Weight, 0.453592));
        self.register(Unit::linear("Ounces", "oz", Weight, 0.0283495));

        self.alias(Weight, "kilogram", "Kilograms");
        self.alias(Weight, "kilo", "Kilograms");
        self.alias(Weight, "kilos", "Kilograms");
        self.alias(Weight, "gram", "Grams");
        self.alias(Weight, "pound", "Pounds");
        self.alias(Weight, "lbs", "Pounds");
        self.alias(Weight, "ounce", "Ounces");
    }

    fn register_temperature_units(&mut self) {
        use Category::Temperature;
        self.register(Unit::temperature("°C", TemperatureScale::Celsius));
        self.register(Unit::temperature("°F", TemperatureScale::Fahrenheit));
        self.register(Unit::temperature("K", TemperatureScale::Kelvin));

        self.alias(Temperature, "C", "Celsius");
        self.alias(Temperature, "degC", "Celsius");
        self.alias(Temperature, "centigrade", "Celsius");
        self.alias(Temperature, "F", "Fahrenheit");
        self.alias(Temperature, "degF", "Fahrenheit");
        self.alias(Temperature, "°K", "Kelvin");
    }

    fn register_speed_units(&mut self) {
        use Category::Speed;
        self.register(Unit::linear("m/s", "m/s", Speed, 1.0));
        self.register(Unit::linear("km/h", "km/h", Speed, 0.277778));
        self.register(Unit::linear("mph", "mph", Speed, 0.44704));

        self.alias(Speed, "mps", "m/s");
        self.alias(Speed, "meters per second", "m/s");
        self.alias(Speed, "kph", "km/h");
        self.alias(Speed, "kmh", "km/h");
        self.alias(Speed, "kilometers per hour", "km/h");
        self.alias(Speed, "miles per hour", "mph");
    }

    fn register_area_units(&mut self) {
        use Category::Area;
        self.register(Unit::linear("Square Meters", "m²", Area, 1.0));
        self.register(Unit::linear("Square Kilometers", "km²", Area, 1e6));
        self.register(Unit::linear("Square Miles", "mi²", Area, 2.59e6));
        self.register(Unit::linear("Acres", "ac", Area, 4046.86));
        self.register(Unit::linear("Hectares", "ha", Area, 10000.0));

        self.alias(Area, "m2", "Square Meters");
        self.alias(Area, "m^2", "Square Meters");
        self.alias(Area, "sq m", "Square Meters");
        self.alias(Area, "square meter", "Square Meters");
        self.alias(Area, "km2", "Square Kilometers");
        self.alias(Area, "km^2", "Square Kilometers");
        self.alias(Area, "sq km", "Square Kilometers");
        self.alias(Area, "square kilometer", "Square Kilometers");
        self.alias(Area, "mi2", "Square Miles");
        self.alias(Area, "mi^2", "Square Miles");
        self.alias(Area, "sq mi", "Square Miles");
        self.alias(Area, "square mile", "Square Miles");
        self.alias(Area, "acre", "Acres");
        self.alias(Area, "hectare", "Hectares");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_order() {
        assert_eq!(UNITS.unit_names(Category::Length),
            vec!["Meters", "Kilometers", "Miles", "Feet", "Inches"]);
        assert_eq!(UNITS.unit_names(Category::Weight),
            vec!["Kilograms", "Grams", "Pounds", "Ounces"]);
        assert_eq!(UNITS.unit_names(Category::Temperature),
            vec!["Celsius", "Fahrenheit", "Kelvin"]);
        assert_eq!(UNITS.unit_names(Category::Speed),
            vec!["m/s", "km/h", "mph"]);
        assert_eq!(UNITS.unit_names(Category::Area),
            vec!["Square Meters", "Square Kilometers", "Square Miles", "Acres", "Hectares"]);
    }

    #[test]
    fn test_base_unit_first() {
        for category in Category::ALL {
            let first = &UNITS.units_for(category)[0];
            assert!(first.is_base(), "{} should start with its base unit", category);
            assert_eq!(UNITS.base_unit(category), Some(first));
        }
    }

    #[test]
    fn test_factors_positive() {
        for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
            for unit in UNITS.units_for(category) {
                let factor = unit.factor().unwrap();
                assert!(factor > 0.0, "{} has non-positive factor", unit.name);
            }
        }
    }

    #[test]
    fn test_temperature_has_no_factors() {
        for unit in UNITS.units_for(Category::Temperature) {
            assert!(unit.factor().is_none());
        }
        assert_eq!(UNITS.factor_for(Category::Temperature, "Kelvin"),
            Err(ConversionError::NoFactorTable(Category::Temperature)));
    }

    #[test]
    fn test_factor_for() {
        assert_eq!(UNITS.factor_for(Category::Length, "Miles"), Ok(1609.34));
        assert_eq!(UNITS.factor_for(Category::Area, "Hectares"), Ok(10000.0));
        assert_eq!(UNITS.factor_for(Category::Speed, "mph"), Ok(0.44704));
    }

    #[test]
    fn test_factor_for_unknown() {
        let err = UNITS.factor_for(Category::Weight, "Meters").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit {
            category: Category::Weight,
            unit: "Meters".to_string(),
        });
    }

    #[test]
    fn test_get_is_exact() {
        assert!(UNITS.get(Category::Length, "Meters").is_some());
        assert!(UNITS.get(Category::Length, "meters").is_none());
        assert!(UNITS.get(Category::Length, "m").is_none());
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(UNITS.resolve(Category::Length, "km").unwrap().name, "Kilometers");
        assert_eq!(UNITS.resolve(Category::Length, "FEET").unwrap().name, "Feet");
        assert_eq!(UNITS.resolve(Category::Length, "foot").unwrap().name, "Feet");
        assert_eq!(UNITS.resolve(Category::Temperature, "f").unwrap().name, "Fahrenheit");
        assert_eq!(UNITS.resolve(Category::Temperature, "°C").unwrap().name, "Celsius");
        assert_eq!(UNITS.resolve(Category::Speed, "KPH").unwrap().name, "km/h");
        assert_eq!(UNITS.resolve(Category::Area, "sq mi").unwrap().name, "Square Miles");
        assert!(UNITS.resolve(Category::Length, "Lightyears").is_none());
    }

    #[test]
    fn test_categories_for() {
        assert_eq!(UNITS.categories_for("km"), vec![Category::Length]);
        assert_eq!(UNITS.categories_for("km/h"), vec![Category::Speed]);
        assert_eq!(UNITS.categories_for("K"), vec![Category::Temperature]);
        assert!(UNITS.categories_for("furlongs").is_empty());
    }

    #[test]
    fn test_aliases_unique_across_categories() {
        for category in Category::ALL {
            for unit in UNITS.units_for(category) {
                assert_eq!(UNITS.categories_for(&unit.name), vec![category],
                    "{} resolves outside {}", unit.name, category);
                assert_eq!(UNITS.categories_for(&unit.symbol), vec![category],
                    "{} resolves outside {}", unit.symbol, category);
            }
        }
    }
}
