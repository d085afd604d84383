//! unitconv Units - Unit registry and conversion engine
//!
//! Converts values between units of the same category.
//!
//! Categories:
//! - Length (Meters, Kilometers, Miles, Feet, Inches)
//! - Weight (Kilograms, Grams, Pounds, Ounces)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Speed (m/s, km/h, mph)
//! - Area (Square Meters, Square Kilometers, Square Miles, Acres, Hectares)
//!
//! Every category except Temperature scales through a factor relative to
//! its base unit. Temperature goes through an affine transform via Celsius.

mod temperature;
mod unit;
mod units;
mod convert;
mod parse;

pub use temperature::{TemperatureScale, KELVIN_OFFSET};
pub use unit::{Unit, Scale};
pub use units::{UnitRegistry, UNITS};
pub use convert::{convert, convert_with, to_base};
pub use parse::{parse_query, parse_category, parse_quantity_string, resolve_unit, Query, QueryError};

use unitconv_core::{Category, ConversionError};

/// All categories, in display order
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Unit names of a category, in display order
pub fn list_units(category: Category) -> Vec<&'static str> {
    UNITS.unit_names(category)
}

/// Conversion factor of a unit relative to its category's base unit
pub fn factor_for(category: Category, unit: &str) -> Result<f64, ConversionError> {
    UNITS.factor_for(category, unit)
}
