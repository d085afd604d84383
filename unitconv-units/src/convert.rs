//! The conversion engine
//!
//! Pure functions over the static registry. Units are matched by their
//! exact canonical names; resolving user spellings is the job of `parse`.

use unitconv_core::{Category, ConversionError};
use crate::Unit;
use crate::units::{UnitRegistry, UNITS};

/// Convert `value` from one unit to another within `category`
pub fn convert(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_with(&UNITS, category, value, from, to)
}

/// Convert `value` into the base unit of `category`
pub fn to_base(category: Category, value: f64, unit: &str) -> Result<f64, ConversionError> {
    let base = UNITS.base_unit(category)
        .ok_or_else(|| ConversionError::UnsupportedCategory(category.to_string()))?;
    convert_with(&UNITS, category, value, unit, &base.name)
}

/// Convert against an explicit registry
pub fn convert_with(
    registry: &UnitRegistry,
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from_unit = lookup(registry, category, from)?;
    let to_unit = lookup(registry, category, to)?;

    if from_unit.name == to_unit.name {
        return Ok(value);
    }

    match category {
        Category::Temperature => convert_temperature(value, from_unit, to_unit),
        Category::Length | Category::Weight | Category::Speed | Category::Area => {
            convert_linear(value, from_unit, to_unit)
        }
    }
}

fn lookup<'a>(registry: &'a UnitRegistry, category: Category, name: &str) -> Result<&'a Unit, ConversionError> {
    registry.get(category, name).ok_or_else(|| ConversionError::UnknownUnit {
        category,
        unit: name.to_string(),
    })
}

fn convert_temperature(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    let from_scale = from.temperature_scale().ok_or_else(|| unknown(from))?;
    let to_scale = to.temperature_scale().ok_or_else(|| unknown(to))?;
    Ok(from_scale.convert_to(value, to_scale))
}

fn convert_linear(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    let from_factor = from.factor().ok_or_else(|| unknown(from))?;
    let to_factor = to.factor().ok_or_else(|| unknown(to))?;
    // base_value = value * factor[from]; result = base_value / factor[to]
    Ok(value * from_factor / to_factor)
}

fn unknown(unit: &Unit) -> ConversionError {
    ConversionError::UnknownUnit {
        category: unit.category,
        unit: unit.name.clone(),
    }
}
