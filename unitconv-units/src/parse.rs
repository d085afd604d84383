//! Query parsing - turn text like "12.5 km to mi" into a conversion

use thiserror::Error;
use unitconv_core::{Category, ConversionError, Notice};
use crate::units::UNITS;

/// A fully resolved conversion query, units in canonical form
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub category: Category,
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Errors from query parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("invalid conversion format: {0}, expected '<value> <unit> to <unit>'")]
    Syntax(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown unit: {0}")]
    UnrecognizedUnit(String),

    #[error("unit '{unit}' exists in several categories")]
    Ambiguous { unit: String, categories: Vec<Category> },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl From<QueryError> for Notice {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Conversion(e) => Notice::from(e),
            QueryError::Ambiguous { unit, categories } => Notice::ambiguous_unit(&unit, &categories),
            QueryError::UnrecognizedUnit(unit) => Notice::unrecognized_unit(&unit),
            other => Notice::parse_error(other.to_string()),
        }
    }
}

/// Resolve a unit spelling to its canonical name within `category`
pub fn resolve_unit(category: Category, text: &str) -> Result<String, ConversionError> {
    UNITS.resolve(category, text)
        .map(|u| u.name.clone())
        .ok_or_else(|| ConversionError::UnknownUnit {
            category,
            unit: text.trim().to_string(),
        })
}

/// Parse a category name
pub fn parse_category(text: &str) -> Result<Category, ConversionError> {
    text.parse()
}

/// Parse a query
///
/// Supported formats:
/// - "100 km to mi", "100km -> mi", "32 F → C", "5 ft in in"
/// - With explicit category: "Area: 3 acres to ha"
///
/// Without a category prefix, the category is inferred from the source unit.
pub fn parse_query(s: &str) -> Result<Query, QueryError> {
    let s = s.trim();

    let (category, rest) = match s.split_once(':') {
        Some((prefix, rest)) => (Some(parse_category(prefix)?), rest.trim()),
        None => (None, s),
    };

    let (quantity, target) = split_conversion(rest)
        .ok_or_else(|| QueryError::Syntax(s.to_string()))?;

    let (value, source) = parse_quantity_string(quantity)?;
    let target = target.trim();
    if target.is_empty() {
        return Err(QueryError::Syntax(s.to_string()));
    }

    let category = match category {
        Some(c) => c,
        None => infer_category(&source, target)?,
    };

    Ok(Query {
        category,
        value,
        from: resolve_unit(category, &source)?,
        to: resolve_unit(category, target)?,
    })
}

/// Split "<quantity> <separator> <unit>"
fn split_conversion(s: &str) -> Option<(&str, &str)> {
    if let Some(parts) = s.split_once("->") {
        return Some(parts);
    }
    if let Some(parts) = s.split_once('→') {
        return Some(parts);
    }
    // "in" is also the inch symbol, so take the last separator
    s.rsplit_once(" to ").or_else(|| s.rsplit_once(" in "))
}

/// Parse a quantity string like "5 km" or "100kg"
pub fn parse_quantity_string(s: &str) -> Result<(f64, String), QueryError> {
    let s = s.trim();

    // Find where the number ends and unit begins
    let mut split_pos = 0;
    for (i, c) in s.char_indices() {
        let exponent = (c == 'e' || c == 'E')
            && i > 0
            && s[i + 1..].starts_with(|n: char| n.is_ascii_digit() || n == '-' || n == '+');
        if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || exponent {
            split_pos = i + c.len_utf8();
        } else {
            break;
        }
    }

    if split_pos == 0 {
        return Err(QueryError::Syntax(format!("no number found in: {}", s)));
    }

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    let value: f64 = num_str.parse()
        .map_err(|_| QueryError::InvalidNumber(num_str.to_string()))?;

    if unit_str.is_empty() {
        return Err(QueryError::Syntax(format!("no unit found in: {}", s)));
    }

    Ok((value, unit_str.to_string()))
}

/// Pick the single category containing both units
fn infer_category(source: &str, target: &str) -> Result<Category, QueryError> {
    let candidates: Vec<Category> = UNITS.categories_for(source)
        .into_iter()
        .filter(|c| UNITS.resolve(*c, target).is_some())
        .collect();

    match candidates.as_slice() {
        [single] => Ok(*single),
        [] => {
            // Report against the unit that failed to resolve
            let source_categories = UNITS.categories_for(source);
            let target_categories = UNITS.categories_for(target);
            match (source_categories.first(), target_categories.as_slice()) {
                (Some(&category), _) => Err(ConversionError::UnknownUnit {
                    category,
                    unit: target.to_string(),
                }.into()),
                (None, [category]) => Err(ConversionError::UnknownUnit {
                    category: *category,
                    unit: source.to_string(),
                }.into()),
                (None, _) => Err(QueryError::UnrecognizedUnit(source.to_string())),
            }
        }
        _ => Err(QueryError::Ambiguous {
            unit: source.to_string(),
            categories: candidates,
        }),
    }
}
