//! Conversion errors and user-facing notices
//!
//! `ConversionError` is what the engine returns. `Notice` is the structured
//! value the session hands to whoever renders results: it never crashes
//! anything and carries enough information to act on.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::Category;

/// Error type for registry lookups and conversions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),

    #[error("{0} has no conversion factor table")]
    NoFactorTable(Category),
}

/// Standard notice codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_CATEGORY: &str = "UNSUPPORTED_CATEGORY";
    pub const NO_FACTOR_TABLE: &str = "NO_FACTOR_TABLE";
    pub const SAME_UNIT: &str = "SAME_UNIT";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const AMBIGUOUS_UNIT: &str = "AMBIGUOUS_UNIT";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
}

/// Severity level of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; nothing was computed or recorded
    Warning,
    /// The request failed
    Error,
}

/// Structured error or warning shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Machine-readable code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Suggestion for fixing the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl Notice {
    /// Create a new error notice
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    // ========== Common Constructors ==========

    pub fn same_unit(unit: &str) -> Self {
        Self::new(codes::SAME_UNIT, format!("Source and target unit are both {}", unit))
            .with_suggestion("Please select different units to convert.")
            .with_severity(Severity::Warning)
    }

    pub fn invalid_value(value: f64) -> Self {
        Self::new(codes::INVALID_VALUE, format!("Value must be a finite number, got {}", value))
    }

    pub fn out_of_range(value: f64, from: &str, to: &str) -> Self {
        Self::new(codes::OUT_OF_RANGE,
            format!("{} {} does not fit in {} as a finite number", value, from, to))
            .with_suggestion("Use a smaller value or a larger target unit")
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Write queries like \"12.5 km to mi\" or \"Temperature: 100 C -> F\"")
    }

    pub fn unrecognized_unit(unit: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", unit))
            .with_suggestion("Use list_units to see valid units for each category")
    }

    pub fn ambiguous_unit(unit: &str, categories: &[Category]) -> Self {
        let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
        Self::new(codes::AMBIGUOUS_UNIT,
            format!("Unit '{}' exists in several categories: {}", unit, names.join(", ")))
            .with_suggestion("Prefix the query with a category, e.g. \"Length: ...\"")
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for Notice {}

impl From<ConversionError> for Notice {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::UnknownUnit { category, .. } => Self::new(codes::UNKNOWN_UNIT, message)
                .with_suggestion(format!("Use list_units(\"{}\") to see valid units", category)),
            ConversionError::UnsupportedCategory(_) => Self::new(codes::UNSUPPORTED_CATEGORY, message)
                .with_suggestion("Valid categories: Length, Weight, Temperature, Speed, Area"),
            ConversionError::NoFactorTable(_) => Self::new(codes::NO_FACTOR_TABLE, message),
        }
    }
}
