//! unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout unitconv:
//! - `Category`: The fixed set of conversion categories
//! - `ConversionError`: Typed failures from the registry and engine
//! - `Notice`: Structured errors and warnings for display

mod category;
mod error;

pub use category::Category;
pub use error::{ConversionError, Notice, Severity, codes};
