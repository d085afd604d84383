//! unitconv - Unit conversion sessions
//!
//! Wraps the stateless engine in `unitconv-units` with the state a user
//! interaction needs: history, display precision and query parsing.

mod config;
mod format;
mod history;
mod render;
mod session;

pub use config::{SessionConfig, DEFAULT_HISTORY_DISPLAY, DEFAULT_PRECISION};
pub use format::{format_record, format_result, format_value};
pub use history::{ConversionRecord, History};
pub use render::Renderer;
pub use session::{Conversion, ConversionRequest, Session};

pub use unitconv_core::{Category, ConversionError, Notice, Severity};
pub use unitconv_units::{convert, list_categories, list_units, to_base};
