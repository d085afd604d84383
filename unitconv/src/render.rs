//! Markdown renderer
//!
//! Renders conversions, notices and history as markdown for clients that
//! display text.

use unitconv_core::{Category, Notice, Severity};
use unitconv_units::UNITS;
use crate::history::ConversionRecord;
use crate::Conversion;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// "Result: 0.6214 Miles"
    pub fn render_conversion(&self, conversion: &Conversion) -> String {
        format!("Result: {}", conversion.display)
    }

    pub fn render_notice(&self, notice: &Notice) -> String {
        let label = match notice.severity {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        let mut output = format!("{}: {}", label, notice.message);
        if let Some(ref suggestion) = notice.suggestion {
            output.push_str(&format!("\n\n{}", suggestion));
        }
        output
    }

    /// History section, newest first; empty history renders nothing
    pub fn render_history(&self, records: &[&ConversionRecord]) -> String {
        if records.is_empty() {
            return String::new();
        }
        let mut output = String::from("## Conversion History\n\n");
        for record in records {
            output.push_str(&format!("- {}\n", record.text));
        }
        output
    }

    /// Table of units for one category
    pub fn render_units(&self, category: Category) -> String {
        let mut output = format!("## {} units\n\n", category);
        output.push_str("| unit | symbol |\n");
        output.push_str("|------|--------|\n");
        for unit in UNITS.units_for(category) {
            output.push_str(&format!("| {} | {} |\n", unit.name, unit.symbol));
        }
        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
