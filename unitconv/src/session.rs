//! Conversion sessions
//!
//! A `Session` owns everything that lives for the duration of one user's
//! interaction: configuration and history. The engine itself stays
//! stateless; the session resolves user spellings, applies the same-unit
//! rule, calls the engine and records the outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use unitconv_core::{Category, Notice};
use unitconv_units::{convert, parse_query, resolve_unit};
use crate::format::{format_record, format_result};
use crate::history::{ConversionRecord, History};
use crate::SessionConfig;

/// One conversion as requested by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub value: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(category: Category, value: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            category,
            value,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Same request with source and target exchanged
    pub fn swapped(&self) -> Self {
        Self {
            category: self.category,
            value: self.value,
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }

    /// Compares the labels as given; resolve first for alias-aware checks
    pub fn is_same_unit(&self) -> bool {
        self.from == self.to
    }
}

/// A successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// The request with units in canonical form
    pub request: ConversionRequest,
    /// Unrounded engine output
    pub result: f64,
    /// Result with unit, at display precision
    pub display: String,
    /// History line that was recorded
    pub record: String,
}

pub struct Session {
    config: SessionConfig,
    history: History,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let history = History::with_capacity(config.history_capacity);
        Self { config, history }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The configured number of most recent records, newest first
    pub fn recent_history(&self) -> Vec<&ConversionRecord> {
        self.history.recent(self.config.history_display)
    }

    /// Run one conversion and record it
    ///
    /// Identical source and target units produce a warning and nothing is
    /// recorded. A result that overflows `f64` is an error and is not
    /// recorded either.
    pub fn convert(&mut self, request: &ConversionRequest) -> Result<Conversion, Notice> {
        if !request.value.is_finite() {
            return Err(Notice::invalid_value(request.value));
        }

        let canonical = ConversionRequest {
            category: request.category,
            value: request.value,
            from: resolve_unit(request.category, &request.from)?,
            to: resolve_unit(request.category, &request.to)?,
        };

        if canonical.is_same_unit() {
            warn!(category = %canonical.category, unit = %canonical.from, "same unit selected, nothing to convert");
            return Err(Notice::same_unit(&canonical.from));
        }

        let result = convert(canonical.category, canonical.value, &canonical.from, &canonical.to)?;
        if !result.is_finite() {
            warn!(category = %canonical.category, from = %canonical.from, to = %canonical.to,
                value = canonical.value, "result out of range");
            return Err(Notice::out_of_range(canonical.value, &canonical.from, &canonical.to));
        }

        let precision = self.config.precision;
        let display = format_result(result, &canonical.to, precision);
        let text = format_record(
            canonical.category,
            canonical.value,
            &canonical.from,
            result,
            &canonical.to,
            precision,
        );

        debug!(category = %canonical.category, from = %canonical.from, to = %canonical.to,
            value = canonical.value, result, "converted");

        self.history.push(ConversionRecord {
            category: canonical.category,
            value: canonical.value,
            from: canonical.from.clone(),
            to: canonical.to.clone(),
            result,
            text: text.clone(),
        });

        Ok(Conversion {
            request: canonical,
            result,
            display,
            record: text,
        })
    }

    /// Parse and run a free-text query such as "10 km to mi"
    pub fn convert_query(&mut self, query: &str) -> Result<Conversion, Notice> {
        let parsed = parse_query(query)?;
        let request = ConversionRequest::new(parsed.category, parsed.value, parsed.from, parsed.to);
        self.convert(&request)
    }

    /// Re-run the last recorded request with source and target exchanged
    ///
    /// The entered value is kept: after "1 Kilometers → Meters" this converts
    /// 1 Meters to Kilometers. `None` when nothing has been recorded yet.
    pub fn swap_last(&mut self) -> Option<Result<Conversion, Notice>> {
        let last = self.history.last()?;
        let request = ConversionRequest::new(last.category, last.value, last.from.clone(), last.to.clone())
            .swapped();
        Some(self.convert(&request))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_core::{codes, Severity};

    #[test]
    fn test_convert_records_history() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Length, 1.0, "Kilometers", "Meters");
        let conversion = session.convert(&request).unwrap();

        assert_eq!(conversion.result, 1000.0);
        assert_eq!(conversion.display, "1000.0000 Meters");
        assert_eq!(conversion.record, "1 Kilometers → 1000.0000 Meters (Length)");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().last().unwrap().text, conversion.record);
    }

    #[test]
    fn test_convert_resolves_aliases() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Temperature, 100.0, "c", "°F");
        let conversion = session.convert(&request).unwrap();
        assert_eq!(conversion.request.from, "Celsius");
        assert_eq!(conversion.request.to, "Fahrenheit");
        assert_eq!(conversion.display, "212.0000 Fahrenheit");
    }

    #[test]
    fn test_same_unit_warns_and_skips_history() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Length, 5.0, "Meters", "m");
        let notice = session.convert(&request).unwrap_err();
        assert_eq!(notice.code, codes::SAME_UNIT);
        assert_eq!(notice.severity, Severity::Warning);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_unknown_unit_is_error() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Length, 1.0, "Meters", "Lightyears");
        let notice = session.convert(&request).unwrap_err();
        assert_eq!(notice.code, codes::UNKNOWN_UNIT);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Weight, f64::NAN, "Kilograms", "Grams");
        let notice = session.convert(&request).unwrap_err();
        assert_eq!(notice.code, codes::INVALID_VALUE);
    }

    #[test]
    fn test_precision_from_config() {
        let mut session = Session::new(SessionConfig::default().with_precision(2));
        let request = ConversionRequest::new(Category::Length, 1.0, "Miles", "Kilometers");
        let conversion = session.convert(&request).unwrap();
        assert_eq!(conversion.display, "1.61 Kilometers");
    }

    #[test]
    fn test_recent_history_limit() {
        let mut session = Session::default();
        for v in 1..=8 {
            let request = ConversionRequest::new(Category::Weight, v as f64, "Kilograms", "Grams");
            session.convert(&request).unwrap();
        }
        let recent = session.recent_history();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].value, 8.0);
        assert_eq!(recent[4].value, 4.0);
        assert_eq!(session.history().len(), 8);
    }

    #[test]
    fn test_convert_query() {
        let mut session = Session::default();
        let conversion = session.convert_query("2 acres to ha").unwrap();
        assert_eq!(conversion.request.category, Category::Area);
        assert_eq!(conversion.display, "0.8094 Hectares");

        let notice = session.convert_query("2 acres").unwrap_err();
        assert_eq!(notice.code, codes::PARSE_ERROR);
    }

    #[test]
    fn test_swapped_request() {
        let request = ConversionRequest::new(Category::Speed, 10.0, "mph", "km/h");
        let swapped = request.swapped();
        assert_eq!(swapped.from, "km/h");
        assert_eq!(swapped.to, "mph");
        assert_eq!(swapped.swapped(), request);
    }

    #[test]
    fn test_swap_last() {
        let mut session = Session::default();
        assert!(session.swap_last().is_none());

        session.convert(&ConversionRequest::new(Category::Length, 1.0, "Kilometers", "Meters")).unwrap();
        let back = session.swap_last().unwrap().unwrap();
        assert_eq!(back.request.value, 1.0);
        assert_eq!(back.request.from, "Meters");
        assert_eq!(back.request.to, "Kilometers");
        assert_eq!(back.result, 0.001);
        assert_eq!(back.record, "1 Meters → 0.0010 Kilometers (Length)");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_overflow_not_recorded() {
        let mut session = Session::default();
        let request = ConversionRequest::new(Category::Area, 1e308, "Square Miles", "Square Meters");
        let notice = session.convert(&request).unwrap_err();
        assert_eq!(notice.code, codes::OUT_OF_RANGE);
        assert_eq!(notice.severity, Severity::Error);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_convert_query_unknown_source() {
        let mut session = Session::default();
        let notice = session.convert_query("1 Lightyears to m").unwrap_err();
        assert_eq!(notice.code, codes::UNKNOWN_UNIT);
        assert!(notice.message.contains("Lightyears"));
        assert!(session.history().is_empty());
    }
}
