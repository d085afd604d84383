//! Session configuration

use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Decimal places used when displaying results
pub const DEFAULT_PRECISION: usize = 4;

/// Number of history entries shown by default
pub const DEFAULT_HISTORY_DISPLAY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Decimal places for result display
    pub precision: usize,
    /// How many records `History::display` returns
    pub history_display: usize,
    /// Maximum records retained; `None` keeps everything
    pub history_capacity: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            history_display: DEFAULT_HISTORY_DISPLAY,
            history_capacity: None,
        }
    }
}

impl SessionConfig {
    /// Read overrides from `UNITCONV_PRECISION`, `UNITCONV_HISTORY_DISPLAY`
    /// and `UNITCONV_HISTORY_CAPACITY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparsable values keep the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            precision: read_var(&lookup, "UNITCONV_PRECISION").unwrap_or(defaults.precision),
            history_display: read_var(&lookup, "UNITCONV_HISTORY_DISPLAY")
                .unwrap_or(defaults.history_display),
            history_capacity: read_var(&lookup, "UNITCONV_HISTORY_CAPACITY")
                .or(defaults.history_capacity),
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_history_display(mut self, count: usize) -> Self {
        self.history_display = count;
        self
    }

    pub fn with_history_capacity(mut self, capacity: Option<usize>) -> Self {
        self.history_capacity = capacity;
        self
    }
}

fn read_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}
