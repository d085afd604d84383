//! Session conversion history
//!
//! Append-only. Records are never edited or removed individually; with a
//! capacity set, the oldest record falls off when a new one arrives.

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
use unitconv_core::Category;

/// One completed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub category: Category,
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    /// Formatted description, e.g. "1 Kilometers → 1000.0000 Meters (Length)"
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    records: VecDeque<ConversionRecord>,
    capacity: Option<usize>,
}

impl History {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// History retaining at most `capacity` records (`None` = unbounded)
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, record: ConversionRecord) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            while self.records.len() >= cap {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// Up to `n` records, most recent first
    pub fn recent(&self, n: usize) -> Vec<&ConversionRecord> {
        self.records.iter().rev().take(n).collect()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&ConversionRecord> {
        self.records.back()
    }

    /// All retained records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
