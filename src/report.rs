//! Recognition diagnostics.
//!
//! Useful for checking the table search against a new deck and catching
//! tables that were wrongly included or missed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of every table encountered during a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionReport {
    /// One entry per table, in scan order
    pub tables: Vec<TableSighting>,
}

/// One table seen during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSighting {
    /// Page the table was found on (1-indexed)
    pub page: u32,

    /// Whether the table matched the OKR schema
    pub matched: bool,
}

impl RecognitionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a table sighting.
    pub fn record(&mut self, page: u32, matched: bool) {
        self.tables.push(TableSighting { page, matched });
    }

    /// Total number of tables seen.
    pub fn total(&self) -> usize {
        self.tables.len()
    }

    /// Number of tables that matched the OKR schema.
    pub fn matches(&self) -> usize {
        self.tables.iter().filter(|t| t.matched).count()
    }
}

impl fmt::Display for RecognitionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sighting in &self.tables {
            if sighting.matched {
                writeln!(f, "OKR table on page {}", sighting.page)?;
            } else {
                writeln!(f, "Not an OKR table on page {}", sighting.page)?;
            }
        }
        write!(
            f,
            "\n{} total table(s) found, with {} match(es) for an OKR table.",
            self.total(),
            self.matches()
        )
    }
}
