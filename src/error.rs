//! Error types for okrdeck library.

use std::io;
use thiserror::Error;

/// Result type alias for okrdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction and cleanup.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing the CSV dataset.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error decoding a JSON-serialized document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The indicator-shape count on a page does not match the number of
    /// data rows extracted from that page. Color assignment would be
    /// row-misaligned, so the extraction is aborted instead of clipped.
    #[error(
        "page {page}: {indicators} indicator shape(s) but {rows} table row(s); \
         cannot align status colors"
    )]
    StructuralMisalignment {
        /// Page number where the mismatch was detected (1-indexed).
        page: u32,
        /// Number of column-filtered indicator shapes on the page.
        indicators: usize,
        /// Number of data rows extracted from the page's OKR tables.
        rows: usize,
    },

    /// A required column is missing from a persisted dataset.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A persisted dataset row is shorter than its header.
    #[error("row {0} has fewer fields than the header")]
    ShortRow(u64),
}
