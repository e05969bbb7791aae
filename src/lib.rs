//! # okrdeck
//!
//! Extraction engine for OKR status-report slide decks.
//!
//! okrdeck takes an in-memory slide-deck [`Document`] (pages, positioned
//! shapes, grid tables — supplied by a document-format loader) and produces
//! a flat tabular dataset: one row per OKR table entry, enriched with the
//! classified traffic-light status color and the department metadata
//! declared elsewhere in the deck.
//!
//! ## Quick Start
//!
//! ```no_run
//! use okrdeck::{extract, output};
//!
//! fn main() -> okrdeck::Result<()> {
//!     // A loader builds the Document; here it arrives as JSON.
//!     let doc = okrdeck::read_document("deck.json")?;
//!
//!     let extraction = extract(&doc)?;
//!     println!("{} record(s) extracted", extraction.records.len());
//!
//!     output::write_csv(&extraction, "okr_table_data.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Geometry**: deduplicate overlapping indicator shapes and order them
//!   into the vertical column beside the table
//! - **Color**: classify each indicator fill as Green/Yellow/Red by
//!   nearest-reference distance (or theme-slot lookup)
//! - **Tables**: recognize the 6-column OKR schema and extract rows with
//!   fill-forward for blank cells
//! - **Metadata**: locate department and member-count declarations and join
//!   them onto rows by page-range containment
//! - **Cleanup**: a second pass normalizes deadline and numeric-prefix
//!   columns of a persisted dataset

pub mod clean;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod report;

// Re-export commonly used types
pub use clean::CsvCleaner;
pub use error::{Error, Result};
pub use extract::{ExtractOptions, Extraction, Extractor};
pub use model::{
    Cell, DeckMetadata, DepartmentDeclaration, Document, Fill, MemberCountDeclaration, OkrRecord,
    Page, Position, Shape, ShapeKind, StatusColor, Table, TableRow,
};
pub use report::RecognitionReport;

use std::path::Path;

/// Extract and reconcile all OKR records from a document.
///
/// Hidden pages are skipped; use [`extract_with_options`] to include them.
pub fn extract(document: &Document) -> Result<Extraction> {
    Extractor::new().extract(document)
}

/// Extract with custom options.
///
/// # Example
///
/// ```no_run
/// use okrdeck::{extract_with_options, ExtractOptions};
///
/// # let doc = okrdeck::Document::new();
/// let extraction = extract_with_options(&doc, ExtractOptions::new().include_hidden(true))?;
/// # Ok::<(), okrdeck::Error>(())
/// ```
pub fn extract_with_options(document: &Document, options: ExtractOptions) -> Result<Extraction> {
    Extractor::with_options(options).extract(document)
}

/// Extract a document straight to a CSV file.
pub fn extract_to_csv<P: AsRef<Path>>(document: &Document, path: P) -> Result<Extraction> {
    let extraction = extract(document)?;
    output::write_csv(&extraction, path)?;
    Ok(extraction)
}

/// Read a JSON-serialized document from a file.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    document_from_reader(file)
}

/// Decode a JSON-serialized document from a reader.
pub fn document_from_reader<R: std::io::Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode a JSON-serialized document from a string.
pub fn document_from_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_json() {
        let json = r#"{
            "pages": [
                {
                    "number": 1,
                    "shapes": [
                        {
                            "kind": "other",
                            "position": { "top": 0, "left": 0 },
                            "text": "Presented by Ops"
                        },
                        {
                            "kind": "indicator",
                            "position": { "top": 720000, "left": 7920000 },
                            "fill": { "rgb": [147, 196, 125] }
                        }
                    ],
                    "tables": []
                }
            ]
        }"#;

        let doc = document_from_json(json).unwrap();
        assert_eq!(doc.page_count(), 1);
        let page = doc.get_page(1).unwrap();
        assert!(!page.hidden);
        assert_eq!(page.shapes.len(), 2);
        assert!(page.shapes[1].is_indicator());
        assert_eq!(page.shapes[1].fill, Fill::Rgb(147, 196, 125));
    }

    #[test]
    fn test_document_json_round_trip() {
        let mut doc = Document::new();
        let mut page = Page::new(1);
        page.add_shape(Shape::text("Total Members: 12"));
        page.add_table(Table::from_rows([vec!["a", "b"]]));
        doc.add_page(page);

        let json = serde_json::to_string(&doc).unwrap();
        let decoded = document_from_json(&json).unwrap();
        assert_eq!(decoded.page_count(), 1);
        assert_eq!(decoded.pages[0].tables[0].column_count(), 2);
    }

    #[test]
    fn test_document_from_invalid_json() {
        assert!(document_from_json("not json").is_err());
        assert!(document_from_json("{}").is_err());
    }

    #[test]
    fn test_extract_empty_document() {
        let extraction = extract(&Document::new()).unwrap();
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.meeting_date, "No Date Found");
        assert_eq!(extraction.report.total(), 0);
    }
}
