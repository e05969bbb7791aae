//! The extraction and reconciliation engine.
//!
//! One linear pass over the document's pages pairs schema-table rows with
//! classified indicator colors, then the metadata declarations found across
//! the document are joined onto the pooled rows by page-range containment.

pub mod color;
pub mod geometry;
pub mod metadata;
pub mod reconcile;
pub mod table;

pub use metadata::DeclarationScanner;
pub use table::SchemaMatcher;

use crate::error::Result;
use crate::model::{Document, OkrRecord, StatusColor};
use crate::report::RecognitionReport;

/// Options for extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Whether hidden pages participate in the scan
    pub include_hidden: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults (hidden pages skipped).
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude hidden pages.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// The result of extracting a document.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// All extracted records, fully reconciled, in page order
    pub records: Vec<OkrRecord>,

    /// Meeting date from the deck's first page
    pub meeting_date: String,

    /// Every table encountered during the scan
    pub report: RecognitionReport,
}

/// Runs the extraction pipeline over a document.
pub struct Extractor {
    options: ExtractOptions,
    matcher: SchemaMatcher,
    scanner: DeclarationScanner,
}

impl Extractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create an extractor with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            options,
            matcher: SchemaMatcher::new(),
            scanner: DeclarationScanner::new(),
        }
    }

    /// Extract and reconcile all OKR records from a document.
    pub fn extract(&self, document: &Document) -> Result<Extraction> {
        let include_hidden = self.options.include_hidden;
        let mut records = Vec::new();
        let mut report = RecognitionReport::new();

        for page in document.visible_pages(include_hidden) {
            let mut has_schema_table = false;
            for table in &page.tables {
                let matched = self.matcher.is_schema_table(table);
                has_schema_table |= matched;
                report.record(page.number, matched);
            }

            // The indicator column only means anything next to an OKR
            // table, so the geometry pass is skipped on other pages.
            let colors = if has_schema_table {
                page_indicator_colors(&page.shapes)
            } else {
                Vec::new()
            };

            records.extend(self.matcher.extract_page_rows(page, &colors)?);
        }
        log::debug!("extracted {} record(s) before reconciliation", records.len());

        let departments: Vec<(u32, String)> = self
            .scanner
            .find_departments(document, include_hidden)
            .into_iter()
            .map(|d| (d.page, d.name))
            .collect();
        let member_counts: Vec<(u32, u32)> = self
            .scanner
            .find_member_counts(document, include_hidden)
            .into_iter()
            .map(|m| (m.page, m.count))
            .collect();

        for record in &mut records {
            record.team = reconcile::assign_by_range(record.page, &departments);
            record.total_members = reconcile::assign_by_range(record.page, &member_counts);
        }

        Ok(Extraction {
            records,
            meeting_date: self.scanner.find_meeting_date(document),
            report,
        })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify the page's column-filtered indicator shapes, top to bottom.
fn page_indicator_colors(shapes: &[crate::model::Shape]) -> Vec<Option<StatusColor>> {
    let collected = geometry::collect_indicator_shapes(shapes);
    let ordered = geometry::order_and_filter_column(collected);
    ordered.iter().map(|s| color::classify(&s.fill)).collect()
}
