//! OKR table recognition and row extraction.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::{OkrRecord, Page, StatusColor, Table, TableRow};

/// Number of columns in the OKR schema.
pub const FIELD_COUNT: usize = 6;

/// Recognizes tables matching the fixed OKR schema.
///
/// A table matches iff its header row has exactly [`FIELD_COUNT`] columns
/// and the concatenated header text contains the schema keywords in order,
/// case-insensitively, with arbitrary separators.
pub struct SchemaMatcher {
    header_pattern: Regex,
}

impl SchemaMatcher {
    /// Create a matcher with the OKR header pattern.
    pub fn new() -> Self {
        Self {
            header_pattern: Regex::new(
                r"(?i)okrs?.*projects?.*owners?.*stakeholders?.*status.*deadlines?",
            )
            .unwrap(),
        }
    }

    /// Check whether a table matches the OKR schema.
    pub fn is_schema_table(&self, table: &Table) -> bool {
        let Some(header) = table.header() else {
            return false;
        };
        if header.cells.len() != FIELD_COUNT {
            return false;
        }
        let header_str: String = header.cells.iter().map(|c| c.text.as_str()).collect();
        self.header_pattern.is_match(&header_str)
    }

    /// Extract OKR records from one page, pairing rows with the page's
    /// indicator colors.
    ///
    /// All data rows from the page's schema tables, in table-row order, are
    /// paired 1:1 with `colors`. A count mismatch means the indicator column
    /// and the table have drifted apart; that is surfaced as
    /// [`Error::StructuralMisalignment`] rather than silently clipped.
    /// Pages without a schema table yield no records and ignore `colors`.
    pub fn extract_page_rows(
        &self,
        page: &Page,
        colors: &[Option<StatusColor>],
    ) -> Result<Vec<OkrRecord>> {
        let mut records = Vec::new();
        let mut matched_any = false;

        for table in &page.tables {
            if !self.is_schema_table(table) {
                log::debug!("page {}: skipping non-schema table", page.number);
                continue;
            }
            matched_any = true;
            extract_table_rows(table, page.number, &mut records);
        }

        if !matched_any {
            return Ok(records);
        }

        if records.len() != colors.len() {
            return Err(Error::StructuralMisalignment {
                page: page.number,
                indicators: colors.len(),
                rows: records.len(),
            });
        }
        for (record, color) in records.iter_mut().zip(colors) {
            record.progress = *color;
        }
        Ok(records)
    }
}

impl Default for SchemaMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the data rows of one schema table, applying fill-forward.
fn extract_table_rows(table: &Table, page: u32, out: &mut Vec<OkrRecord>) {
    let mut prev: Option<[String; FIELD_COUNT]> = None;

    for row in table.body() {
        let fields = resolve_fields(row, prev.as_ref(), page);
        out.push(OkrRecord {
            page,
            okrs: fields[0].clone(),
            projects: fields[1].clone(),
            owner: fields[2].clone(),
            stakeholders: fields[3].clone(),
            status: fields[4].clone(),
            deadline: fields[5].clone(),
            progress: None,
            team: None,
            total_members: None,
        });
        prev = Some(fields);
    }
}

/// Resolve the six field values of a row, substituting empty cells with the
/// corresponding value from the previously emitted row of the same table.
fn resolve_fields(
    row: &TableRow,
    prev: Option<&[String; FIELD_COUNT]>,
    page: u32,
) -> [String; FIELD_COUNT] {
    std::array::from_fn(|i| {
        let text = row.cells.get(i).map(|c| c.text.as_str()).unwrap_or("");
        if text.is_empty() {
            match prev {
                Some(p) => p[i].clone(),
                None => {
                    // First data row has no fill-forward source; keep the
                    // gap rather than rejecting the whole deck.
                    log::warn!(
                        "page {page}: empty cell in column {i} of the first data row"
                    );
                    String::new()
                }
            }
        } else {
            clean_cell_text(text)
        }
    })
}

/// NFC-normalize cell text and drop trailing whitespace.
fn clean_cell_text(text: &str) -> String {
    text.nfc().collect::<String>().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    fn schema_header() -> Vec<&'static str> {
        vec!["OKRs", "Projects", "Owner", "Stakeholders", "Status", "Deadline"]
    }

    #[test]
    fn test_is_schema_table() {
        let matcher = SchemaMatcher::new();

        let table = Table::from_rows([schema_header()]);
        assert!(matcher.is_schema_table(&table));

        // Plural/singular and separator variation still matches.
        let table = Table::from_rows([vec![
            "OKR", "Project", "Owners", "Stakeholders", "Status:", "Deadlines",
        ]]);
        assert!(matcher.is_schema_table(&table));

        // Wrong column count.
        let table = Table::from_rows([vec!["OKRs", "Projects", "Owner"]]);
        assert!(!matcher.is_schema_table(&table));

        // Right count, wrong keywords.
        let table = Table::from_rows([vec!["A", "B", "C", "D", "E", "F"]]);
        assert!(!matcher.is_schema_table(&table));

        assert!(!matcher.is_schema_table(&Table::new()));
    }

    #[test]
    fn test_fill_forward() {
        let matcher = SchemaMatcher::new();
        let mut page = Page::new(4);
        page.add_table(Table::from_rows([
            schema_header(),
            vec!["A", "B", "C", "D", "E", "F"],
            vec!["", "Y", "", "", "", ""],
        ]));

        let records = matcher
            .extract_page_rows(&page, &[None, None])
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].okrs, "A");
        assert_eq!(records[1].projects, "Y");
        assert_eq!(records[1].owner, "C");
        assert_eq!(records[1].deadline, "F");
    }

    #[test]
    fn test_color_pairing() {
        let matcher = SchemaMatcher::new();
        let mut page = Page::new(2);
        page.add_table(Table::from_rows([
            schema_header(),
            vec!["1. Grow", "Launch", "Ana", "Ben", "On track", "March 5"],
        ]));

        let records = matcher
            .extract_page_rows(&page, &[Some(StatusColor::Green)])
            .unwrap();
        assert_eq!(records[0].progress, Some(StatusColor::Green));
        assert_eq!(records[0].page, 2);
    }

    #[test]
    fn test_misalignment_is_surfaced() {
        let matcher = SchemaMatcher::new();
        let mut page = Page::new(9);
        page.add_table(Table::from_rows([
            schema_header(),
            vec!["A", "B", "C", "D", "E", "F"],
        ]));

        let err = matcher
            .extract_page_rows(&page, &[Some(StatusColor::Green), Some(StatusColor::Red)])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::StructuralMisalignment {
                page: 9,
                indicators: 2,
                rows: 1
            }
        ));
    }

    #[test]
    fn test_page_without_schema_table() {
        let matcher = SchemaMatcher::new();
        let mut page = Page::new(3);
        page.add_table(Table::from_rows([vec!["A", "B"]]));

        // Indicator colors on a non-table page are ignored, not an error.
        let records = matcher
            .extract_page_rows(&page, &[Some(StatusColor::Red)])
            .unwrap();
        assert!(records.is_empty());
    }
}
