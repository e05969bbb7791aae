//! Page-indexed metadata locators.
//!
//! Department names and member counts are declared on their own pages and
//! apply to the data rows that follow; the scanner records each declaration
//! with the page it was found on so the reconciler can join them by range.

use regex::Regex;

use crate::model::{DepartmentDeclaration, Document, MemberCountDeclaration};

/// Scanner for department, member-count, and meeting-date declarations.
///
/// Patterns are compiled once at construction.
pub struct DeclarationScanner {
    title_marker: Regex,
    team_name: Regex,
    member_count: Regex,
    meeting_date: Regex,
}

impl DeclarationScanner {
    /// Create a scanner with the standard declaration patterns.
    pub fn new() -> Self {
        Self {
            title_marker: Regex::new(r"(?i)presented\s*by").unwrap(),
            team_name: Regex::new(r"(?i).+team").unwrap(),
            member_count: Regex::new(r"^total\s*members?\s*:?\s*\D*?(\d+)").unwrap(),
            meeting_date: Regex::new(r"[A-Za-z]+\s*\d{1,2}\s*,?\s*\d{4}").unwrap(),
        }
    }

    /// Find department declarations across the document.
    ///
    /// A page is a title page iff any of its text elements matches the
    /// "presented by" marker; the first text element on that page matching
    /// "<name> team" is recorded with the page number. At most one
    /// declaration per page.
    pub fn find_departments(
        &self,
        document: &Document,
        include_hidden: bool,
    ) -> Vec<DepartmentDeclaration> {
        let mut declarations = Vec::new();
        for page in document.visible_pages(include_hidden) {
            let is_title_page = page
                .texts()
                .any(|t| self.title_marker.is_match(t.trim()));
            if !is_title_page {
                continue;
            }
            if let Some(name) = page
                .texts()
                .map(str::trim)
                .find(|t| self.team_name.is_match(t))
            {
                log::debug!("page {}: department \"{}\"", page.number, name);
                declarations.push(DepartmentDeclaration {
                    name: name.to_string(),
                    page: page.number,
                });
            }
        }
        declarations
    }

    /// Find member-count declarations across the document.
    ///
    /// The pattern is anchored at the start of the lower-cased, trimmed
    /// text; the digit run parses to the count. At most one declaration
    /// per page.
    pub fn find_member_counts(
        &self,
        document: &Document,
        include_hidden: bool,
    ) -> Vec<MemberCountDeclaration> {
        let mut declarations = Vec::new();
        for page in document.visible_pages(include_hidden) {
            let found = page.texts().find_map(|t| {
                let text = t.trim().to_lowercase();
                self.member_count
                    .captures(&text)
                    .and_then(|c| c[1].parse::<u32>().ok())
            });
            if let Some(count) = found {
                log::debug!("page {}: member count {}", page.number, count);
                declarations.push(MemberCountDeclaration {
                    page: page.number,
                    count,
                });
            }
        }
        declarations
    }

    /// Find the meeting date on the document's first page.
    ///
    /// Returns the whole trimmed text of the first text element containing
    /// a "<month-word> <day>, <year>" token, or `"No Date Found"`.
    pub fn find_meeting_date(&self, document: &Document) -> String {
        document
            .pages
            .first()
            .and_then(|page| {
                page.texts()
                    .map(str::trim)
                    .find(|t| self.meeting_date.is_match(t))
            })
            .map(str::to_string)
            .unwrap_or_else(|| "No Date Found".to_string())
    }
}

impl Default for DeclarationScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, Shape};

    fn title_page(number: u32, team: &str) -> Page {
        let mut page = Page::new(number);
        page.add_shape(Shape::text(format!("Presented by {team}")));
        page.add_shape(Shape::text(format!("{team} Team")));
        page
    }

    #[test]
    fn test_find_departments() {
        let mut doc = Document::new();
        doc.add_page(Page::new(1));
        doc.add_page(title_page(4, "Marketing"));
        doc.add_page(title_page(8, "Finance"));

        let scanner = DeclarationScanner::new();
        let depts = scanner.find_departments(&doc, false);
        assert_eq!(
            depts,
            vec![
                DepartmentDeclaration {
                    name: "Marketing Team".to_string(),
                    page: 4
                },
                DepartmentDeclaration {
                    name: "Finance Team".to_string(),
                    page: 8
                },
            ]
        );
    }

    #[test]
    fn test_one_declaration_per_page() {
        // Several marker shapes on one page must not duplicate the record.
        let mut page = title_page(5, "Ops");
        page.add_shape(Shape::text("presented by Ops again"));
        let mut doc = Document::new();
        doc.add_page(page);

        let depts = DeclarationScanner::new().find_departments(&doc, false);
        assert_eq!(depts.len(), 1);
    }

    #[test]
    fn test_hidden_pages_skipped() {
        let mut doc = Document::new();
        doc.add_page(title_page(2, "Shadow").hidden());

        let scanner = DeclarationScanner::new();
        assert!(scanner.find_departments(&doc, false).is_empty());
        assert_eq!(scanner.find_departments(&doc, true).len(), 1);
    }

    #[test]
    fn test_find_member_counts() {
        let mut page = Page::new(5);
        page.add_shape(Shape::text("Total Members: 38"));
        let mut other = Page::new(9);
        // Anchored at the start: a mention mid-text does not count.
        other.add_shape(Shape::text("we have Total Members: 12"));
        other.add_shape(Shape::text("total members - about 25"));
        let mut doc = Document::new();
        doc.add_page(page);
        doc.add_page(other);

        let counts = DeclarationScanner::new().find_member_counts(&doc, false);
        assert_eq!(
            counts,
            vec![
                MemberCountDeclaration { page: 5, count: 38 },
                MemberCountDeclaration { page: 9, count: 25 },
            ]
        );
    }

    #[test]
    fn test_meeting_date() {
        let mut page = Page::new(1);
        page.add_shape(Shape::text("Quarterly Review"));
        page.add_shape(Shape::text("May 22, 2025"));
        let mut doc = Document::new();
        doc.add_page(page);

        let scanner = DeclarationScanner::new();
        assert_eq!(scanner.find_meeting_date(&doc), "May 22, 2025");

        let empty = Document::new();
        assert_eq!(scanner.find_meeting_date(&empty), "No Date Found");
    }
}
