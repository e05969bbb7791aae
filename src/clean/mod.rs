//! Text normalizers and the dataset cleanup pass.
//!
//! Extraction preserves cell text verbatim; this module is the second pass
//! that normalizes the deadline and numeric-prefix columns of a persisted
//! dataset for downstream reporting.

use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;
use regex::Regex;

use crate::error::{Error, Result};

/// Deadline value used when no date token is present.
pub const ONGOING: &str = "Ongoing";

/// Columns the cleanup pass rewrites.
const DEADLINE_COLUMN: &str = "Deadline";
const NUMERIC_PREFIX_COLUMNS: [&str; 2] = ["OKRs", "Projects"];

/// Normalize a deadline to its "<month-word> <day>" token.
///
/// Returns the first such token in the trimmed text, or [`ONGOING`] when
/// there is none.
pub fn normalize_deadline(pattern: &Regex, text: &str) -> String {
    match pattern.find(text.trim()) {
        Some(m) => m.as_str().to_string(),
        None => ONGOING.to_string(),
    }
}

/// Strip a leading run of digits, periods, and spaces.
pub fn normalize_leading_numeric(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
}

/// Cleans persisted OKR datasets.
///
/// Rewrites the `Deadline`, `OKRs`, and `Projects` columns, addressed by
/// header name; every other column passes through untouched.
pub struct CsvCleaner {
    date_token: Regex,
}

impl CsvCleaner {
    /// Create a cleaner with the standard date-token pattern.
    pub fn new() -> Self {
        Self {
            date_token: Regex::new(r"[A-Za-z]+\s*\d{1,2}").unwrap(),
        }
    }

    /// Clean a dataset from `reader` into `writer`.
    pub fn clean<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<()> {
        let mut input = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut output = csv::Writer::from_writer(writer);

        let headers = input.headers()?.clone();
        let deadline_idx = column_index(&headers, DEADLINE_COLUMN)?;
        let numeric_idxs: Vec<usize> = NUMERIC_PREFIX_COLUMNS
            .iter()
            .map(|name| column_index(&headers, name))
            .collect::<Result<_>>()?;

        output.write_record(&headers)?;
        for (row_num, record) in input.records().enumerate() {
            let record = record?;
            if record.len() < headers.len() {
                return Err(Error::ShortRow(row_num as u64 + 1));
            }
            let cleaned: StringRecord = record
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    if i == deadline_idx {
                        normalize_deadline(&self.date_token, field)
                    } else if numeric_idxs.contains(&i) {
                        normalize_leading_numeric(field).to_string()
                    } else {
                        field.to_string()
                    }
                })
                .collect();
            output.write_record(&cleaned)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Clean a dataset file into another file.
    pub fn clean_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<()> {
        let reader = std::fs::File::open(input)?;
        let writer = std::fs::File::create(output)?;
        self.clean(reader, writer)
    }

    /// Normalize one deadline value.
    pub fn deadline(&self, text: &str) -> String {
        normalize_deadline(&self.date_token, text)
    }
}

impl Default for CsvCleaner {
    fn default() -> Self {
        Self::new()
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}
