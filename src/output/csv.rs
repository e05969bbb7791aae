//! CSV materialization of extracted datasets.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::extract::Extraction;

/// Output column order, header row first.
pub const COLUMNS: [&str; 11] = [
    "PageNumber",
    "OKRs",
    "Projects",
    "Owner",
    "Stakeholders",
    "Status",
    "Deadline",
    "ProgressColor",
    "Team",
    "TotalMembers",
    "MeetingDate",
];

/// Write an extraction to a CSV file.
pub fn write_csv<P: AsRef<Path>>(extraction: &Extraction, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(extraction, file)
}

/// Write an extraction as CSV to any writer.
///
/// One row per record; unreconciled fields are written as empty strings.
/// The meeting date repeats on every row so the dataset stays flat.
pub fn write_csv_to<W: Write>(extraction: &Extraction, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(COLUMNS)?;

    for record in &extraction.records {
        out.write_record([
            record.page.to_string().as_str(),
            &record.okrs,
            &record.projects,
            &record.owner,
            &record.stakeholders,
            &record.status,
            &record.deadline,
            record.progress.map(|c| c.as_str()).unwrap_or(""),
            record.team.as_deref().unwrap_or(""),
            record
                .total_members
                .map(|n| n.to_string())
                .as_deref()
                .unwrap_or(""),
            &extraction.meeting_date,
        ])?;
    }
    out.flush()?;
    Ok(())
}
