//! Output-side record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classified status traffic-light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusColor {
    /// On track
    Green,
    /// At risk
    Yellow,
    /// Off track
    Red,
}

impl StatusColor {
    /// The color label as it appears in the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Green => "Green",
            StatusColor::Yellow => "Yellow",
            StatusColor::Red => "Red",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted OKR status-report row.
///
/// Built from a schema table row, then progressively enriched: the status
/// color is attached during the page scan, and the team / member-count
/// fields stay `None` until range reconciliation fills them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkrRecord {
    /// Page the row was extracted from (1-indexed)
    pub page: u32,

    /// Objective text
    pub okrs: String,

    /// Project text
    pub projects: String,

    /// Owner name(s)
    pub owner: String,

    /// Stakeholder name(s)
    pub stakeholders: String,

    /// Status text
    pub status: String,

    /// Deadline text
    pub deadline: String,

    /// Classified indicator color, if the fill was classifiable
    pub progress: Option<StatusColor>,

    /// Department name, filled in by reconciliation
    pub team: Option<String>,

    /// Department member count, filled in by reconciliation
    pub total_members: Option<u32>,
}

/// A department name and the page where its title text was found.
///
/// The declaration's scope runs from its page (exclusive) to the next
/// declaration's page (exclusive), or to end-of-document for the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentDeclaration {
    /// Department name as it appeared on the title page
    pub name: String,

    /// Page number of the title page (1-indexed)
    pub page: u32,
}

/// A department member count and the page where it was declared.
///
/// Same interval-scope semantics as [`DepartmentDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCountDeclaration {
    /// Page number of the declaring page (1-indexed)
    pub page: u32,

    /// Declared member count
    pub count: u32,
}
