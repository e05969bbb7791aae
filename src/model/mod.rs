//! Document model for slide-deck content.
//!
//! These types form the in-process boundary with the document provider:
//! a loader parses the underlying file format and fills in a [`Document`],
//! which the extraction engine consumes read-only.

mod document;
mod record;
mod shape;
mod table;

pub use document::{DeckMetadata, Document, Page};
pub use record::{
    DepartmentDeclaration, MemberCountDeclaration, OkrRecord, StatusColor,
};
pub use shape::{Fill, Position, Shape, ShapeKind};
pub use table::{Cell, Table, TableRow};
