//! Output formats for extracted datasets.

pub mod csv;

pub use csv::{write_csv, write_csv_to, COLUMNS};
