//! Document-level types.

use super::{Shape, Table};
use serde::{Deserialize, Serialize};

/// A slide-deck document provided by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, page count)
    #[serde(default)]
    pub metadata: DeckMetadata,

    /// Pages in the document, in presentation order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: DeckMetadata::default(),
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over pages, skipping hidden ones unless `include_hidden`.
    pub fn visible_pages(&self, include_hidden: bool) -> impl Iterator<Item = &Page> {
        self.pages
            .iter()
            .filter(move |p| include_hidden || !p.hidden)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Deck-level metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckMetadata {
    /// Deck title, if the loader recovered one
    pub title: Option<String>,

    /// Total number of pages as reported by the loader
    pub page_count: u32,
}

/// A single page (slide) in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Whether the page is hidden in the deck
    #[serde(default)]
    pub hidden: bool,

    /// Shapes on the page, in document (z) order
    #[serde(default)]
    pub shapes: Vec<Shape>,

    /// Grid tables on the page
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Page {
    /// Create a new visible page with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            hidden: false,
            shapes: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Mark the page hidden and return self.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Add a shape to the page.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Add a table to the page.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Iterate over the text content of shapes that carry text.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| s.text.as_deref())
    }

    /// Check if the page is empty (no shapes and no tables).
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.tables.is_empty()
    }
}
