//! Shape-level types.

use serde::{Deserialize, Serialize};

/// EMU per centimeter. Shape offsets arrive from the loader in English
/// Metric Units (914,400 per inch); the engine works in centimeters.
pub const EMU_PER_CM: f64 = 360_000.0;

/// A shape on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// What kind of shape this is
    pub kind: ShapeKind,

    /// Offset of the shape from the page edges
    pub position: Position,

    /// Fill descriptor
    #[serde(default)]
    pub fill: Fill,

    /// Text content, if the shape carries a text frame
    #[serde(default)]
    pub text: Option<String>,
}

impl Shape {
    /// Create a new shape without text.
    pub fn new(kind: ShapeKind, position: Position, fill: Fill) -> Self {
        Self {
            kind,
            position,
            fill,
            text: None,
        }
    }

    /// Create a plain text shape at the page origin.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::Other,
            position: Position::default(),
            fill: Fill::Unresolved,
            text: Some(text.into()),
        }
    }

    /// Set text content and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check if this shape is a status-indicator shape.
    pub fn is_indicator(&self) -> bool {
        self.kind == ShapeKind::Indicator
    }
}

/// The kind of a shape, as classified by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// A small auto shape used as a status traffic light
    Indicator,
    /// Anything else (text boxes, pictures, decorations)
    Other,
}

/// Offsets of a shape from the top-left corner of its page, in EMU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the top edge of the page
    pub top: i64,

    /// Distance from the left edge of the page
    pub left: i64,
}

impl Position {
    /// Create a position from raw EMU offsets.
    pub fn new(top: i64, left: i64) -> Self {
        Self { top, left }
    }

    /// Create a position from centimeter offsets, rounded to whole EMU.
    pub fn from_cm(top_cm: f64, left_cm: f64) -> Self {
        Self {
            top: (top_cm * EMU_PER_CM).round() as i64,
            left: (left_cm * EMU_PER_CM).round() as i64,
        }
    }

    /// Distance from the top edge of the page, in centimeters.
    pub fn top_cm(&self) -> f64 {
        self.top as f64 / EMU_PER_CM
    }

    /// Distance from the left edge of the page, in centimeters.
    pub fn left_cm(&self) -> f64 {
        self.left as f64 / EMU_PER_CM
    }
}

/// Fill descriptor for a shape.
///
/// The loader resolves solid fills to an explicit color when it can, falls
/// back to a theme palette slot when the color is defined by reference, and
/// reports `Unresolved` for anything else (gradients, pictures, no fill).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// An explicit color triple
    Rgb(u8, u8, u8),
    /// A reference into the deck's theme-color palette
    Theme(u32),
    /// Fill could not be resolved to a color
    #[default]
    Unresolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_cm_round_trip() {
        let pos = Position::from_cm(2.5, 10.0);
        assert_eq!(pos.top, 900_000);
        assert!((pos.top_cm() - 2.5).abs() < 1e-9);
        assert!((pos.left_cm() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_text() {
        let shape = Shape::text("Total Members: 25");
        assert!(!shape.is_indicator());
        assert_eq!(shape.text.as_deref(), Some("Total Members: 25"));
    }

    #[test]
    fn test_fill_default() {
        assert_eq!(Fill::default(), Fill::Unresolved);
    }
}
