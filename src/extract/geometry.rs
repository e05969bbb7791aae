//! Geometric passes over indicator shapes.
//!
//! Indicator shapes are assumed thin and stacked in a single vertical
//! column beside the OKR table, so overlap is judged by vertical proximity
//! alone rather than bounding-box intersection.

use crate::model::Shape;

/// Vertical tolerance band for overlap resolution, in centimeters
/// (inclusive on both ends).
pub const OVERLAP_TOLERANCE_CM: f64 = 0.3;

/// Maximum deviation from the mean horizontal offset for a shape to count
/// as part of the indicator column, in centimeters.
pub const COLUMN_TOLERANCE_CM: f64 = 2.0;

/// Distance from the top edge of the page, in centimeters.
pub fn vertical_offset(shape: &Shape) -> f64 {
    shape.position.top_cm()
}

/// Distance from the left edge of the page, in centimeters.
pub fn horizontal_offset(shape: &Shape) -> f64 {
    shape.position.left_cm()
}

/// Find the index of an already-collected shape whose vertical offset is
/// within [`OVERLAP_TOLERANCE_CM`] of the candidate's.
pub fn resolve_overlap(shape: &Shape, collected: &[Shape]) -> Option<usize> {
    let candidate = vertical_offset(shape);
    collected
        .iter()
        .position(|s| (vertical_offset(s) - candidate).abs() <= OVERLAP_TOLERANCE_CM)
}

/// Collect the indicator shapes on a page, resolving overlaps.
///
/// Shapes are scanned in document (z) order; when a new indicator overlaps
/// one already collected, it replaces the existing entry in place. Later
/// shapes draw on top, so last-seen-wins keeps the foreground indicator.
pub fn collect_indicator_shapes(shapes: &[Shape]) -> Vec<Shape> {
    let mut collected: Vec<Shape> = Vec::new();
    for shape in shapes.iter().filter(|s| s.is_indicator()) {
        match resolve_overlap(shape, &collected) {
            Some(i) => {
                log::debug!(
                    "indicator at {:.2}cm replaces overlapping shape at {:.2}cm",
                    vertical_offset(shape),
                    vertical_offset(&collected[i])
                );
                collected[i] = shape.clone();
            }
            None => collected.push(shape.clone()),
        }
    }
    collected
}

/// Sort shapes into their on-page vertical order and drop strays.
///
/// Shapes are sorted ascending by vertical offset (stable, so collection
/// order breaks ties), then any shape whose horizontal offset deviates more
/// than [`COLUMN_TOLERANCE_CM`] from the mean is discarded as a decorative
/// shape outside the indicator column. An empty input yields an empty
/// output without touching the (undefined) mean.
pub fn order_and_filter_column(mut shapes: Vec<Shape>) -> Vec<Shape> {
    if shapes.is_empty() {
        return shapes;
    }

    shapes.sort_by(|a, b| vertical_offset(a).total_cmp(&vertical_offset(b)));

    let mean = shapes.iter().map(horizontal_offset).sum::<f64>() / shapes.len() as f64;
    let before = shapes.len();
    shapes.retain(|s| (horizontal_offset(s) - mean).abs() <= COLUMN_TOLERANCE_CM);
    if shapes.len() != before {
        log::debug!(
            "dropped {} shape(s) outside the indicator column (mean left {:.2}cm)",
            before - shapes.len(),
            mean
        );
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fill, Position, ShapeKind};

    fn indicator(top_cm: f64, left_cm: f64) -> Shape {
        Shape::new(
            ShapeKind::Indicator,
            Position::from_cm(top_cm, left_cm),
            Fill::Rgb(147, 196, 125),
        )
    }

    #[test]
    fn test_overlap_inclusive_boundary() {
        let collected = vec![indicator(5.0, 1.0)];
        // Exactly 0.3cm apart: still overlapping.
        assert_eq!(resolve_overlap(&indicator(5.3, 1.0), &collected), Some(0));
        assert_eq!(resolve_overlap(&indicator(4.7, 1.0), &collected), Some(0));
        // 0.31cm apart: distinct.
        assert_eq!(resolve_overlap(&indicator(5.31, 1.0), &collected), None);
    }

    #[test]
    fn test_collect_replaces_overlapping() {
        let shapes = vec![
            indicator(2.0, 1.0).with_text("under"),
            Shape::text("not an indicator"),
            indicator(2.1, 1.0).with_text("over"),
            indicator(4.0, 1.0),
        ];
        let collected = collect_indicator_shapes(&shapes);
        assert_eq!(collected.len(), 2);
        // Foreground shape replaced the underlapping one in its slot.
        assert_eq!(collected[0].text.as_deref(), Some("over"));
    }

    #[test]
    fn test_order_and_filter_empty() {
        assert!(order_and_filter_column(Vec::new()).is_empty());
    }

    #[test]
    fn test_order_and_filter_column() {
        let shapes = vec![
            indicator(6.0, 1.2),
            indicator(2.0, 1.0),
            // Right of the column: a stray decoration.
            indicator(4.0, 6.0),
            indicator(4.5, 1.1),
        ];
        let ordered = order_and_filter_column(shapes);
        let tops: Vec<f64> = ordered.iter().map(vertical_offset).collect();
        // Mean left is ~2.3cm; only the stray deviates by more than 2cm.
        assert_eq!(ordered.len(), 3);
        assert!(tops.windows(2).all(|w| w[0] <= w[1]));
        assert!(ordered.iter().all(|s| horizontal_offset(s) < 2.0));
    }
}
