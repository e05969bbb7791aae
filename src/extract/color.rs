//! Status color classification.
//!
//! Indicator fills come in two flavors: an explicit color triple, or a
//! reference into the deck's theme palette. Explicit colors are matched to
//! the nearest of three reference colors by Euclidean distance; theme slots
//! use a fixed lookup with Red as the fallback.

use crate::model::{Fill, StatusColor};

/// Reference colors, in tie-break priority order.
const REFERENCES: [(StatusColor, (u8, u8, u8)); 3] = [
    (StatusColor::Green, (147, 196, 125)),
    (StatusColor::Yellow, (255, 229, 153)),
    (StatusColor::Red, (213, 97, 97)),
];

/// Theme palette slot that maps to Green.
const THEME_SLOT_GREEN: u32 = 9;
/// Theme palette slot that maps to Yellow.
const THEME_SLOT_YELLOW: u32 = 10;

/// Classify a fill descriptor into a status color.
///
/// Returns `None` for an unresolved fill; the caller records the row as
/// having no classified status.
pub fn classify(fill: &Fill) -> Option<StatusColor> {
    match *fill {
        Fill::Rgb(r, g, b) => Some(nearest_reference((r, g, b))),
        Fill::Theme(slot) => Some(match slot {
            THEME_SLOT_GREEN => StatusColor::Green,
            THEME_SLOT_YELLOW => StatusColor::Yellow,
            _ => StatusColor::Red,
        }),
        Fill::Unresolved => None,
    }
}

/// The reference color nearest to `rgb` by Euclidean distance.
///
/// Exact ties resolve to the earlier entry in [`REFERENCES`]
/// (Green > Yellow > Red).
fn nearest_reference(rgb: (u8, u8, u8)) -> StatusColor {
    let mut best = REFERENCES[0].0;
    let mut best_dist = f64::INFINITY;
    for (color, reference) in REFERENCES {
        let d = distance(rgb, reference);
        if d < best_dist {
            best = color;
            best_dist = d;
        }
    }
    best
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let dr = a.0 as f64 - b.0 as f64;
    let dg = a.1 as f64 - b.1 as f64;
    let db = a.2 as f64 - b.2 as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}
