//! Grid cell colors.
//!
//! | Cell | Class | Color |
//! |------|-------|-------|
//! | `Dropped` | grey | (128, 128, 128) |
//! | `Color(1)` | red | (220, 80, 80) |
//! | `Color(2)` | blue | (80, 120, 220) |
//! | `Color(3)` | yellow | (240, 220, 80) |
//! | `Color(4)` | green | (100, 220, 120) |
//! | `Color(5)` | purple | (200, 120, 220) |
//! | `Color(6)` | orange | (255, 165, 0) |

use crate::fb::{CellStyle, Rgb};
use crate::types::Cell;

/// Background of the play area.
pub const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

const BLOCK: char = '█';
const DOT: char = '·';

/// Foreground color for a display class, None for the empty class.
pub fn class_color(class: &str) -> Option<Rgb> {
    let rgb = match class {
        "grey" => Rgb::new(128, 128, 128),
        "red" => Rgb::new(220, 80, 80),
        "blue" => Rgb::new(80, 120, 220),
        "yellow" => Rgb::new(240, 220, 80),
        "green" => Rgb::new(100, 220, 120),
        "purple" => Rgb::new(200, 120, 220),
        "orange" => Rgb::new(255, 165, 0),
        _ => return None,
    };
    Some(rgb)
}

/// Glyph and style used to draw a grid cell.
pub fn style_for(cell: Cell) -> (char, CellStyle) {
    match class_color(cell.class_name()) {
        Some(fg) => {
            let style = CellStyle::plain(fg, FIELD_BG);
            // Falling and spawned pieces stand out from the stack
            let style = if matches!(cell, Cell::Color(_)) {
                style.bold()
            } else {
                style
            };
            (BLOCK, style)
        }
        None => (DOT, CellStyle::plain(Rgb::new(90, 90, 100), FIELD_BG).dim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_draw_dim_dots() {
        let (ch, style) = style_for(Cell::Empty);
        assert_eq!(ch, DOT);
        assert!(style.dim);
    }

    #[test]
    fn dropped_cells_are_grey() {
        let (ch, style) = style_for(Cell::Dropped);
        assert_eq!(ch, BLOCK);
        assert_eq!(style.fg, Rgb::new(128, 128, 128));
        assert!(!style.bold);
    }

    #[test]
    fn every_color_index_has_a_distinct_color() {
        let colors: Vec<Rgb> = (1..=6).map(|i| style_for(Cell::Color(i)).1.fg).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn out_of_range_color_draws_as_empty() {
        assert_eq!(style_for(Cell::Color(9)).0, DOT);
    }
}
