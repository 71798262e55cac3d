//! Text rendering module
//!
//! Draws the food region as a block of glyphs, top row first. Each
//! segment is drawn from its sprite slot alone.

pub mod glyphs;

use glam::IVec2;

use crate::sim::{GameState, food};

pub use glyphs::glyph;

/// Glyph shown at `cell`: a segment, food, or empty ground
pub fn cell_glyph(state: &GameState, cell: IVec2) -> char {
    // Head-most segment wins when two share a cell
    if let Some(segment) = state.chain.segments().iter().find(|s| s.position == cell) {
        return glyph(segment.sprite);
    }
    if food::food_at(&state.items, cell).is_some() {
        return glyphs::FOOD;
    }
    glyphs::EMPTY
}

/// Render the food region as text, one line per row
pub fn render_frame(state: &GameState) -> String {
    let region = state.food_region;
    let mut frame = String::with_capacity(region.area() * 4);
    for y in (region.min.y..=region.max.y).rev() {
        for x in region.min.x..=region.max.x {
            frame.push(cell_glyph(state, IVec2::new(x, y)));
        }
        frame.push('\n');
    }
    frame
}

/// One-line status for the frame footer
pub fn status_line(state: &GameState) -> String {
    let mut line = format!(
        "tick {:>5}  len {:>3}  eaten {:>3}  heading {}",
        state.time_ticks,
        state.chain.len(),
        state.foods_eaten,
        state.motion.direction().as_str()
    );
    if state.is_paused() {
        line.push_str("  [paused]");
    }
    line
}
