//! Glyph table for the text renderer

use crate::sim::{Direction, Sprite};

pub const FOOD: char = '●';
pub const EMPTY: char = '·';
/// Segment whose sprite slot was never filled
pub const UNSET: char = '?';

/// Box-drawing glyph for a sprite slot
pub fn glyph(sprite: Option<Sprite>) -> char {
    let Some(sprite) = sprite else {
        return UNSET;
    };
    match sprite {
        Sprite::Head(Direction::Up) => '^',
        Sprite::Head(Direction::Right) => '>',
        Sprite::Head(Direction::Down) => 'v',
        Sprite::Head(Direction::Left) => '<',
        Sprite::Vertical => '│',
        Sprite::Horizontal => '─',
        Sprite::BendDownLeft => '┐',
        Sprite::BendLeftUp => '┘',
        Sprite::BendUpRight => '└',
        Sprite::BendRightDown => '┌',
        // Tail ends open toward the neighbor they trail
        Sprite::TailEnd(Direction::Up) => '╷',
        Sprite::TailEnd(Direction::Right) => '╴',
        Sprite::TailEnd(Direction::Down) => '╵',
        Sprite::TailEnd(Direction::Left) => '╶',
    }
}
