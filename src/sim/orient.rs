//! Segment orientation inference
//!
//! Sprites are derived from segment positions alone. Nothing about a
//! segment's heading is stored, so the sprites can never drift away from
//! the geometry they describe.

use glam::IVec2;

use super::chain::Chain;
use super::direction::Direction;

/// Every sprite a segment can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// Head facing the commanded direction
    Head(Direction),
    Vertical,
    Horizontal,
    /// Bend joining the cells below and to the left
    BendDownLeft,
    /// Bend joining the cells to the left and above
    BendLeftUp,
    /// Bend joining the cells above and to the right
    BendUpRight,
    /// Bend joining the cells to the right and below
    BendRightDown,
    /// Open tail end, oriented by the direction from its neighbor to the tip
    TailEnd(Direction),
}

/// Head sprite for the last commanded direction
pub fn head_sprite(direction: Direction) -> Sprite {
    Sprite::Head(direction)
}

/// Sprite for an interior segment at `current` between its tail-ward
/// neighbor `prev` and head-ward neighbor `next`
pub fn body_sprite(current: IVec2, prev: IVec2, next: IVec2) -> Option<Sprite> {
    if prev.x == next.x {
        Some(Sprite::Vertical)
    } else if prev.y == next.y {
        Some(Sprite::Horizontal)
    } else {
        bend_sprite(current, prev, next)
    }
}

/// Bend lookup keyed on the pair of normalized offsets from each neighbor
/// to the current cell. Either labeling of the pair maps to the same glyph.
pub fn bend_sprite(current: IVec2, prev: IVec2, next: IVec2) -> Option<Sprite> {
    use Direction::*;

    let from_next = Direction::from_offset(current - next)?;
    let from_prev = Direction::from_offset(current - prev)?;

    match (from_next, from_prev) {
        (Right, Up) | (Up, Right) => Some(Sprite::BendDownLeft),
        (Down, Right) | (Right, Down) => Some(Sprite::BendLeftUp),
        (Left, Down) | (Down, Left) => Some(Sprite::BendUpRight),
        (Up, Left) | (Left, Up) => Some(Sprite::BendRightDown),
        _ => None,
    }
}

/// Tail-end sprite from the tip and the segment right before it
pub fn tail_end_sprite(tip: IVec2, before_tip: IVec2) -> Option<Sprite> {
    Direction::from_offset(tip - before_tip).map(Sprite::TailEnd)
}

/// A segment whose sprite could not be inferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationGap {
    pub index: usize,
    pub position: IVec2,
}

/// Re-derive every sprite of the chain.
///
/// The head slot takes `head`. Interior slots and the tail tip are inferred
/// from positions; a slot whose geometry matches nothing keeps its previous
/// sprite and is reported in the returned list.
pub fn orient_chain(chain: &mut Chain, head: Sprite) -> Vec<OrientationGap> {
    let mut gaps = Vec::new();
    let len = chain.len();
    let segments = chain.segments_mut();

    segments[0].sprite = Some(head);

    for i in 1..len - 1 {
        let prev = segments[i + 1].position;
        let next = segments[i - 1].position;
        let current = segments[i].position;

        match body_sprite(current, prev, next) {
            Some(sprite) => segments[i].sprite = Some(sprite),
            None => {
                log::warn!(
                    "No body sprite for segment {} at {} (prev {}, next {})",
                    i,
                    current,
                    prev,
                    next
                );
                gaps.push(OrientationGap { index: i, position: current });
            }
        }
    }

    let tip = len - 1;
    match tail_end_sprite(segments[tip].position, segments[tip - 1].position) {
        Some(sprite) => segments[tip].sprite = Some(sprite),
        None => {
            log::warn!(
                "No tail-end sprite for tip at {} (before it {})",
                segments[tip].position,
                segments[tip - 1].position
            );
            gaps.push(OrientationGap { index: tip, position: segments[tip].position });
        }
    }

    gaps
}
