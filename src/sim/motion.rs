//! Head motion: continuous travel quantized to grid cells

use glam::{IVec2, Vec2};

use super::direction::Direction;
use super::grid::CellMapping;
use super::orient::{Sprite, head_sprite};

/// Owns the head's travel direction and continuous position
#[derive(Debug, Clone)]
pub struct MotionController {
    direction: Direction,
    /// Sprite for the last accepted direction
    head_sprite: Sprite,
    /// Unquantized head position in world space
    position: Vec2,
    /// Cell the head occupied after the previous advance
    last_cell: IVec2,
    /// Where the head is drawn: the world anchor of its current cell
    render_position: Vec2,
}

impl MotionController {
    /// Start at `position`, already settled in its cell so the first
    /// advance only fires a crossing once the head actually moves on.
    pub fn new<M: CellMapping>(position: Vec2, direction: Direction, grid: &M) -> Self {
        let last_cell = grid.to_cell(position);
        Self {
            direction,
            head_sprite: head_sprite(direction),
            position,
            last_cell,
            render_position: grid.cell_to_world(last_cell),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head_sprite(&self) -> Sprite {
        self.head_sprite
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn last_cell(&self) -> IVec2 {
        self.last_cell
    }

    pub fn render_position(&self) -> Vec2 {
        self.render_position
    }

    /// Turn toward `direction` unless it points straight back.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.dot(direction) == -1 {
            log::debug!(
                "Rejected reversal {} while heading {}",
                direction.as_str(),
                self.direction.as_str()
            );
            return false;
        }
        self.direction = direction;
        self.head_sprite = head_sprite(direction);
        true
    }

    /// Move `speed * dt` world units along the current direction.
    ///
    /// Returns the new cell when the head crossed into a different cell.
    /// The head's render position snaps to its cell on every call.
    pub fn advance<M: CellMapping>(&mut self, dt: f32, speed: f32, grid: &M) -> Option<IVec2> {
        self.position += self.direction.to_vec2() * speed * dt;
        let new_cell = grid.to_cell(self.position);
        let crossed = (new_cell != self.last_cell).then_some(new_cell);

        self.render_position = grid.cell_to_world(new_cell);
        self.last_cell = new_cell;
        crossed
    }
}
