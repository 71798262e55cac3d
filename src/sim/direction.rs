//! Cardinal travel directions on the tile grid
//!
//! The grid is y-up: `Up` is `+y`, `Right` is `+x`.

use std::ops::Neg;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// One of the four cardinal unit steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, clockwise from `Up`
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Unit step in cell space
    pub fn to_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::Y,
            Direction::Right => IVec2::X,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
        }
    }

    /// Unit vector in world space
    pub fn to_vec2(self) -> Vec2 {
        self.to_ivec2().as_vec2()
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Dot product of the two unit vectors (-1, 0 or 1)
    pub fn dot(self, other: Direction) -> i32 {
        self.to_ivec2().dot(other.to_ivec2())
    }

    /// Exact match of a unit cell step
    pub fn from_unit(step: IVec2) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.to_ivec2() == step)
    }

    /// Normalized direction of an axis-aligned offset of any length.
    ///
    /// Returns `None` for the zero offset and for diagonals.
    pub fn from_offset(offset: IVec2) -> Option<Self> {
        match (offset.x, offset.y) {
            (0, 0) => None,
            (0, y) => Some(if y > 0 { Direction::Up } else { Direction::Down }),
            (x, 0) => Some(if x > 0 { Direction::Right } else { Direction::Left }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" | "w" => Some(Direction::Up),
            "right" | "r" | "d" => Some(Direction::Right),
            "down" | "s" => Some(Direction::Down),
            "left" | "l" | "a" => Some(Direction::Left),
            _ => None,
        }
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_has_negative_dot() {
        for d in Direction::ALL {
            assert_eq!(d.dot(-d), -1);
            assert_eq!(d.dot(d), 1);
            assert_eq!(-(-d), d);
        }
        assert_eq!(Direction::Up.dot(Direction::Right), 0);
    }

    #[test]
    fn test_from_offset_normalizes() {
        assert_eq!(Direction::from_offset(IVec2::new(0, 5)), Some(Direction::Up));
        assert_eq!(Direction::from_offset(IVec2::new(-3, 0)), Some(Direction::Left));
        assert_eq!(Direction::from_offset(IVec2::ZERO), None);
        assert_eq!(Direction::from_offset(IVec2::new(1, 1)), None);
    }

    #[test]
    fn test_from_unit_is_exact() {
        assert_eq!(Direction::from_unit(IVec2::NEG_Y), Some(Direction::Down));
        assert_eq!(Direction::from_unit(IVec2::new(2, 0)), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("a"), Some(Direction::Left));
        assert_eq!(Direction::from_str("north"), None);
        assert_eq!(Direction::from_str(Direction::Right.as_str()), Some(Direction::Right));
    }
}
