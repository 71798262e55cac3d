//! Tile grid: world/cell mapping and the item tile layer

use std::collections::HashMap;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Conversion between continuous world space and integer cells
pub trait CellMapping {
    /// Cell containing the world point
    fn to_cell(&self, world: Vec2) -> IVec2;

    /// World position of the cell's anchor
    fn cell_to_world(&self, cell: IVec2) -> Vec2;
}

/// Uniform square grid anchored at `origin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGrid {
    pub origin: Vec2,
    pub cell_size: f32,
}

impl TileGrid {
    pub fn new(origin: Vec2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

impl CellMapping for TileGrid {
    fn to_cell(&self, world: Vec2) -> IVec2 {
        ((world - self.origin) / self.cell_size).floor().as_ivec2()
    }

    fn cell_to_world(&self, cell: IVec2) -> Vec2 {
        self.origin + cell.as_vec2() * self.cell_size
    }
}

/// Content of one item-layer tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    /// Food worth the given value
    Food(u32),
}

impl Tile {
    pub fn is_food(&self) -> bool {
        matches!(self, Tile::Food(_))
    }
}

/// Inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl CellRect {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> u64 {
        span(self.min.x, self.max.x)
    }

    pub fn height(&self) -> u64 {
        span(self.min.y, self.max.y)
    }

    /// Cell count, saturating at `usize::MAX`
    pub fn area(&self) -> usize {
        usize::try_from(self.width().saturating_mul(self.height())).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(self.min).all() && cell.cmple(self.max).all()
    }

    /// Cells in row-major order, bottom row first
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.min.y..=self.max.y).flat_map(move |y| (self.min.x..=self.max.x).map(move |x| IVec2::new(x, y)))
    }
}

/// Inclusive extent of `min..=max`, widened so full-range bounds cannot overflow
fn span(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1).max(0) as u64
}

/// Sparse tile layer; absent cells read as `Tile::Empty`
#[derive(Debug, Clone, Default)]
pub struct TileLayer {
    tiles: HashMap<IVec2, Tile>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_tile(&self, cell: IVec2) -> Tile {
        self.tiles.get(&cell).copied().unwrap_or_default()
    }

    /// Store a tile; `Tile::Empty` clears the cell
    pub fn set_tile(&mut self, cell: IVec2, tile: Tile) {
        match tile {
            Tile::Empty => {
                self.tiles.remove(&cell);
            }
            tile => {
                self.tiles.insert(cell, tile);
            }
        }
    }

    /// Occupied cells with their tiles, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, Tile)> + '_ {
        self.tiles.iter().map(|(&cell, &tile)| (cell, tile))
    }

    pub fn food_count(&self) -> usize {
        self.tiles.values().filter(|t| t.is_food()).count()
    }
}
