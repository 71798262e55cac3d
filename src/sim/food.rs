//! Food on the item layer
//!
//! Food lives on a separate tile layer drawn one cell below the board cell
//! it belongs to. All public functions here take board cells and apply
//! the offset themselves.

use glam::IVec2;
use rand::Rng;

use super::chain::Chain;
use super::grid::{CellRect, Tile, TileLayer};
use crate::error::{Error, Result};

/// Offset from a board cell to its item-layer cell
pub const ITEM_LAYER_OFFSET: IVec2 = IVec2::NEG_Y;

/// Item-layer cell holding the food for `board_cell`
#[inline]
pub fn item_cell(board_cell: IVec2) -> IVec2 {
    board_cell + ITEM_LAYER_OFFSET
}

/// Whether food sits on `board_cell`
pub fn food_at(items: &TileLayer, board_cell: IVec2) -> Option<u32> {
    match items.get_tile(item_cell(board_cell)) {
        Tile::Food(value) => Some(value),
        Tile::Empty => None,
    }
}

/// Remove the food on `board_cell`, returning its value
pub fn take_food(items: &mut TileLayer, board_cell: IVec2) -> Option<u32> {
    let value = food_at(items, board_cell)?;
    items.set_tile(item_cell(board_cell), Tile::Empty);
    Some(value)
}

/// Board cells in `region` holding neither a chain segment nor food
pub fn free_cells(region: &CellRect, chain: &Chain, items: &TileLayer) -> Vec<IVec2> {
    region
        .cells()
        .filter(|&cell| !chain.occupies(cell) && food_at(items, cell).is_none())
        .collect()
}

/// Put food worth `value` on a uniformly chosen free cell of `region`.
///
/// Returns the chosen board cell, or `Error::BoardFull` when every cell is
/// taken.
pub fn place_food<R: Rng>(
    items: &mut TileLayer,
    region: &CellRect,
    chain: &Chain,
    rng: &mut R,
    value: u32,
) -> Result<IVec2> {
    if region.is_empty() {
        return Err(Error::EmptyRegion);
    }
    let candidates = free_cells(region, chain, items);
    if candidates.is_empty() {
        return Err(Error::BoardFull);
    }
    let cell = candidates[rng.random_range(0..candidates.len())];
    items.set_tile(item_cell(cell), Tile::Food(value));
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn p(x: i32, y: i32) -> IVec2 {
        IVec2::new(x, y)
    }

    #[test]
    fn test_take_food_uses_item_offset() {
        let mut items = TileLayer::new();
        items.set_tile(p(2, 2), Tile::Food(3));
        // Food drawn at (2,2) belongs to board cell (2,3)
        assert_eq!(take_food(&mut items, p(2, 2)), None);
        assert_eq!(take_food(&mut items, p(2, 3)), Some(3));
        assert_eq!(items.get_tile(p(2, 2)), Tile::Empty);
        assert_eq!(take_food(&mut items, p(2, 3)), None);
    }

    #[test]
    fn test_place_food_avoids_chain_and_food() {
        let region = CellRect::new(p(0, 0), p(1, 1));
        let chain = Chain::from_positions(&[p(0, 1), p(0, 0), p(1, 0)]).unwrap();
        let mut items = TileLayer::new();
        let mut rng = Pcg32::seed_from_u64(7);

        let cell = place_food(&mut items, &region, &chain, &mut rng, 1).unwrap();
        assert_eq!(cell, p(1, 1));
        assert_eq!(food_at(&items, p(1, 1)), Some(1));

        let err = place_food(&mut items, &region, &chain, &mut rng, 1).unwrap_err();
        assert!(matches!(err, Error::BoardFull));
    }

    #[test]
    fn test_place_food_empty_region() {
        let region = CellRect::new(p(1, 1), p(0, 0));
        let chain = Chain::from_positions(&[p(0, 2), p(0, 1), p(0, 0)]).unwrap();
        let mut rng = Pcg32::seed_from_u64(0);
        let err = place_food(&mut TileLayer::new(), &region, &chain, &mut rng, 1).unwrap_err();
        assert!(matches!(err, Error::EmptyRegion));
    }

    #[test]
    fn test_free_cells_count() {
        let region = CellRect::new(p(0, 0), p(3, 3));
        let chain = Chain::from_positions(&[p(0, 2), p(0, 1), p(0, 0)]).unwrap();
        let mut items = TileLayer::new();
        items.set_tile(item_cell(p(3, 3)), Tile::Food(1));
        assert_eq!(free_cells(&region, &chain, &items).len(), 16 - 3 - 1);
    }
}
