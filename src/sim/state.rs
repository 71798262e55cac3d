//! Game state and per-tick events
//!
//! Everything the tick pipeline mutates lives here, owned by the driver.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::chain::Chain;
use super::direction::Direction;
use super::food;
use super::grid::{CellMapping, CellRect, TileGrid, TileLayer};
use super::motion::MotionController;
use super::orient::orient_chain;
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Ticks do nothing until resumed
    Paused,
}

/// Something that happened during a tick, for adapters to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Direction change accepted
    Turned(Direction),
    /// Head entered a new cell and the chain shifted
    Crossed { cell: IVec2 },
    /// Orientation could not resolve this segment's sprite
    OrientationGap { index: usize, position: IVec2 },
    Ate { cell: IVec2, value: u32 },
    Grew { len: usize },
    FoodPlaced { cell: IVec2 },
    /// No free cell was left for new food
    PlacementFailed,
    Paused,
    Resumed,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the placement RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub grid: TileGrid,
    /// Head speed in world units per second
    pub speed: f32,
    pub motion: MotionController,
    pub chain: Chain,
    /// Item layer holding food tiles
    pub items: TileLayer,
    /// Region food is placed in
    pub food_region: CellRect,
    pub food_value: u32,
    pub grow_on_eat: bool,
    pub foods_eaten: u32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a game from validated settings, orient it and place the
    /// first food
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let grid = TileGrid::new(Vec2::ZERO, settings.cell_size);
        let chain = settings.initial_chain()?;
        // Start mid-cell so a crossing takes the same travel in every direction
        let start = grid.cell_to_world(chain.head()) + Vec2::splat(settings.cell_size / 2.0);
        let motion = MotionController::new(start, settings.start_direction, &grid);

        let mut state = Self {
            seed: settings.seed,
            rng: Pcg32::seed_from_u64(settings.seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            grid,
            speed: settings.world_speed(),
            motion,
            chain,
            items: TileLayer::new(),
            food_region: settings.board,
            food_value: settings.food_value,
            grow_on_eat: settings.grow_on_eat,
            foods_eaten: 0,
            events: Vec::new(),
        };

        state.reorient();
        state.spawn_food();
        state.events.clear();

        log::info!(
            "New game: seed {}, {} segments heading {}",
            state.seed,
            state.chain.len(),
            state.motion.direction().as_str()
        );
        Ok(state)
    }

    /// Re-derive every segment sprite, recording unresolved segments
    pub fn reorient(&mut self) {
        let gaps = orient_chain(&mut self.chain, self.motion.head_sprite());
        self.events.extend(
            gaps.into_iter()
                .map(|g| GameEvent::OrientationGap { index: g.index, position: g.position }),
        );
    }

    /// Place one food item on a free cell of the food region
    pub fn spawn_food(&mut self) -> Option<IVec2> {
        match food::place_food(
            &mut self.items,
            &self.food_region,
            &self.chain,
            &mut self.rng,
            self.food_value,
        ) {
            Ok(cell) => {
                log::info!("Food placed at {}", cell);
                self.events.push(GameEvent::FoodPlaced { cell });
                Some(cell)
            }
            Err(e) => {
                log::warn!("Food placement failed: {}", e);
                self.events.push(GameEvent::PlacementFailed);
                None
            }
        }
    }

    /// Head cell as the renderer should draw it
    pub fn head_world_position(&self) -> Vec2 {
        self.motion.render_position()
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::orient::Sprite;

    #[test]
    fn test_new_state_is_oriented_and_fed() {
        let state = GameState::new(&Settings::default()).unwrap();
        assert!(state.events.is_empty());
        assert_eq!(state.items.food_count(), 1);
        assert!(state.chain.segments().iter().all(|s| s.sprite.is_some()));
        assert_eq!(state.chain.segments()[0].sprite, Some(Sprite::Head(Direction::Up)));
        assert_eq!(
            state.chain.segments()[state.chain.len() - 1].sprite,
            Some(Sprite::TailEnd(Direction::Down))
        );
    }

    #[test]
    fn test_head_starts_settled_in_its_cell() {
        let settings = Settings::default();
        let state = GameState::new(&settings).unwrap();
        assert_eq!(state.motion.last_cell(), settings.start_cell);
        assert_eq!(state.head_world_position(), state.grid.cell_to_world(settings.start_cell));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(&Settings::default()).unwrap();
        let b = GameState::new(&Settings::default()).unwrap();
        let food_a: Vec<_> = a.items.iter().collect();
        let food_b: Vec<_> = b.items.iter().collect();
        assert_eq!(food_a, food_b);
    }

    #[test]
    fn test_speed_scaled_to_world_units() {
        let settings = Settings { speed: 3.0, cell_size: 10.0, ..Default::default() };
        let state = GameState::new(&settings).unwrap();
        assert_eq!(state.speed, 30.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = Settings { initial_length: 1, ..Default::default() };
        assert!(GameState::new(&settings).is_err());
    }
}
