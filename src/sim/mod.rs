//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Head-to-tail chain order, never reordered
//! - No rendering or platform dependencies

pub mod chain;
pub mod direction;
pub mod food;
pub mod grid;
pub mod motion;
pub mod orient;
pub mod state;
pub mod tick;

pub use chain::{Chain, MIN_CHAIN_LEN, Segment};
pub use direction::Direction;
pub use grid::{CellMapping, CellRect, Tile, TileGrid, TileLayer};
pub use motion::MotionController;
pub use orient::{OrientationGap, Sprite, orient_chain};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
