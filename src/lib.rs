//! Tile Snake - grid snake movement and sprite orientation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, chain, orientation, food)
//! - `renderer`: Text render adapter
//! - `settings`: JSON game configuration

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default board, in cells
    pub const BOARD_WIDTH: i32 = 20;
    pub const BOARD_HEIGHT: i32 = 15;
    /// Largest board a settings file may ask for; food placement scans it
    pub const MAX_BOARD_CELLS: usize = 256 * 256;

    /// World units per cell
    pub const DEFAULT_CELL_SIZE: f32 = 16.0;
    /// Head speed, in cells per second
    pub const DEFAULT_CELLS_PER_SEC: f32 = 4.0;

    pub const DEFAULT_SEED: u64 = 0x5EED;
}
