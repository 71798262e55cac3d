//! Game settings
//!
//! Stored as JSON. Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{CellRect, Chain, Direction, MIN_CHAIN_LEN};

/// Tunable game setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for food placement
    pub seed: u64,
    /// Head speed in cells per second
    pub speed: f32,
    /// World units per grid cell
    pub cell_size: f32,
    /// Region food may spawn in (inclusive)
    pub board: CellRect,
    /// Initial head cell
    pub start_cell: IVec2,
    /// Initial travel direction; the body trails the other way
    pub start_direction: Direction,
    /// Initial segment count, head and tail tip included
    pub initial_length: usize,
    /// Append a segment whenever food is eaten
    pub grow_on_eat: bool,
    /// Value carried by each spawned food tile
    pub food_value: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            speed: DEFAULT_CELLS_PER_SEC,
            cell_size: DEFAULT_CELL_SIZE,
            board: CellRect::new(IVec2::ZERO, IVec2::new(BOARD_WIDTH - 1, BOARD_HEIGHT - 1)),
            start_cell: IVec2::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2),
            start_direction: Direction::Up,
            initial_length: 4,
            grow_on_eat: true,
            food_value: 1,
        }
    }
}

impl Settings {
    /// Head speed in world units per second
    pub fn world_speed(&self) -> f32 {
        self.speed * self.cell_size
    }

    /// Initial chain, head on `start_cell` with the body trailing behind
    pub fn initial_chain(&self) -> Result<Chain> {
        Chain::straight(self.start_cell, self.start_direction.to_ivec2(), self.initial_length)
            .map_err(|e| Error::Settings(format!("initial chain: {}", e)))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.speed > 0.0) || !self.speed.is_finite() {
            return Err(Error::Settings(format!("speed must be positive, got {}", self.speed)));
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(Error::Settings(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.world_speed().is_finite() {
            return Err(Error::Settings(format!(
                "speed {} at cell_size {} is out of range",
                self.speed, self.cell_size
            )));
        }

        let cells = self.board.area();
        if cells == 0 || cells > MAX_BOARD_CELLS {
            return Err(Error::Settings(format!(
                "board must hold 1 to {} cells, got {}",
                MAX_BOARD_CELLS, cells
            )));
        }
        if !self.board.contains(self.start_cell) {
            return Err(Error::Settings(format!("start cell {} is off the board", self.start_cell)));
        }
        if self.initial_length < MIN_CHAIN_LEN || self.initial_length > cells {
            return Err(Error::Settings(format!(
                "initial_length must be between {} and {}, got {}",
                MIN_CHAIN_LEN, cells, self.initial_length
            )));
        }

        let chain = self.initial_chain()?;
        if let Some(cell) = chain.positions().find(|c| !self.board.contains(*c)) {
            return Err(Error::Settings(format!("initial chain cell {} is off the board", cell)));
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
