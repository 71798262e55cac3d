//! Fixed timestep simulation tick
//!
//! One tick runs to completion: input, advance, and on a cell crossing the
//! shift, re-orientation and food check, in that order.

use glam::IVec2;

use super::direction::Direction;
use super::food;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Requested travel direction
    pub turn: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by `dt` seconds.
///
/// Events produced by this tick replace `state.events`. A long `dt` is
/// split into sub-steps so every crossed cell gets its own shift.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => {
                log::info!("Paused at tick {}", state.time_ticks);
                state.events.push(GameEvent::Paused);
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed at tick {}", state.time_ticks);
                state.events.push(GameEvent::Resumed);
                GamePhase::Playing
            }
        };
    }

    if state.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;

    if let Some(direction) = input.turn {
        if state.motion.set_direction(direction) {
            state.events.push(GameEvent::Turned(direction));
        }
    }

    if !(dt > 0.0) || !dt.is_finite() {
        return;
    }
    // Sub-step so the head never passes more than one cell per advance
    let cells = state.speed * dt / state.grid.cell_size;
    let steps = cells.floor() as u32 + 1;
    let step_dt = dt / steps as f32;
    for _ in 0..steps {
        if let Some(cell) = state.motion.advance(step_dt, state.speed, &state.grid) {
            on_crossing(state, cell);
        }
    }
}

/// Shift the chain onto `cell`, re-derive sprites, then check for food
fn on_crossing(state: &mut GameState, cell: IVec2) {
    log::debug!("Tick {}: head crossed into {}", state.time_ticks, cell);

    if !state.chain.shift(cell) {
        return;
    }
    state.events.push(GameEvent::Crossed { cell });
    state.reorient();

    if let Some(value) = food::take_food(&mut state.items, cell) {
        state.foods_eaten += 1;
        log::info!("Ate food worth {} at {} ({} eaten)", value, cell, state.foods_eaten);
        state.events.push(GameEvent::Ate { cell, value });

        if state.grow_on_eat {
            state.chain.grow();
            log::info!("Chain grew to {} segments", state.chain.len());
            state.events.push(GameEvent::Grew { len: state.chain.len() });
        }

        state.spawn_food();
    }
}
