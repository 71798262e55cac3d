//! Tile Snake entry point
//!
//! Runs a headless game with a scripted sequence of turns and prints a
//! text frame every time the head enters a new cell.
//!
//! Usage: `tile-snake [settings.json] [turns]` where `turns` is a string of
//! `w`/`a`/`s`/`d` keys, one consumed per cell crossing.

use std::collections::VecDeque;
use std::path::PathBuf;

use tile_snake::Settings;
use tile_snake::consts::*;
use tile_snake::renderer::{render_frame, status_line};
use tile_snake::sim::{Direction, GameEvent, GameState, TickInput, tick};

/// Frames the demo runs for (at 60 fps)
const DEMO_FRAMES: u32 = 60 * 20;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Game instance driving the fixed-step simulation
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    turns: VecDeque<Direction>,
}

impl Game {
    fn new(state: GameState, turns: VecDeque<Direction>) -> Self {
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::default(),
            turns,
        }
    }

    /// Run simulation ticks for one frame, printing a frame per crossing
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.turn = None;
            self.input.pause = false;

            if self.handle_events() {
                self.input.turn = self.turns.pop_front();
            }
        }
    }

    /// Report the last tick's events; returns whether the head crossed
    fn handle_events(&self) -> bool {
        let mut crossed = false;
        for event in &self.state.events {
            match event {
                GameEvent::Crossed { .. } => crossed = true,
                GameEvent::PlacementFailed => log::warn!("Board is full"),
                GameEvent::OrientationGap { index, position } => {
                    log::warn!("Segment {} at {} has no sprite", index, position)
                }
                _ => {}
            }
        }
        if crossed {
            println!("{}{}\n", render_frame(&self.state), status_line(&self.state));
        }
        crossed
    }
}

fn parse_turns(script: &str) -> VecDeque<Direction> {
    script
        .chars()
        .filter_map(|c| {
            let direction = Direction::from_str(&c.to_string());
            if direction.is_none() {
                log::warn!("Ignoring unknown turn key {:?}", c);
            }
            direction
        })
        .collect()
}

fn main() {
    env_logger::init();
    log::info!("Tile Snake starting...");

    let mut args: VecDeque<String> = std::env::args().skip(1).collect();
    let settings_path = match args.front() {
        Some(first) if first.ends_with(".json") => args.pop_front().map(PathBuf::from),
        _ => None,
    };
    let script = args.pop_front().unwrap_or_default();

    let settings = Settings::load_or_default(settings_path.as_deref());
    let state = match GameState::new(&settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start game: {}", e);
            std::process::exit(1);
        }
    };

    let mut game = Game::new(state, parse_turns(&script));
    game.input.turn = game.turns.pop_front();
    println!("{}{}\n", render_frame(&game.state), status_line(&game.state));

    for _ in 0..DEMO_FRAMES {
        game.update(FRAME_DT);
    }

    log::info!(
        "Finished after {} ticks: {} food eaten, {} segments",
        game.state.time_ticks,
        game.state.foods_eaten,
        game.state.chain.len()
    );
}
