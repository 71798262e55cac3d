//! Property tests for chain movement, orientation and food placement

use glam::IVec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use tile_snake::Settings;
use tile_snake::sim::food::{food_at, item_cell, place_food};
use tile_snake::sim::orient::body_sprite;
use tile_snake::sim::{
    CellRect, Chain, Direction, GameEvent, GameState, MotionController, Tile, TileGrid, TileLayer,
    TickInput, tick,
};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Contiguous chain built by walking from the origin
fn walked_chain() -> impl Strategy<Value = Vec<IVec2>> {
    prop::collection::vec(direction(), 2..12).prop_map(|steps| {
        let mut cells = vec![IVec2::ZERO];
        for step in steps {
            let last = cells[cells.len() - 1];
            cells.push(last + step.to_ivec2());
        }
        cells
    })
}

fn manhattan(a: IVec2, b: IVec2) -> i32 {
    let d = (a - b).abs();
    d.x + d.y
}

/// (turn, ticks to hold it) pairs
fn input_script() -> impl Strategy<Value = Vec<(Option<Direction>, u32)>> {
    prop::collection::vec((prop::option::of(direction()), 1u32..90), 1..40)
}

fn run_script<F>(settings: &Settings, script: &[(Option<Direction>, u32)], dt: f32, mut check: F) -> Result<(), TestCaseError>
where
    F: FnMut(&GameState) -> Result<(), TestCaseError>,
{
    let mut state = GameState::new(settings).unwrap();
    for &(turn, hold) in script {
        let input = TickInput { turn, ..Default::default() };
        tick(&mut state, &input, dt);
        check(&state)?;
        for _ in 1..hold {
            tick(&mut state, &TickInput::default(), dt);
            check(&state)?;
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn adjacency_holds_every_tick(script in input_script(), dt in 0.005f32..1.0) {
        let settings = Settings { grow_on_eat: false, ..Default::default() };
        run_script(&settings, &script, dt, |state| {
            prop_assert!(state.chain.is_contiguous(), "gap in {:?}", state.chain.positions().collect::<Vec<_>>());
            Ok(())
        })?;
    }

    #[test]
    fn growth_only_stacks_the_tail_tip(script in input_script(), dt in 0.005f32..0.05) {
        // A small board so the head runs into food often
        let settings = Settings {
            board: CellRect::new(IVec2::new(8, 5), IVec2::new(12, 9)),
            start_cell: IVec2::new(10, 8),
            initial_length: 3,
            ..Default::default()
        };
        run_script(&settings, &script, dt, |state| {
            let cells: Vec<IVec2> = state.chain.positions().collect();
            for (i, pair) in cells.windows(2).enumerate() {
                let d = manhattan(pair[0], pair[1]);
                if i + 2 == cells.len() {
                    prop_assert!(d <= 1);
                } else {
                    prop_assert_eq!(d, 1);
                }
            }
            Ok(())
        })?;
    }

    #[test]
    fn orientation_never_loses_a_segment(script in input_script(), dt in 0.005f32..0.05) {
        run_script(&Settings::default(), &script, dt, |state| {
            prop_assert!(!state.events.iter().any(|e| matches!(e, GameEvent::OrientationGap { .. })), "unexpected OrientationGap event");
            prop_assert!(state.chain.segments().iter().all(|s| s.sprite.is_some()));
            Ok(())
        })?;
    }

    #[test]
    fn reversal_is_the_only_rejected_turn(first in direction(), second in direction()) {
        let grid = TileGrid::default();
        let mut motion = MotionController::new(glam::Vec2::splat(0.5), Direction::Up, &grid);
        let before = if motion.set_direction(first) { first } else { Direction::Up };
        prop_assert_eq!(motion.direction(), before);

        let accepted = motion.set_direction(second);
        prop_assert_eq!(accepted, second != before.opposite());
        prop_assert_eq!(motion.direction(), if accepted { second } else { before });
    }

    #[test]
    fn shift_moves_each_segment_to_its_predecessor(cells in walked_chain(), step in direction()) {
        let mut chain = Chain::from_positions(&cells).unwrap();
        let target = cells[0] + step.to_ivec2();
        prop_assert!(chain.shift(target));

        let shifted: Vec<IVec2> = chain.positions().collect();
        prop_assert_eq!(shifted[0], target);
        prop_assert_eq!(&shifted[1..], &cells[..cells.len() - 1]);
    }

    #[test]
    fn bend_ignores_neighbor_labels(x in -50i32..50, y in -50i32..50, a in direction(), b in direction()) {
        prop_assume!(a.dot(b) == 0);
        let cur = IVec2::new(x, y);
        let one = body_sprite(cur, cur + a.to_ivec2(), cur + b.to_ivec2());
        let other = body_sprite(cur, cur + b.to_ivec2(), cur + a.to_ivec2());
        prop_assert!(one.is_some());
        prop_assert_eq!(one, other);
    }

    #[test]
    fn placed_food_lands_on_a_free_cell(
        cells in walked_chain(),
        foods in prop::collection::vec((-6i32..6, -6i32..6), 0..20),
        seed in any::<u64>(),
    ) {
        let region = CellRect::new(IVec2::splat(-6), IVec2::splat(5));
        let chain = Chain::from_positions(&cells).unwrap();
        let mut items = TileLayer::new();
        for (x, y) in foods {
            items.set_tile(item_cell(IVec2::new(x, y)), Tile::Food(1));
        }
        let before = items.clone();
        let mut rng = Pcg32::seed_from_u64(seed);

        let cell = place_food(&mut items, &region, &chain, &mut rng, 2).unwrap();
        prop_assert!(region.contains(cell));
        prop_assert!(!chain.occupies(cell));
        prop_assert!(food_at(&before, cell).is_none());
        prop_assert_eq!(food_at(&items, cell), Some(2));
    }
}
