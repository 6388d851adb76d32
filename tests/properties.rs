//! Property tests for the run simulation

use std::time::Duration;

use glam::Vec2;
use mine_dash::sim::{Arena, Flow, Game, GameScene, Keys, Scene, TickInput, Transition, tick};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DIRECTIONS: Keys = Keys::UP.union(Keys::DOWN).union(Keys::LEFT).union(Keys::RIGHT);

fn direction_keys() -> impl Strategy<Value = Keys> {
    any::<u8>().prop_map(|bits| Keys::from_bits_truncate(bits) & DIRECTIONS)
}

fn frame(i: usize) -> Duration {
    Duration::from_secs(1) / 60 * i as u32
}

proptest! {
    #[test]
    fn player_stays_inside_arena(
        seed in any::<u64>(),
        inputs in prop::collection::vec(direction_keys(), 1..400),
    ) {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut run = GameScene::new(arena, Duration::ZERO);
        let max_x = arena.w() - run.player.size.x as f32;
        let max_y = arena.h() - run.player.size.y as f32;

        for (i, held) in inputs.iter().enumerate() {
            let result = tick(&mut run, &TickInput::holding(*held), frame(i), &mut rng);
            let pos = run.player.pos;
            prop_assert!(pos.x >= 0.0 && pos.x <= max_x, "x out of range: {}", pos.x);
            prop_assert!(pos.y >= 0.0 && pos.y <= max_y, "y out of range: {}", pos.y);
            if result.is_some() {
                break;
            }
        }
    }

    #[test]
    fn clamp_fixes_any_position(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
        let arena = Arena::default();
        let mut run = GameScene::new(arena, Duration::ZERO);
        run.player.pos = Vec2::new(x, y);
        run.player.clamp_to(&arena);
        prop_assert!(run.player.pos.x >= 0.0 && run.player.pos.x <= 620.0);
        prop_assert!(run.player.pos.y >= 0.0 && run.player.pos.y <= 460.0);
    }

    #[test]
    fn score_rises_by_at_most_one_and_food_is_always_placed(
        seed in any::<u64>(),
        inputs in prop::collection::vec(direction_keys(), 1..400),
    ) {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut run = GameScene::new(arena, Duration::ZERO);

        for (i, held) in inputs.iter().enumerate() {
            let before = run.score;
            let result = tick(&mut run, &TickInput::holding(*held), frame(i), &mut rng);
            prop_assert!(run.score == before || run.score == before + 1);
            prop_assert!(!run.food.eaten);
            prop_assert!(arena.contains_point(run.food.pos));
            if result.is_some() {
                break;
            }
        }
    }

    #[test]
    fn mines_grow_slowly_and_never_shrink(
        seed in any::<u64>(),
        steps in prop::collection::vec(0u64..15_000, 1..60),
    ) {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut run = GameScene::new(arena, Duration::ZERO);
        let mut now = Duration::ZERO;
        let mut last_count = 0;

        for step in steps {
            now += Duration::from_millis(step);
            let result = tick(&mut run, &TickInput::default(), now, &mut rng);
            if matches!(result, Some(Transition::EndRun { .. })) && run.is_expired(now) {
                break;
            }
            let count = run.mines.len() as u64;
            prop_assert!(count <= run.elapsed_secs(now) / 10 + 1);
            prop_assert!(count >= last_count);
            prop_assert!(count <= last_count + 1);
            for mine in &run.mines {
                prop_assert!(arena.contains_point(mine.pos));
            }
            last_count = count;
            if result.is_some() {
                break;
            }
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        inputs in prop::collection::vec(direction_keys(), 1..200),
    ) {
        let mut a = Game::new(Arena::default(), seed);
        let mut b = Game::new(Arena::default(), seed);
        let start = TickInput::press(Keys::CONFIRM);
        prop_assert_eq!(a.tick(&start, Duration::ZERO), Flow::Continue);
        prop_assert_eq!(b.tick(&start, Duration::ZERO), Flow::Continue);

        for (i, held) in inputs.iter().enumerate() {
            // 2.5s per tick so mines and expiry both come into play
            let now = Duration::from_secs(i as u64 * 10 / 4);
            a.tick(&TickInput::holding(*held), now);
            b.tick(&TickInput::holding(*held), now);
        }

        match (a.scene(), b.scene()) {
            (Scene::Playing(ra), Scene::Playing(rb)) => {
                prop_assert_eq!(ra.player.pos, rb.player.pos);
                prop_assert_eq!(ra.food.pos, rb.food.pos);
                prop_assert_eq!(ra.mines.len(), rb.mines.len());
                prop_assert_eq!(ra.score, rb.score);
            }
            (Scene::GameOver { final_score: sa }, Scene::GameOver { final_score: sb }) => {
                prop_assert_eq!(sa, sb);
            }
            (sa, sb) => prop_assert_eq!(sa.kind(), sb.kind()),
        }
    }
}
