//! Fixed timestep simulation tick
//!
//! Advances one run by a single step. Scene changes are returned, never
//! applied here; the controller swaps scenes between ticks.

use std::time::Duration;

use rand::Rng;

use super::geometry::contains;
use super::input::{Keys, TickInput};
use super::scene::Transition;
use super::spawn::{place_food, spawn_mine_if_due};
use super::state::GameScene;

/// Advance a run by one tick at clock reading `now`
pub fn tick<R: Rng + ?Sized>(
    scene: &mut GameScene,
    input: &TickInput,
    now: Duration,
    rng: &mut R,
) -> Option<Transition> {
    // Escape is level-triggered while playing
    if input.is_held(Keys::ESCAPE) {
        return Some(Transition::Terminate);
    }

    if scene.is_expired(now) {
        log::info!("Time up, final score {}", scene.score);
        return Some(Transition::EndRun {
            final_score: scene.score,
        });
    }

    place_food(&mut scene.food, &scene.arena, rng);

    let elapsed = scene.elapsed_secs(now);
    spawn_mine_if_due(&mut scene.mines, elapsed, &scene.arena, rng);

    scene.player.step(input.held);
    scene.player.clamp_to(&scene.arena);

    let player_rect = scene.player.rect();

    if contains(&player_rect, &scene.food.rect()) {
        scene.score += 1;
        scene.food.eaten = true;
        log::debug!("Food eaten, score {}", scene.score);
        // Respawn right away so no one ever sees eaten food between ticks
        place_food(&mut scene.food, &scene.arena, rng);
    }

    if scene
        .mines
        .iter()
        .any(|mine| contains(&player_rect, &mine.rect()))
    {
        log::info!("Player hit a mine, final score {}", scene.score);
        return Some(Transition::EndRun {
            final_score: scene.score,
        });
    }

    None
}
