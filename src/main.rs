//! Mine Dash entry point
//!
//! Headless frame pump: loads the config, then drives the game at the fixed
//! tick rate with a simple autopilot standing in for the keyboard. Windowing
//! and drawing belong to whichever frontend embeds the library.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use mine_dash::platform::{Clock, FixedStepClock, InputTracker};
use mine_dash::sim::{GameScene, Keys, Scene};
use mine_dash::{Config, ConfigError, Flow, Game, ui};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Mine Dash (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => {
            let config = Config::default();
            config.validate()?;
            config
        }
    };

    let seed = config.seed.unwrap_or_else(seed_from_time);
    log::info!(
        "{} {}x{}, seed {}",
        config.window.title,
        config.window.width,
        config.window.height,
        seed
    );

    let mut game = Game::new(config.arena(), seed);
    let mut clock = FixedStepClock::from_rate(config.tick_rate_hz);
    let mut tracker = InputTracker::new();
    let mut ticks: u64 = 0;

    loop {
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("Stopping after {} ticks", ticks);
            break;
        }

        let held = autopilot(game.scene());
        let input = tracker.update(held);
        let now = clock.now();

        if game.tick(&input, now) == Flow::Terminate {
            break;
        }
        ticks += 1;

        match game.scene() {
            Scene::Playing(run) if ticks % u64::from(config.tick_rate_hz) == 0 => {
                let [score, timer] = ui::hud_lines(run, now);
                log::debug!("{} | {} | mines {}", score, timer, run.mines.len());
            }
            Scene::GameOver { final_score } => {
                log::info!("{}", ui::game_over_lines(*final_score).join(" / "));
            }
            _ => {}
        }

        clock.advance();
    }

    log::info!("Exited after {} ticks ({:?} game time)", ticks, clock.now());
    Ok(())
}

/// Keys a very simple player would hold for the current scene
fn autopilot(scene: &Scene) -> Keys {
    match scene {
        Scene::MainMenu(_) => Keys::CONFIRM,
        Scene::Playing(run) => chase_food(run),
        Scene::GameOver { .. } => Keys::ESCAPE,
    }
}

/// Steer the player's centre onto the food's centre
fn chase_food(run: &GameScene) -> Keys {
    if run.food.eaten {
        return Keys::empty();
    }
    let player_center = run.player.pos + run.player.size.as_vec2() / 2.0;
    let food_center = run.food.pos + run.food.size.as_vec2() / 2.0;
    let delta = food_center - player_center;
    let dead_zone = run.player.speed / 2.0;

    let mut keys = Keys::empty();
    if delta.x < -dead_zone {
        keys |= Keys::LEFT;
    } else if delta.x > dead_zone {
        keys |= Keys::RIGHT;
    }
    if delta.y < -dead_zone {
        keys |= Keys::UP;
    } else if delta.y > dead_zone {
        keys |= Keys::DOWN;
    }
    keys
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}
