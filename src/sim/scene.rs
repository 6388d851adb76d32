//! Scene state machine and the top-level controller
//!
//! | From     | Trigger                         | To        |
//! |----------|---------------------------------|-----------|
//! | MainMenu | confirm on "Start Game"         | Playing   |
//! | MainMenu | confirm on "Exit Game", escape  | Terminate |
//! | MainMenu | up / down                       | MainMenu  |
//! | Playing  | timer expiry, mine hit          | GameOver  |
//! | Playing  | escape (held)                   | Terminate |
//! | GameOver | confirm                         | Playing   |
//! | GameOver | escape                          | Terminate |
//!
//! Menu and game-over keys are edge-triggered.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::{Keys, TickInput};
use super::state::{Arena, GameScene};
use super::tick::tick;

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    Start,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 2] = [MenuOption::Start, MenuOption::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Start => "Start Game",
            MenuOption::Exit => "Exit Game",
        }
    }
}

/// Main menu with a highlighted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainMenu {
    pub options: Vec<MenuOption>,
    pub selected: usize,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self {
            options: MenuOption::ALL.to_vec(),
            selected: 0,
        }
    }
}

impl MainMenu {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn selected_option(&self) -> Option<MenuOption> {
        self.options.get(self.selected).copied()
    }

    /// One tick of menu handling. First matching key wins:
    /// escape, up, down, confirm.
    pub fn update(&mut self, input: &TickInput) -> Option<Transition> {
        if input.just_pressed(Keys::ESCAPE) {
            return Some(Transition::Terminate);
        }
        if input.just_pressed(Keys::UP) {
            self.selected = self.selected.saturating_sub(1);
        } else if input.just_pressed(Keys::DOWN) {
            if self.selected + 1 < self.option_count() {
                self.selected += 1;
            }
        } else if input.just_pressed(Keys::CONFIRM) {
            return match self.selected_option()? {
                MenuOption::Start => Some(Transition::StartRun),
                MenuOption::Exit => Some(Transition::Terminate),
            };
        }
        None
    }
}

/// Which scene is active, for renderers and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    MainMenu,
    Playing,
    GameOver,
}

/// The active scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scene {
    MainMenu(MainMenu),
    Playing(GameScene),
    GameOver { final_score: u32 },
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::MainMenu(_) => SceneKind::MainMenu,
            Scene::Playing(_) => SceneKind::Playing,
            Scene::GameOver { .. } => SceneKind::GameOver,
        }
    }
}

/// Scene change requested by the active scene during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Start a fresh run
    StartRun,
    /// Leave the run for the end screen
    EndRun { final_score: u32 },
    /// Quit the game
    Terminate,
}

/// What the frame pump should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Owns the active scene and the run RNG
#[derive(Debug, Clone)]
pub struct Game {
    arena: Arena,
    scene: Scene,
    rng: Pcg32,
}

impl Game {
    /// New game on the main menu with a seeded RNG
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self::with_rng(arena, Pcg32::seed_from_u64(seed))
    }

    pub fn with_rng(arena: Arena, rng: Pcg32) -> Self {
        Self {
            arena,
            scene: Scene::MainMenu(MainMenu::default()),
            rng,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Advance the active scene by one tick and apply any scene change
    pub fn tick(&mut self, input: &TickInput, now: Duration) -> Flow {
        let transition = match &mut self.scene {
            Scene::MainMenu(menu) => menu.update(input),
            Scene::Playing(run) => tick(run, input, now, &mut self.rng),
            Scene::GameOver { .. } => {
                if input.just_pressed(Keys::ESCAPE) {
                    Some(Transition::Terminate)
                } else if input.just_pressed(Keys::CONFIRM) {
                    Some(Transition::StartRun)
                } else {
                    None
                }
            }
        };

        match transition {
            Some(transition) => self.apply(transition, now),
            None => Flow::Continue,
        }
    }

    fn apply(&mut self, transition: Transition, now: Duration) -> Flow {
        match transition {
            Transition::StartRun => {
                log::info!("Starting run ({:?} -> Playing)", self.scene.kind());
                self.scene = Scene::Playing(GameScene::new(self.arena, now));
                Flow::Continue
            }
            Transition::EndRun { final_score } => {
                log::info!("Run over, final score {}", final_score);
                self.scene = Scene::GameOver { final_score };
                Flow::Continue
            }
            Transition::Terminate => {
                log::info!("Quit requested from {:?}", self.scene.kind());
                Flow::Terminate
            }
        }
    }
}
