//! Read-only view helpers for drawing a frame
//!
//! Nothing here mutates simulation state. A renderer asks for text lines
//! and menu button placement, then draws them however it likes.

use std::time::Duration;

use glam::IVec2;

use crate::sim::{Arena, GameScene, MainMenu, Rect};

/// Menu button size and spacing, in pixels
pub const BUTTON_WIDTH: i32 = 150;
pub const BUTTON_HEIGHT: i32 = 45;
pub const BUTTON_PADDING: i32 = 20;
/// Thickness of the highlight drawn around the selected button
pub const HIGHLIGHT_BORDER: i32 = 4;

/// A menu button laid out in arena space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: &'static str,
    pub rect: Rect,
    /// Present only on the selected button
    pub highlight: Option<Rect>,
}

/// Buttons stacked vertically and centred in the arena
pub fn menu_buttons(arena: &Arena, menu: &MainMenu) -> Vec<MenuButton> {
    let count = menu.option_count() as i32;
    if count == 0 {
        return Vec::new();
    }
    let group_height = BUTTON_HEIGHT * count + BUTTON_PADDING * (count - 1);
    let top = arena.height as i32 / 2 - group_height / 2;
    let x = arena.width as i32 / 2 - BUTTON_WIDTH / 2;

    menu.options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let y = top + (BUTTON_HEIGHT + BUTTON_PADDING) * i as i32;
            let min = IVec2::new(x, y);
            let rect = Rect::new(min, min + IVec2::new(BUTTON_WIDTH, BUTTON_HEIGHT));
            let highlight = (i == menu.selected).then(|| {
                let border = IVec2::splat(HIGHLIGHT_BORDER);
                Rect::new(rect.min - border, rect.max + border)
            });
            MenuButton {
                label: option.label(),
                rect,
                highlight,
            }
        })
        .collect()
}

/// Score and countdown shown during a run
pub fn hud_lines(run: &GameScene, now: Duration) -> [String; 2] {
    [
        format!("Score: {}", run.score),
        format!("Timer: {}s", run.time_remaining(now).as_secs()),
    ]
}

/// End screen text
pub fn game_over_lines(final_score: u32) -> [String; 3] {
    [
        "Game Over".to_string(),
        format!("Final Score: {}", final_score),
        "Press Enter to play again".to_string(),
    ]
}
