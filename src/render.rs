//! Drawing the map and player
//!
//! Thin immediate-mode layer over macroquad: every tile and the player
//! are colored axis-aligned rectangles, viewed through a 2D camera that
//! follows the player. Called only after the frame's movement resolution
//! has settled, so it never sees a half-updated position.

use macroquad::prelude::*;

use crate::game::player::Player;
use crate::game::rect::Rect as Aabb;
use crate::world::map::TileMap;

/// Fixed tile palette, selected by map value minus one
pub const PALETTE: [Color; 6] = [
    Color::new(0.7, 0.0, 0.0, 1.0), // red
    Color::new(0.0, 0.7, 0.0, 1.0), // green
    Color::new(0.7, 0.7, 0.0, 1.0), // yellow
    Color::new(0.0, 0.0, 0.7, 1.0), // blue
    Color::new(0.7, 0.0, 0.7, 1.0), // magenta
    Color::new(0.0, 0.7, 0.7, 1.0), // cyan
];

pub const PLAYER_COLOR: Color = Color::new(0.7, 0.4, 1.0, 1.0);
pub const BACKGROUND: Color = Color::new(0.2, 0.3, 0.3, 1.0);

/// A camera centered on the player. Positive zoom y keeps world +y
/// pointing up on screen.
pub fn player_camera(player: &Player) -> Camera2D {
    let center = player.center();
    Camera2D {
        target: vec2(center.x, center.y),
        zoom: vec2(2.0 / screen_width(), 2.0 / screen_height()),
        ..Default::default()
    }
}

fn draw_box(rect: &Aabb, color: Color) {
    // under the y-up camera the rectangle extends upward from its anchor
    draw_rectangle(
        rect.left(),
        rect.bottom(),
        rect.width(),
        rect.height(),
        color,
    );
}

pub fn draw_map(map: &TileMap) {
    for tile in map.tiles() {
        draw_box(&tile.rect, PALETTE[tile.color % PALETTE.len()]);
    }
}

pub fn draw_player(player: &Player) {
    draw_box(player.hitbox(), PLAYER_COLOR);
}
