//! hopper: a minimal 2D tile platformer
//!
//! A static tile grid loaded from a CSV map, and a player with run,
//! gravity and jump resolved against it one axis at a time. Each frame is
//! strictly sequential: poll input, gather the tiles around the player,
//! run the movement update, then draw the settled state.

mod config;
mod game;
mod input;
mod render;
mod world;

use macroquad::prelude::*;

use config::Config;
use game::player::Player;
use world::map::TileMap;

const CONFIG_PATH: &str = "assets/config.ron";
const DEFAULT_MAP: &str = "assets/maps/level1.csv";
/// Grid cell the player spawns in, (col, row) from the bottom-left
const START_CELL: (f32, f32) = (3.0, 4.0);

fn window_conf() -> Conf {
    let config = Config::load_or_default(CONFIG_PATH);
    Conf {
        window_title: config.window.title,
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = Config::load_or_default(CONFIG_PATH);

    // Map path from the command line, or the bundled level
    let map_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MAP.to_string());
    let map = match TileMap::load(&map_path, config.tile_size) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Failed to load map {}: {}", map_path, e);
            return;
        }
    };
    // Bad cells don't stop the session, but the user should know
    for issue in &map.issues {
        eprintln!("{}: {}", map_path, issue);
    }
    println!(
        "Loaded {} ({} x {} cells, {} tiles)",
        map_path,
        map.cols(),
        map.rows(),
        map.tiles().count()
    );

    let mut player = Player::new(
        vec2(
            START_CELL.0 * config.tile_size,
            START_CELL.1 * config.tile_size,
        ),
        config.tile_size,
    );

    loop {
        let dt = get_frame_time();

        let frame = input::poll();
        if frame.quit {
            break;
        }
        if frame.move_left {
            player.push_left();
        }
        if frame.move_right {
            player.push_right();
        }
        if frame.jump {
            player.jump();
        }

        // Only the 3x3 cell block around the player can collide this frame
        let cell = map.cell_at(player.center());
        let candidates = map.candidates_around(cell);
        player.update(dt, &candidates, &config.physics, config.tile_size);

        clear_background(render::BACKGROUND);
        set_camera(&render::player_camera(&player));
        render::draw_map(&map);
        render::draw_player(&player);
        set_default_camera();

        next_frame().await
    }
}
