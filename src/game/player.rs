//! Player movement and collision resolution
//!
//! The per-frame core of the game. Movement is resolved one axis at a
//! time against the candidate tiles around the player: translate, test
//! overlap, snap back to the blocking tile's edge. Vertical velocity is a
//! closed-form function of time since the current air phase began, not an
//! integrated velocity carried across frames, so each phase restarts the
//! clock.

use macroquad::math::Vec2;

use crate::config::Physics;
use crate::world::map::Tile;

use super::rect::{overlaps, Rect};

/// Which part of the jump arc the player is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Standing on a floor, able to jump
    Grounded,
    /// Ascending under the jump impulse
    Rising,
    /// Descending under gravity alone
    Falling,
}

pub struct Player {
    hitbox: Rect,
    /// Desired horizontal direction this frame, set by input and consumed
    /// by `update`. Left and right in the same frame cancel out.
    intent_x: f32,
    phase: Phase,
    /// Seconds since the current rise or fall began
    time_airborne: f32,
}

impl Player {
    /// Spawn a player whose hitbox bottom-left sits at `pos`. The hitbox
    /// is slightly smaller than a tile so it can fit through one-tile gaps.
    pub fn new(pos: Vec2, tile_size: f32) -> Self {
        let size = tile_size * 0.75;
        Self {
            hitbox: Rect::new(pos.x, pos.y, size, size),
            intent_x: 0.0,
            phase: Phase::Falling,
            time_airborne: 0.0,
        }
    }

    pub fn hitbox(&self) -> &Rect {
        &self.hitbox
    }

    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while standing on a floor. Lost by jumping or walking off a
    /// ledge, regained only by landing.
    pub fn can_jump(&self) -> bool {
        self.phase == Phase::Grounded
    }

    pub fn push_left(&mut self) {
        self.intent_x -= 1.0;
    }

    pub fn push_right(&mut self) {
        self.intent_x += 1.0;
    }

    /// Start a jump if grounded, otherwise do nothing
    pub fn jump(&mut self) {
        if self.phase != Phase::Grounded {
            return;
        }
        self.phase = Phase::Rising;
        self.time_airborne = 0.0;
    }

    /// Advance the player one frame against the candidate tiles.
    ///
    /// `candidates` is expected to be the tiles near the player (the 3x3
    /// cell neighborhood); passing more is wasteful but harmless, and an
    /// empty slice just means nothing to collide with.
    pub fn update(&mut self, dt: f32, candidates: &[&Tile], physics: &Physics, tile_size: f32) {
        // Horizontal pass: move, then push out of anything hit
        let dx = self.intent_x * physics.speed * tile_size * dt;
        self.hitbox.set_left(self.hitbox.left() + dx);
        for tile in candidates {
            if overlaps(&self.hitbox, &tile.rect) {
                if dx > 0.0 {
                    // moved right, stuck on the tile's left side
                    self.hitbox.set_right(tile.rect.left() - physics.epsilon);
                } else if dx < 0.0 {
                    self.hitbox.set_left(tile.rect.right() + physics.epsilon);
                }
            }
        }
        // intent is a per-frame accumulator, not a velocity
        self.intent_x = 0.0;

        // Vertical pass: closed-form velocity from the phase clock
        self.time_airborne += dt;
        let mut velocity = self.vertical_velocity(physics);
        if self.phase == Phase::Rising && velocity <= 0.0 {
            // impulse exhausted: fall from rest at the apex
            self.phase = Phase::Falling;
            self.time_airborne = 0.0;
            velocity = self.vertical_velocity(physics);
        }
        let dy = velocity * tile_size * dt;
        self.hitbox.set_bottom(self.hitbox.bottom() + dy);

        let mut on_floor = false;
        for tile in candidates {
            if overlaps(&self.hitbox, &tile.rect) {
                if dy > 0.0 {
                    // moved up, hit a ceiling
                    self.hitbox.set_top(tile.rect.bottom() - physics.epsilon);
                    self.phase = Phase::Falling;
                    self.time_airborne = 0.0;
                } else if dy < 0.0 {
                    // landed: rest exactly on the tile's top edge
                    self.hitbox.set_bottom(tile.rect.top());
                    self.phase = Phase::Grounded;
                    self.time_airborne = 0.0;
                    on_floor = true;
                }
            }
        }

        // No floor under us this frame: airborne, jump is spent
        if !on_floor && self.phase == Phase::Grounded {
            self.phase = Phase::Falling;
        }
    }

    /// Current vertical velocity in tiles per second, from the closed-form
    /// arc `v(t) = -g*t + v0` (rising) or `v(t) = -g*t` (falling)
    pub fn vertical_velocity(&self, physics: &Physics) -> f32 {
        let t = self.time_airborne;
        match self.phase {
            Phase::Rising => -physics.gravity * t + physics.jump_impulse,
            _ => -physics.gravity * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const TILE: f32 = 32.0;

    fn tile_at(col: isize, row: isize) -> Tile {
        Tile {
            rect: Rect::new(col as f32 * TILE, row as f32 * TILE, TILE, TILE),
            color: 0,
        }
    }

    /// Land the player on a floor tile so tests can start grounded
    fn grounded_player(floor: &Tile) -> Player {
        let mut player = Player::new(
            Vec2::new(floor.rect.left() + 4.0, floor.rect.top() + 1.0),
            TILE,
        );
        let physics = Physics::default();
        for _ in 0..10 {
            player.update(DT, &[floor], &physics, TILE);
        }
        assert_eq!(player.phase(), Phase::Grounded);
        player
    }

    #[test]
    fn test_horizontal_resolution_snaps_to_wall() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let wall = tile_at(1, 1);
        let mut player = grounded_player(&floor);

        // Push right into the wall for a while
        for _ in 0..30 {
            player.push_right();
            player.update(DT, &[&floor, &wall], &physics, TILE);
        }
        assert_eq!(player.hitbox().right(), wall.rect.left() - physics.epsilon);
        assert!(!overlaps(player.hitbox(), &wall.rect));
    }

    #[test]
    fn test_horizontal_resolution_moving_left() {
        let physics = Physics::default();
        let floor = tile_at(1, 0);
        let wall = tile_at(0, 1);
        let mut player = grounded_player(&floor);

        for _ in 0..30 {
            player.push_left();
            player.update(DT, &[&floor, &wall], &physics, TILE);
        }
        assert_eq!(player.hitbox().left(), wall.rect.right() + physics.epsilon);
    }

    #[test]
    fn test_opposite_intents_cancel() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let mut player = grounded_player(&floor);
        let before = player.hitbox().left();

        player.push_left();
        player.push_right();
        player.update(DT, &[&floor], &physics, TILE);
        assert_eq!(player.hitbox().left(), before);
    }

    #[test]
    fn test_falling_player_lands_on_tile() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let mut player = Player::new(Vec2::new(4.0, floor.rect.top() + 20.0), TILE);
        assert_eq!(player.phase(), Phase::Falling);

        for _ in 0..120 {
            player.update(DT, &[&floor], &physics, TILE);
        }
        assert_eq!(player.hitbox().bottom(), floor.rect.top());
        assert_eq!(player.phase(), Phase::Grounded);
        assert!(player.can_jump());
    }

    #[test]
    fn test_jump_transitions_and_apex() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let mut player = grounded_player(&floor);

        player.jump();
        assert_eq!(player.phase(), Phase::Rising);
        assert!(!player.can_jump());
        assert!(player.vertical_velocity(&physics) > 0.0);

        // The impulse runs out after v0 / g seconds with no ceiling in
        // sight; the phase flips to Falling purely by elapsed time.
        let apex_frames = (physics.jump_impulse / physics.gravity / DT).ceil() as usize + 2;
        let mut rose = false;
        for _ in 0..apex_frames {
            let before = player.hitbox().bottom();
            player.update(DT, &[], &physics, TILE);
            rose |= player.hitbox().bottom() > before;
        }
        assert!(rose);
        assert_eq!(player.phase(), Phase::Falling);
        assert!(player.vertical_velocity(&physics) <= 0.0);
    }

    #[test]
    fn test_jump_is_noop_while_airborne() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let mut player = grounded_player(&floor);

        player.jump();
        player.update(DT, &[], &physics, TILE);
        let t = player.time_airborne;
        // A second jump mid-air must not restart the arc
        player.jump();
        assert_eq!(player.phase(), Phase::Rising);
        assert_eq!(player.time_airborne, t);
    }

    #[test]
    fn test_ceiling_hit_starts_fall() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let ceiling = tile_at(0, 2);
        let mut player = grounded_player(&floor);

        player.jump();
        for _ in 0..10 {
            player.update(DT, &[&floor, &ceiling], &physics, TILE);
            if player.phase() == Phase::Falling {
                break;
            }
        }
        assert_eq!(player.phase(), Phase::Falling);
        assert_eq!(
            player.hitbox().top(),
            ceiling.rect.bottom() - physics.epsilon
        );
    }

    #[test]
    fn test_walking_off_ledge_loses_jump() {
        let physics = Physics::default();
        let floor = tile_at(0, 0);
        let mut player = grounded_player(&floor);
        assert!(player.can_jump());

        // March right until the floor tile is no longer underneath
        for _ in 0..120 {
            player.push_right();
            player.update(DT, &[&floor], &physics, TILE);
        }
        assert!(player.hitbox().left() >= floor.rect.right());
        assert_eq!(player.phase(), Phase::Falling);
        assert!(!player.can_jump());
    }

    #[test]
    fn test_empty_candidates_mean_free_fall() {
        let physics = Physics::default();
        let mut player = Player::new(Vec2::new(0.0, 100.0), TILE);
        let start = player.hitbox().bottom();
        for _ in 0..10 {
            player.update(DT, &[], &physics, TILE);
        }
        assert!(player.hitbox().bottom() < start);
        assert_eq!(player.phase(), Phase::Falling);
    }
}
