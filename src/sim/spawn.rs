//! Procedural platform and obstacle generation
//!
//! All randomness comes from the state's seeded RNG, so a seed fully
//! determines the level.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind, Platform, PlatformKind};
use crate::consts::*;

/// Append a platform at height `y` with random x, width and kind
pub fn generate_platform(state: &mut GameState, y: f32) {
    let rng = &mut state.rng;
    let x = rng.random_range(PLATFORM_MARGIN_LEFT..=state.tuning.view_width - PLATFORM_MARGIN_RIGHT);
    let w = rng.random_range(PLATFORM_MIN_WIDTH..=PLATFORM_MAX_WIDTH);
    let kind = match rng.random_range(0..3) {
        0 => PlatformKind::Normal,
        1 => PlatformKind::Moving {
            speed: rng.random_range(PLATFORM_MIN_SPEED..=PLATFORM_MAX_SPEED),
        },
        _ => PlatformKind::Disappearing {
            timer: 0,
            gone: false,
        },
    };

    state
        .platforms
        .push(Platform::new(Vec2::new(x, y), Vec2::new(w, PLATFORM_HEIGHT), kind));
}

/// Append a 30x30 obstacle at height `y` with random x and kind
pub fn generate_obstacle(state: &mut GameState, y: f32) {
    let rng = &mut state.rng;
    let x = rng.random_range(OBSTACLE_MARGIN..=state.tuning.view_width - OBSTACLE_MARGIN);
    let kind = if rng.random_bool(0.5) {
        ObstacleKind::Spike
    } else {
        ObstacleKind::Enemy {
            speed: rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED),
        }
    };

    log::debug!("Spawned {:?} at ({:.1}, {:.1})", kind, x, y);
    state.obstacles.push(Obstacle::new(Vec2::new(x, y), kind));
}

/// Starting layout: a normal platform under the player plus a column of
/// random platforms spaced every 100px from the top of the screen.
pub fn seed_level(state: &mut GameState) {
    state.platforms.push(Platform::normal(
        Vec2::new(SEED_PLATFORM_X, SEED_PLATFORM_Y),
        SEED_PLATFORM_WIDTH,
    ));

    for row in 1..=INITIAL_PLATFORM_ROWS {
        generate_platform(state, row as f32 * INITIAL_PLATFORM_SPACING);
    }

    log::info!(
        "Seeded level (seed {}): {} platforms",
        state.seed,
        state.platforms.len()
    );
}
