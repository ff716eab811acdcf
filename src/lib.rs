//! Sky Hop - A vertical platform climber
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `renderer`: Drawing surface abstraction and the read-only draw pass
//! - `input`: Keyboard state tracking into per-tick input
//! - `driver`: Frame driver that runs tick + draw until game over
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{Driver, FrameStatus};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Visible area
    pub const VIEW_WIDTH: f32 = 400.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to vertical speed every tick
    pub const GRAVITY: f32 = 0.6;
    /// Upper bound of the jump charge (and of the jump speed it produces)
    pub const MAX_JUMP_POWER: f32 = 15.0;
    /// Charge gained per tick while the jump key is held on a platform
    pub const CHARGE_STEP: f32 = 0.3;
    /// Horizontal movement per tick while a direction key is held
    pub const MOVE_STEP: f32 = 5.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_START_Y: f32 = 500.0;

    /// Platform defaults
    pub const PLATFORM_HEIGHT: f32 = 10.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 80.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 120.0;
    /// Spawn x range is [PLATFORM_MARGIN_LEFT, width - PLATFORM_MARGIN_RIGHT]
    pub const PLATFORM_MARGIN_LEFT: f32 = 50.0;
    pub const PLATFORM_MARGIN_RIGHT: f32 = 150.0;
    pub const PLATFORM_MIN_SPEED: f32 = 1.0;
    pub const PLATFORM_MAX_SPEED: f32 = 3.0;
    /// Maximum active platforms before the oldest is evicted
    pub const MAX_PLATFORMS: usize = 10;
    /// Ticks a disappearing platform survives once stepped on
    pub const DISAPPEAR_TICKS: u32 = 60;
    /// Tolerance below a platform top that still counts as a landing
    pub const LANDING_BAND: f32 = 5.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 30.0;
    pub const OBSTACLE_MARGIN: f32 = 50.0;
    pub const ENEMY_MIN_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_SPEED: f32 = 4.0;
    /// An obstacle spawns whenever the score reaches a multiple of this
    pub const OBSTACLE_SCORE_INTERVAL: u64 = 5;

    /// Initial level layout
    pub const SEED_PLATFORM_X: f32 = 150.0;
    pub const SEED_PLATFORM_Y: f32 = 550.0;
    pub const SEED_PLATFORM_WIDTH: f32 = 100.0;
    pub const INITIAL_PLATFORM_ROWS: u32 = 5;
    pub const INITIAL_PLATFORM_SPACING: f32 = 100.0;
}

/// Linearly re-map `value` from `[from_lo, from_hi]` to `[to_lo, to_hi]` (unclamped)
#[inline]
pub fn map_range(value: f32, from_lo: f32, from_hi: f32, to_lo: f32, to_hi: f32) -> f32 {
    if from_hi == from_lo {
        return to_lo;
    }
    to_lo + (value - from_lo) * (to_hi - to_lo) / (from_hi - from_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(600.0, 600.0, 0.0, 0.0, 255.0), 0.0);
        assert_eq!(map_range(0.0, 600.0, 0.0, 0.0, 255.0), 255.0);
        assert!((map_range(300.0, 600.0, 0.0, 0.0, 255.0) - 127.5).abs() < 1e-4);
        // Degenerate source range
        assert_eq!(map_range(5.0, 1.0, 1.0, 3.0, 9.0), 3.0);
    }
}
