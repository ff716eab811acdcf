//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, lands_on};
pub use spawn::{generate_obstacle, generate_platform, seed_level};
pub use state::{
    GameOverReason, GamePhase, GameState, Obstacle, ObstacleKind, Platform, PlatformKind, Player,
    Snapshot,
};
pub use tick::{TickInput, TickReport, camera_offset, tick};
