//! Game state and core simulation types
//!
//! Entities are plain data plus their own per-tick behavior. The game state
//! owns every collection; entities never reference each other.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, lands_on};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Player dropped below the visible area
    Fell,
    /// Player touched a spike or enemy
    HitObstacle,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the simulation is frozen
    GameOver(GameOverReason),
}

/// Move `x` by `speed`, flipping the direction once the span `[x, x + width]`
/// leaves `[0, view_width]`. The step that crosses the edge is kept.
#[inline]
fn patrol(x: &mut f32, speed: &mut f32, width: f32, view_width: f32) {
    *x += *speed;
    if *x < 0.0 || *x + width > view_width {
        *speed = -*speed;
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical speed (positive is downward)
    pub vel_y: f32,
    /// Resting on a platform this tick
    pub grounded: bool,
    /// Accumulated jump charge, released as jump speed
    pub charge: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(PLAYER_SIZE),
            vel_y: 0.0,
            grounded: false,
            charge: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Launch upward with speed `|power|`. Ignored while airborne.
    pub fn jump(&mut self, power: f32) {
        if self.grounded {
            self.vel_y = -power.abs();
            self.grounded = false;
        }
    }

    /// Advance one tick: gravity, landings, obstacle contact, steering,
    /// charging, then the camera shift.
    ///
    /// Returns `true` if the player overlaps an obstacle.
    pub fn update(
        &mut self,
        offset: f32,
        platforms: &mut [Platform],
        obstacles: &[Obstacle],
        input: &TickInput,
        tuning: &Tuning,
    ) -> bool {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        // Every qualifying platform snaps the player in turn; the last one wins
        self.grounded = false;
        for platform in platforms.iter_mut() {
            if lands_on(&self.bounds(), self.vel_y, &platform.bounds(), tuning.landing_band) {
                self.pos.y = platform.pos.y - self.size.y;
                self.vel_y = 0.0;
                self.grounded = true;
                platform.activate();
                log::trace!("Landed on {:?} platform at y={}", platform.kind, platform.pos.y);
            }
        }

        let body = self.bounds();
        let hit = obstacles.iter().any(|o| body.overlaps(&o.bounds()));

        if input.left {
            self.pos.x -= tuning.move_step;
        }
        if input.right {
            self.pos.x += tuning.move_step;
        }
        self.pos.x = self.pos.x.clamp(0.0, tuning.view_width - self.size.x);

        if input.charge_held && self.grounded {
            self.charge = (self.charge + tuning.charge_step).clamp(0.0, tuning.max_jump_power);
        }

        self.pos.y += offset;

        hit
    }
}

/// Platform variants and their per-variant state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Normal,
    /// Slides horizontally; the sign of `speed` is the direction
    Moving { speed: f32 },
    /// Vanishes a fixed number of ticks after being stepped on.
    /// `timer == 0` means not yet armed.
    Disappearing { timer: u32, gone: bool },
}

/// A platform the player can land on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(pos: Vec2, size: Vec2, kind: PlatformKind) -> Self {
        Self { pos, size, kind }
    }

    pub fn normal(pos: Vec2, width: f32) -> Self {
        Self::new(pos, Vec2::new(width, PLATFORM_HEIGHT), PlatformKind::Normal)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Fully elapsed disappearing platform; no longer drawn or collidable
    pub fn is_gone(&self) -> bool {
        matches!(self.kind, PlatformKind::Disappearing { gone: true, .. })
    }

    /// Arm the disappearance timer. No-op for other variants or if already armed.
    pub fn activate(&mut self) {
        if let PlatformKind::Disappearing { timer, .. } = &mut self.kind {
            if *timer == 0 {
                *timer = 1;
            }
        }
    }

    /// Advance one tick and apply the camera offset
    pub fn update(&mut self, offset: f32, tuning: &Tuning) {
        match &mut self.kind {
            PlatformKind::Normal => {}
            PlatformKind::Moving { speed } => {
                patrol(&mut self.pos.x, speed, self.size.x, tuning.view_width);
            }
            PlatformKind::Disappearing { timer, gone } => {
                if *timer > 0 {
                    *timer += 1;
                    if *timer > tuning.disappear_ticks {
                        *gone = true;
                    }
                }
            }
        }
        self.pos.y += offset;
    }
}

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Stationary hazard
    Spike,
    /// Patrols horizontally; the sign of `speed` is the direction
    Enemy { speed: f32 },
}

/// A hazard that ends the run on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(pos: Vec2, kind: ObstacleKind) -> Self {
        Self {
            pos,
            size: Vec2::splat(OBSTACLE_SIZE),
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Horizontal speed (zero for spikes)
    pub fn speed(&self) -> f32 {
        match self.kind {
            ObstacleKind::Spike => 0.0,
            ObstacleKind::Enemy { speed } => speed,
        }
    }

    /// Advance one tick and apply the camera offset
    pub fn update(&mut self, offset: f32, tuning: &Tuning) {
        if let ObstacleKind::Enemy { speed } = &mut self.kind {
            patrol(&mut self.pos.x, speed, self.size.x, tuning.view_width);
        }
        self.pos.y += offset;
    }
}

/// Serializable summary of a run, for logs and the headless driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub frame: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub player: Vec2,
    pub platforms: usize,
    pub obstacles: usize,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub player: Player,
    /// Active platforms, oldest first
    pub platforms: Vec<Platform>,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New run with default tuning and the starting layout
    pub fn new(seed: u64) -> Self {
        let mut state = Self::blank(seed, Tuning::default());
        super::spawn::seed_level(&mut state);
        state
    }

    /// New run with custom tuning and the starting layout
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut state = Self::blank(seed, tuning);
        super::spawn::seed_level(&mut state);
        Ok(state)
    }

    /// Player at the start position with no platforms or obstacles
    pub fn blank(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            tuning,
            player: Player::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y)),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Enter the terminal state. The first reason sticks; returns `true`
    /// only on the transition.
    pub fn freeze(&mut self, reason: GameOverReason) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = GamePhase::GameOver(reason);
        log::info!(
            "Game over ({:?}) at frame {} with score {}",
            reason,
            self.frame,
            self.score
        );
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            frame: self.frame,
            score: self.score,
            phase: self.phase,
            player: self.player.pos,
            platforms: self.platforms.len(),
            obstacles: self.obstacles.len(),
        }
    }
}
