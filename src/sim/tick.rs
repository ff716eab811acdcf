//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one frame.

use super::spawn::{generate_obstacle, generate_platform};
use super::state::{GameOverReason, GameState, Player};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump key held (charging)
    pub charge_held: bool,
    /// Jump key went down since the previous tick
    pub charge_pressed: bool,
    /// Jump key went up since the previous tick
    pub charge_released: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Vertical shift applied to the world this tick
    pub camera_offset: f32,
    /// Player was above half-height after moving (score went up)
    pub climbed: bool,
    pub obstacle_spawned: bool,
    /// Platforms removed because they vanished or hit the cap
    pub platforms_removed: usize,
    /// Obstacles that scrolled out of view
    pub obstacles_removed: usize,
    /// Set on the tick that ended the run
    pub game_over: Option<GameOverReason>,
}

/// Scroll amount for this tick. When the player is above `half`, the world
/// moves down by the difference and the player is pinned to `half`.
pub fn camera_offset(player: &mut Player, half: f32) -> f32 {
    if player.pos.y < half {
        let offset = half - player.pos.y;
        player.pos.y = half;
        offset
    } else {
        0.0
    }
}

/// Apply jump key edges. A press on a platform starts a fresh charge; a
/// release on a platform spends it.
fn apply_charge_edges(player: &mut Player, input: &TickInput) {
    if input.charge_pressed && player.grounded {
        player.charge = 0.0;
    }
    if input.charge_released && player.grounded {
        player.jump(player.charge);
        player.charge = 0.0;
    }
}

/// Advance the game state by one frame. Does nothing once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    if state.is_over() {
        return report;
    }

    state.frame += 1;
    apply_charge_edges(&mut state.player, input);

    let half = state.tuning.half_height();
    let offset = camera_offset(&mut state.player, half);
    report.camera_offset = offset;

    // Newest first, so removal doesn't disturb the indices still to visit
    for i in (0..state.platforms.len()).rev() {
        state.platforms[i].update(offset, &state.tuning);
        if state.platforms[i].is_gone() {
            state.platforms.remove(i);
            report.platforms_removed += 1;
        }
    }

    let view_height = state.tuning.view_height;
    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].update(offset, &state.tuning);
        if state.obstacles[i].pos.y > view_height {
            state.obstacles.remove(i);
            report.obstacles_removed += 1;
        }
    }

    let hit = state.player.update(
        offset,
        &mut state.platforms,
        &state.obstacles,
        input,
        &state.tuning,
    );
    if hit && state.freeze(GameOverReason::HitObstacle) {
        report.game_over = Some(GameOverReason::HitObstacle);
    }

    if state.player.pos.y < half {
        let y = state.player.pos.y - half;
        generate_platform(state, y);
        state.score += 1;
        report.climbed = true;

        if state.score % state.tuning.obstacle_score_interval == 0 {
            generate_obstacle(state, y);
            report.obstacle_spawned = true;
        }
    }

    while state.platforms.len() > state.tuning.max_platforms {
        let evicted = state.platforms.remove(0);
        report.platforms_removed += 1;
        log::debug!("Evicted oldest platform at y={:.1}", evicted.pos.y);
    }

    if state.player.pos.y > view_height && state.freeze(GameOverReason::Fell) {
        report.game_over = Some(GameOverReason::Fell);
    }

    report
}
