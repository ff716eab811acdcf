//! Frame composition
//!
//! Reads the game state and issues draw calls. Never mutates the state.

use glam::Vec2;

use super::surface::{Color, Surface, colors};
use crate::map_range;
use crate::sim::{GameOverReason, GamePhase, GameState, ObstacleKind, PlatformKind};

const HUD_TEXT_PX: f32 = 16.0;
const BANNER_TEXT_PX: f32 = 32.0;
/// Charge bar sits this far above the player's top edge
const CHARGE_BAR_GAP: f32 = 10.0;
const CHARGE_BAR_HEIGHT: f32 = 5.0;

/// Sky color for the player's current height: darker the higher they are
pub fn sky_color(player_y: f32, view_height: f32) -> Color {
    let t = map_range(player_y, view_height, 0.0, 0.0, 255.0);
    let [r, g, b] = colors::SKY_BASE;
    Color::from_f32(r - t * 0.2, g - t * 0.3, b - t * 0.4)
}

pub fn platform_color(kind: &PlatformKind) -> Color {
    match kind {
        PlatformKind::Normal => colors::PLATFORM_NORMAL,
        PlatformKind::Moving { .. } => colors::PLATFORM_MOVING,
        PlatformKind::Disappearing { .. } => colors::PLATFORM_DISAPPEARING,
    }
}

pub fn obstacle_color(kind: &ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Spike => colors::SPIKE,
        ObstacleKind::Enemy { .. } => colors::ENEMY,
    }
}

/// Message and its left shift from the horizontal center
fn banner(reason: GameOverReason) -> (&'static str, f32) {
    match reason {
        GameOverReason::Fell => ("Game Over", 70.0),
        GameOverReason::HitObstacle => ("Hit an obstacle!", 100.0),
    }
}

/// Draw one frame of `state` onto `surface`
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    let view = Vec2::new(state.tuning.view_width, state.tuning.view_height);

    surface.clear(sky_color(state.player.pos.y, state.tuning.view_height));
    surface.text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 20.0),
        HUD_TEXT_PX,
        colors::TEXT,
    );

    for platform in state.platforms.iter().filter(|p| !p.is_gone()) {
        surface.fill_rect(platform.pos, platform.size, platform_color(&platform.kind));
    }

    for obstacle in &state.obstacles {
        surface.fill_rect(obstacle.pos, obstacle.size, obstacle_color(&obstacle.kind));
    }

    let player = &state.player;
    surface.fill_rect(player.pos, player.size, colors::PLAYER);
    if player.grounded {
        let width = map_range(player.charge, 0.0, state.tuning.max_jump_power, 0.0, player.size.x);
        surface.fill_rect(
            player.pos - Vec2::new(0.0, CHARGE_BAR_GAP),
            Vec2::new(width, CHARGE_BAR_HEIGHT),
            colors::CHARGE_BAR,
        );
    }

    if let GamePhase::GameOver(reason) = state.phase {
        let (message, shift) = banner(reason);
        surface.text(
            message,
            Vec2::new(view.x / 2.0 - shift, view.y / 2.0),
            BANNER_TEXT_PX,
            colors::TEXT,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCmd, RecordingSurface};
    use crate::sim::{Obstacle, Platform};
    use crate::tuning::Tuning;

    #[test]
    fn test_sky_darkens_with_height() {
        assert_eq!(sky_color(600.0, 600.0), Color::rgb(50, 150, 200));
        let top = sky_color(0.0, 600.0);
        assert_eq!(top.r, 0);
        assert!(top.g < 150 && top.b < 200);
        // Far above the screen everything clamps to black
        assert_eq!(sky_color(-10_000.0, 600.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_draw_order_and_colors() {
        let mut state = GameState::blank(1, Tuning::default());
        state
            .platforms
            .push(Platform::normal(Vec2::new(10.0, 20.0), 90.0));
        state.obstacles.push(Obstacle::new(
            Vec2::new(50.0, 60.0),
            ObstacleKind::Enemy { speed: 2.0 },
        ));
        state.score = 12;

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        assert!(matches!(surface.commands[0], DrawCmd::Clear(_)));
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Score: 12"]);

        let rects: Vec<_> = surface.rects().collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].2, colors::PLATFORM_NORMAL);
        assert_eq!(rects[1].2, colors::ENEMY);
        assert_eq!(rects[2], (state.player.pos, state.player.size, colors::PLAYER));
    }

    #[test]
    fn test_gone_platforms_not_drawn() {
        let mut state = GameState::blank(1, Tuning::default());
        state.platforms.push(Platform::new(
            Vec2::ZERO,
            Vec2::new(80.0, 10.0),
            PlatformKind::Disappearing {
                timer: 61,
                gone: true,
            },
        ));

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        // Only the player
        assert_eq!(surface.rects().count(), 1);
    }

    #[test]
    fn test_charge_bar_when_grounded() {
        let mut state = GameState::blank(1, Tuning::default());
        state.player.grounded = true;
        state.player.charge = 7.5;

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);

        let bar = surface
            .rects()
            .find(|r| r.2 == colors::CHARGE_BAR)
            .expect("charge bar");
        assert_eq!(bar.0, state.player.pos - Vec2::new(0.0, 10.0));
        assert_eq!(bar.1, Vec2::new(15.0, 5.0));
    }

    #[test]
    fn test_game_over_banners() {
        let mut state = GameState::blank(1, Tuning::default());
        state.freeze(GameOverReason::Fell);
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        assert!(surface.texts().any(|t| t == "Game Over"));

        let mut state = GameState::blank(1, Tuning::default());
        state.freeze(GameOverReason::HitObstacle);
        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        let banner = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::Text { text, pos, px, .. } if text == "Hit an obstacle!" => {
                    Some((*pos, *px))
                }
                _ => None,
            })
            .expect("collision banner");
        assert_eq!(banner, (Vec2::new(100.0, 300.0), 32.0));
    }

    #[test]
    fn test_banner_centers_on_tuned_view() {
        let tuning = Tuning {
            view_width: 500.0,
            view_height: 800.0,
            ..Default::default()
        };
        let mut state = GameState::blank(1, tuning);
        state.freeze(GameOverReason::Fell);

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        let pos = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::Text { text, pos, .. } if text == "Game Over" => Some(*pos),
                _ => None,
            })
            .expect("game over banner");
        assert_eq!(pos, Vec2::new(180.0, 400.0));
    }

    #[test]
    fn test_draw_does_not_mutate() {
        let state = GameState::new(3);
        let before = state.snapshot();
        let positions: Vec<_> = state.platforms.iter().map(|p| p.pos).collect();

        let mut surface = RecordingSurface::new();
        draw(&state, &mut surface);
        draw(&state, &mut surface);

        assert_eq!(state.snapshot(), before);
        let after: Vec<_> = state.platforms.iter().map(|p| p.pos).collect();
        assert_eq!(positions, after);
    }
}
