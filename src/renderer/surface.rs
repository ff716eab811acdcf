//! Drawing surface abstraction
//!
//! The game only needs filled rectangles, text and a clear. Anything that
//! can do those three things can host the game.

use glam::Vec2;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from float channels, clamping each to [0, 255]
    pub fn from_f32(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// CSS color string, e.g. `rgb(0, 200, 0)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = Color::rgb(255, 0, 0);
    pub const CHARGE_BAR: Color = Color::rgb(255, 255, 0);
    pub const PLATFORM_NORMAL: Color = Color::rgb(0, 200, 0);
    pub const PLATFORM_MOVING: Color = Color::rgb(200, 200, 0);
    pub const PLATFORM_DISAPPEARING: Color = Color::rgb(200, 0, 0);
    pub const SPIKE: Color = Color::rgb(200, 0, 0);
    pub const ENEMY: Color = Color::rgb(0, 0, 200);
    pub const TEXT: Color = Color::rgb(255, 255, 255);
    /// Sky color at the bottom of the screen; darkens with height
    pub const SKY_BASE: [f32; 3] = [50.0, 150.0, 200.0];
}

/// A target the game can draw into
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    /// Filled axis-aligned rectangle with its top-left corner at `pos`
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    /// Text with its baseline-left anchor at `pos`
    fn text(&mut self, text: &str, pos: Vec2, px: f32, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Rect { pos: Vec2, size: Vec2, color: Color },
    Text {
        text: String,
        pos: Vec2,
        px: f32,
        color: Color,
    },
}

/// Surface that stores draw calls instead of rasterizing them.
/// Used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCmd::Rect { pos, size, color } => Some((pos, size, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    /// Starts a new frame: earlier commands are dropped
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCmd::Rect { pos, size, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, px: f32, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            px,
            color,
        });
    }
}
