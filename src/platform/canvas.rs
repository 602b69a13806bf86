//! Drawing collaborator
//!
//! Rendering is owned by the host. The simulation only reports which sprite
//! goes where each frame.

use glam::Vec2;

use crate::sim::SpriteKind;

pub trait Canvas {
    /// Draw one sprite at `position` rotated to `direction` (radians)
    fn draw(&mut self, sprite: SpriteKind, position: Vec2, direction: f32);
}

/// Discards every draw (headless runs)
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw(&mut self, _sprite: SpriteKind, _position: Vec2, _direction: f32) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub sprite: SpriteKind,
    pub position: Vec2,
    pub direction: f32,
}

/// Records draw calls for inspection
#[derive(Debug, Default)]
pub struct DrawLog {
    pub calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, sprite: SpriteKind) -> usize {
        self.calls.iter().filter(|c| c.sprite == sprite).count()
    }
}

impl Canvas for DrawLog {
    fn draw(&mut self, sprite: SpriteKind, position: Vec2, direction: f32) {
        self.calls.push(DrawCall {
            sprite,
            position,
            direction,
        });
    }
}
