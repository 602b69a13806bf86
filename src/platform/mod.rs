//! Platform abstraction layer
//!
//! The simulation never talks to a window, keyboard or GPU directly. It sees:
//! - `Input`: held/pressed keys and the pointer position
//! - `Canvas`: a place to draw sprites
//! - `Screen`: the current visible bounds

pub mod autopilot;
pub mod canvas;
pub mod input;

pub use autopilot::Autopilot;
pub use canvas::{Canvas, DrawCall, DrawLog, NullCanvas};
pub use input::{Input, Key, ScriptedInput};

use serde::{Deserialize, Serialize};

/// Visible play area in world units (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub width: u32,
    pub height: u32,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
