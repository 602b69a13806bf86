//! Shared entity shape
//!
//! Every simulated object has a sprite kind, a position and a facing angle.
//! Entities never hold references to each other; collision passes borrow the
//! other collection for the duration of one call.

use glam::Vec2;

use crate::direction_vector;
use crate::platform::Canvas;

/// Which sprite an entity is drawn (and bounded) with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Hero,
    Water,
    Pant,
    Fire,
    Fireball,
}

impl SpriteKind {
    /// Nominal sprite half extents, used by the default bounds test
    pub fn half_extents(&self) -> Vec2 {
        match self {
            SpriteKind::Hero => Vec2::new(16.0, 16.0),
            SpriteKind::Water => Vec2::new(8.0, 8.0),
            SpriteKind::Pant => Vec2::new(12.0, 14.0),
            SpriteKind::Fire => Vec2::new(16.0, 18.0),
            SpriteKind::Fireball => Vec2::new(8.0, 8.0),
        }
    }
}

/// Position + facing of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Facing angle in radians (0 = right, π/2 = down)
    pub direction: f32,
}

impl Body {
    pub fn new(kind: SpriteKind, pos: Vec2, direction: f32) -> Self {
        Self {
            kind,
            pos,
            direction,
        }
    }

    /// Unit vector of the facing angle
    #[inline]
    pub fn heading(&self) -> Vec2 {
        direction_vector(self.direction)
    }

    /// Step along the facing direction
    #[inline]
    pub fn advance(&mut self, distance: f32) {
        self.pos += self.heading() * distance;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw(self.kind, self.pos, self.direction);
    }
}

/// Common view the level uses for collision passes and bookkeeping
pub trait Entity {
    fn body(&self) -> &Body;
    fn is_alive(&self) -> bool;

    fn pos(&self) -> Vec2 {
        self.body().pos
    }
}
