//! The player's avatar

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::collision::Collider;
use super::entity::{Body, Entity, SpriteKind};
use super::projectile::{Fireball, Water, WaterSlots};
use crate::angle_toward;
use crate::consts::*;
use crate::error::ControlSchemeError;
use crate::platform::{Canvas, Input, Key};

/// How player input drives the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    /// WASD moves, facing follows the last movement key
    Direct,
    /// WASD moves, facing follows the pointer
    MouseFacing,
    /// Walk toward the pointer, facing it
    MouseSeek,
}

impl ControlScheme {
    /// Level files number the schemes 1 to 3
    pub fn from_code(code: i32) -> Result<Self, ControlSchemeError> {
        match code {
            1 => Ok(ControlScheme::Direct),
            2 => Ok(ControlScheme::MouseFacing),
            3 => Ok(ControlScheme::MouseSeek),
            other => Err(ControlSchemeError::Unknown(other)),
        }
    }
}

/// Facing angles for the movement keys (screen space, y down)
const FACING_RIGHT: f32 = 0.0;
const FACING_LEFT: f32 = PI;
const FACING_UP: f32 = 3.0 * FRAC_PI_2;
const FACING_DOWN: f32 = FRAC_PI_2;

#[derive(Debug, Clone)]
pub struct Hero {
    body: Body,
    control: Result<ControlScheme, ControlSchemeError>,
    /// Bad control scheme already logged at warn level
    reported: bool,
}

impl Hero {
    pub fn new(pos: Vec2, control: Result<ControlScheme, ControlSchemeError>) -> Self {
        Self {
            body: Body::new(SpriteKind::Hero, pos, 0.0),
            control,
            reported: false,
        }
    }

    pub fn with_scheme(pos: Vec2, scheme: ControlScheme) -> Self {
        Self::new(pos, Ok(scheme))
    }

    pub fn control(&self) -> Result<ControlScheme, ControlSchemeError> {
        self.control
    }

    /// Spawn water if asked, then move and draw according to the control scheme
    pub fn update(
        &mut self,
        dt: f32,
        input: &dyn Input,
        water: &mut WaterSlots,
        canvas: &mut dyn Canvas,
    ) {
        // Space is single-shot per press; the mouse button sprays while held
        if input.is_key_pressed(Key::Space) || input.is_key_held(Key::Mouse) {
            water.spawn(Water::new(self.body.pos, self.body.direction));
        }

        let step = HERO_SPEED * dt;
        match self.control {
            Ok(ControlScheme::Direct) => {
                if input.is_key_held(Key::D) {
                    self.body.pos.x += step;
                    self.body.direction = FACING_RIGHT;
                }
                if input.is_key_held(Key::A) {
                    self.body.pos.x -= step;
                    self.body.direction = FACING_LEFT;
                }
                if input.is_key_held(Key::W) {
                    self.body.pos.y -= step;
                    self.body.direction = FACING_UP;
                }
                if input.is_key_held(Key::S) {
                    self.body.pos.y += step;
                    self.body.direction = FACING_DOWN;
                }
            }
            Ok(ControlScheme::MouseFacing) => {
                self.body.direction = angle_toward(self.body.pos, input.pointer());
                self.body.pos += wasd_axis(input) * step;
            }
            Ok(ControlScheme::MouseSeek) => {
                let pointer = input.pointer();
                self.body.direction = angle_toward(self.body.pos, pointer);
                if self.body.pos.distance(pointer) > HERO_SEEK_RADIUS {
                    self.body.advance(step);
                }
            }
            Err(err) => {
                if !self.reported {
                    log::warn!("{err}");
                    self.reported = true;
                } else {
                    log::debug!("{err}");
                }
                return;
            }
        }

        self.body.draw(canvas);
    }

    /// True if any live fireball touches the hero
    pub fn handle_fireball_collisions(&self, fireballs: &[Fireball], collider: &dyn Collider) -> bool {
        fireballs
            .iter()
            .any(|f| f.is_alive() && collider.overlaps(f.body(), &self.body))
    }
}

/// Per-axis movement from the held WASD keys (not normalized)
fn wasd_axis(input: &dyn Input) -> Vec2 {
    let mut axis = Vec2::ZERO;
    if input.is_key_held(Key::D) {
        axis.x += 1.0;
    }
    if input.is_key_held(Key::A) {
        axis.x -= 1.0;
    }
    if input.is_key_held(Key::W) {
        axis.y -= 1.0;
    }
    if input.is_key_held(Key::S) {
        axis.y += 1.0;
    }
    axis
}

impl Entity for Hero {
    fn body(&self) -> &Body {
        &self.body
    }

    /// The hero lasts the whole level
    fn is_alive(&self) -> bool {
        true
    }
}
