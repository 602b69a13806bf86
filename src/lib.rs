//! Pants on Fire - A single-screen fire-fighting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic frame simulation (entities, collisions, level state)
//! - `platform`: Input, drawing and screen abstraction
//! - `session`: Plays a sequence of levels on one RNG stream
//! - `settings`: Driver configuration

pub mod error;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{ControlSchemeError, LoadError};
pub use session::GameSession;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Hero speed (units per millisecond)
    pub const HERO_SPEED: f32 = 0.12;
    /// MouseSeek stops moving once this close to the pointer
    pub const HERO_SEEK_RADIUS: f32 = 20.0;

    /// Water speed (units per millisecond)
    pub const WATER_SPEED: f32 = 0.7;
    /// Distance a water shot travels before it evaporates
    pub const WATER_RANGE: f32 = 200.0;
    /// Maximum concurrent water shots
    pub const WATER_CAPACITY: usize = 8;

    /// Fireball speed (units per millisecond)
    pub const FIREBALL_SPEED: f32 = 0.2;
    /// How far past a screen edge a fireball may fly before it is dropped
    pub const FIREBALL_OFFSCREEN_MARGIN: f32 = 100.0;

    /// Starting heat of a fire (one water hit removes one)
    pub const FIRE_HEAT: i32 = 40;
    /// Fireball cooldown range in milliseconds (half-open)
    pub const FIRE_COOLDOWN_MIN_MS: i32 = 3000;
    pub const FIRE_COOLDOWN_MAX_MS: i32 = 6000;

    /// Random level population
    pub const RANDOM_PANT_COUNT: usize = 20;
    pub const RANDOM_FIRE_COUNT: usize = 6;
}

/// Unit vector for a facing angle (radians, screen space with y down)
#[inline]
pub fn direction_vector(angle: f32) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Facing angle from `from` toward `to`, in [0, 2π)
#[inline]
pub fn angle_toward(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x).rem_euclid(std::f32::consts::TAU)
}
