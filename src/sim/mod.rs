//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is supplied by the caller
//! - Seeded RNG only, owned by the level and passed to constructors
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies beyond the `platform` traits

pub mod collision;
pub mod entity;
pub mod hazard;
pub mod hero;
pub mod loader;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{AabbCollider, Collider, RadiusCollider};
pub use entity::{Body, Entity, SpriteKind};
pub use hazard::{Fire, Pant};
pub use hero::{ControlScheme, Hero};
pub use loader::{LevelDescription, LevelSource, RANDOM_SENTINEL};
pub use projectile::{Fireball, Water, WaterSlots};
pub use state::{Level, Outcome};
pub use tick::Frame;
