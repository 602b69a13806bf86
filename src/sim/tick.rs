//! Per-frame simulation step
//!
//! Advances every entity, resolves collisions between categories, prunes the
//! dead and decides whether the level goes on.

use super::collision::Collider;
use super::entity::Entity;
use super::state::{Level, Outcome};
use crate::platform::{Canvas, Input};

/// Collaborators for a single frame
pub struct Frame<'a> {
    pub input: &'a dyn Input,
    pub canvas: &'a mut dyn Canvas,
    pub collider: &'a dyn Collider,
}

impl<'a> Frame<'a> {
    pub fn new(input: &'a dyn Input, canvas: &'a mut dyn Canvas, collider: &'a dyn Collider) -> Self {
        Self {
            input,
            canvas,
            collider,
        }
    }
}

impl Level {
    /// Advance the level by `elapsed_ms` milliseconds
    ///
    /// The hero getting hit is checked before any other collision pass, so a
    /// frame in which the last fire goes out and the hero is hit is a loss.
    pub fn update(&mut self, frame: &mut Frame<'_>, elapsed_ms: u32) -> Outcome {
        let dt = elapsed_ms as f32;
        let collider = frame.collider;

        // Movement and spawning
        self.hero
            .update(dt, frame.input, &mut self.water, frame.canvas);
        self.water.update(dt, frame.canvas);
        for pant in &mut self.pants {
            pant.update(frame.canvas);
        }
        for fireball in &mut self.fireballs {
            fireball.update(dt, self.screen, frame.canvas);
        }
        for fire in &mut self.fires {
            if let Some(fireball) = fire.update(dt, &mut self.rng, frame.canvas) {
                self.fireballs.push(fireball);
            }
        }

        if self.hero.handle_fireball_collisions(&self.fireballs, collider) {
            log::info!("Level {}: hero hit by a fireball", self.number);
            return Outcome::Quit;
        }

        // Collisions
        for fireball in &mut self.fireballs {
            fireball.handle_water_collisions(&mut self.water, collider);
        }
        for fire in &mut self.fires {
            fire.handle_water_collisions(&mut self.water, collider);
        }
        for pant in &mut self.pants {
            if let Some(fire) = pant.handle_fireball_collisions(&mut self.fireballs, collider, &mut self.rng) {
                log::debug!("pant at {} caught fire", fire.pos());
                self.fires.push(fire);
            }
        }

        // Prune only after every pass has run
        self.fireballs.retain(|f| f.is_alive());
        self.fires.retain(|f| f.is_alive());
        self.pants.retain(|p| p.is_alive());

        if self.pants.is_empty() {
            log::info!("Level {}: every pant burned", self.number);
            return Outcome::Quit;
        }
        if self.fires.is_empty() {
            log::info!("Level {}: all fires out", self.number);
            self.number += 1;
            return Outcome::Advance;
        }

        Outcome::Continue
    }
}
