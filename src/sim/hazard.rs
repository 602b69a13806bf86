//! Stationary entities: fires (the hazard) and pants (the thing to protect)

use glam::Vec2;
use rand::Rng;

use super::collision::Collider;
use super::entity::{Body, Entity, SpriteKind};
use super::projectile::{Fireball, WaterSlots};
use crate::consts::*;
use crate::platform::Canvas;

fn draw_cooldown<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(FIRE_COOLDOWN_MIN_MS..FIRE_COOLDOWN_MAX_MS) as f32
}

/// A burning fire that periodically throws fireballs
#[derive(Debug, Clone)]
pub struct Fire {
    body: Body,
    heat: i32,
    /// Milliseconds until the next fireball
    cooldown_ms: f32,
    alive: bool,
}

impl Fire {
    /// Draws the first cooldown from `rng`
    pub fn new<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            body: Body::new(SpriteKind::Fire, pos, 0.0),
            heat: FIRE_HEAT,
            cooldown_ms: draw_cooldown(rng),
            alive: true,
        }
    }

    pub fn heat(&self) -> i32 {
        self.heat
    }

    pub fn cooldown_ms(&self) -> f32 {
        self.cooldown_ms
    }

    #[cfg(test)]
    pub(crate) fn set_heat(&mut self, heat: i32) {
        self.heat = heat;
    }

    #[cfg(test)]
    pub(crate) fn set_cooldown_ms(&mut self, cooldown_ms: f32) {
        self.cooldown_ms = cooldown_ms;
    }

    /// Burn for `dt` milliseconds. Returns a fireball when the cooldown runs out.
    ///
    /// Heat lost to water since the last update is applied first: a fire that
    /// was put out never fires again, even if its cooldown expires this frame.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        canvas: &mut dyn Canvas,
    ) -> Option<Fireball> {
        if self.heat <= 0 {
            self.alive = false;
        }
        if !self.alive {
            return None;
        }

        self.body.draw(canvas);

        self.cooldown_ms -= dt;
        if self.cooldown_ms > 0.0 {
            return None;
        }

        let direction = rng.random_range(0.0..std::f32::consts::TAU);
        self.cooldown_ms = draw_cooldown(rng);
        Some(Fireball::new(self.body.pos, direction))
    }

    /// Each overlapping water shot is consumed and cools the fire by one
    pub fn handle_water_collisions(&mut self, water: &mut WaterSlots, collider: &dyn Collider) {
        if !self.alive {
            return;
        }
        let hits = water.remove_overlapping(&self.body, collider);
        self.heat -= hits as i32;
    }
}

impl Entity for Fire {
    fn body(&self) -> &Body {
        &self.body
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A pair of pants. Burns into a fire when a fireball lands on it.
#[derive(Debug, Clone)]
pub struct Pant {
    body: Body,
    alive: bool,
}

impl Pant {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(SpriteKind::Pant, pos, 0.0),
            alive: true,
        }
    }

    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        if self.alive {
            self.body.draw(canvas);
        }
    }

    /// The first live fireball (in collection order) touching the pant is
    /// destroyed and the pant turns into a fire at the same spot.
    ///
    /// A pant converts at most once; afterwards it is dead and waits to be
    /// pruned.
    pub fn handle_fireball_collisions<R: Rng + ?Sized>(
        &mut self,
        fireballs: &mut [Fireball],
        collider: &dyn Collider,
        rng: &mut R,
    ) -> Option<Fire> {
        if !self.alive {
            return None;
        }

        let fireball = fireballs
            .iter_mut()
            .find(|f| f.is_alive() && collider.overlaps(f.body(), &self.body))?;
        fireball.destroy();
        self.alive = false;

        Some(Fire::new(self.body.pos, rng))
    }
}

impl Entity for Pant {
    fn body(&self) -> &Body {
        &self.body
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawLog, NullCanvas};
    use crate::sim::collision::AabbCollider;
    use crate::sim::projectile::Water;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_cooldown_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let fire = Fire::new(Vec2::ZERO, &mut rng);
            assert!(fire.cooldown_ms() >= FIRE_COOLDOWN_MIN_MS as f32);
            assert!(fire.cooldown_ms() < FIRE_COOLDOWN_MAX_MS as f32);
            assert_eq!(fire.heat(), FIRE_HEAT);
        }
    }

    #[test]
    fn test_fire_emits_once_when_cooldown_expires() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fire = Fire::new(Vec2::new(40.0, 60.0), &mut rng);
        let mut canvas = NullCanvas;
        fire.set_cooldown_ms(100.0);

        assert!(fire.update(60.0, &mut rng, &mut canvas).is_none());
        let fireball = fire.update(60.0, &mut rng, &mut canvas).expect("fireball");
        assert_eq!(fireball.pos(), Vec2::new(40.0, 60.0));
        let dir = fireball.body().direction;
        assert!((0.0..std::f32::consts::TAU).contains(&dir));
        assert!(fire.cooldown_ms() >= FIRE_COOLDOWN_MIN_MS as f32);

        assert!(fire.update(16.0, &mut rng, &mut canvas).is_none());
    }

    #[test]
    fn test_extinguished_fire_does_not_emit() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut fire = Fire::new(Vec2::ZERO, &mut rng);
        let mut canvas = DrawLog::new();
        fire.set_heat(0);
        fire.set_cooldown_ms(1.0);

        assert!(fire.update(50.0, &mut rng, &mut canvas).is_none());
        assert!(!fire.is_alive());
        assert!(canvas.calls.is_empty());

        // Stays inert
        assert!(fire.update(10_000.0, &mut rng, &mut canvas).is_none());
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_each_water_hit_cools_fire() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fire = Fire::new(Vec2::new(100.0, 100.0), &mut rng);
        let mut water = WaterSlots::new();
        water.spawn(Water::new(Vec2::new(100.0, 100.0), 0.0));
        water.spawn(Water::new(Vec2::new(110.0, 95.0), 0.0));
        water.spawn(Water::new(Vec2::new(300.0, 300.0), 0.0));

        fire.handle_water_collisions(&mut water, &AabbCollider);
        assert_eq!(fire.heat(), FIRE_HEAT - 2);
        assert_eq!(water.len(), 1);
        // Death is noticed on the next update
        assert!(fire.is_alive());
    }

    #[test]
    fn test_pant_converts_once_for_many_fireballs() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pant = Pant::new(Vec2::new(50.0, 50.0));
        let mut fireballs = vec![
            Fireball::new(Vec2::new(300.0, 300.0), 0.0),
            Fireball::new(Vec2::new(52.0, 50.0), 0.0),
            Fireball::new(Vec2::new(48.0, 51.0), 0.0),
        ];

        let fire = pant
            .handle_fireball_collisions(&mut fireballs, &AabbCollider, &mut rng)
            .expect("pant should ignite");
        assert_eq!(fire.pos(), Vec2::new(50.0, 50.0));
        assert!(!pant.is_alive());

        let alive: Vec<bool> = fireballs.iter().map(|f| f.is_alive()).collect();
        assert_eq!(alive, vec![true, false, true]);

        // A burnt pant never converts again
        assert!(pant
            .handle_fireball_collisions(&mut fireballs, &AabbCollider, &mut rng)
            .is_none());
    }

    #[test]
    fn test_burnt_pant_never_draws() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut pant = Pant::new(Vec2::new(50.0, 50.0));
        let mut fireballs = vec![Fireball::new(Vec2::new(50.0, 50.0), 0.0)];
        assert!(pant
            .handle_fireball_collisions(&mut fireballs, &AabbCollider, &mut rng)
            .is_some());

        let mut log = DrawLog::new();
        pant.update(&mut log);
        assert!(log.calls.is_empty());
    }

    #[test]
    fn test_dead_fireball_does_not_ignite() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pant = Pant::new(Vec2::new(50.0, 50.0));
        let mut fireballs = vec![Fireball::new(Vec2::new(50.0, 50.0), 0.0)];
        fireballs[0].destroy();

        assert!(pant
            .handle_fireball_collisions(&mut fireballs, &AabbCollider, &mut rng)
            .is_none());
        assert!(pant.is_alive());
    }
}
