//! Straight-line projectiles: water shots and fireballs

use glam::Vec2;

use super::collision::Collider;
use super::entity::{Body, Entity, SpriteKind};
use crate::consts::*;
use crate::platform::{Canvas, Screen};

/// A water shot fired by the hero
#[derive(Debug, Clone)]
pub struct Water {
    body: Body,
    distance_traveled: f32,
    alive: bool,
}

impl Water {
    pub fn new(pos: Vec2, direction: f32) -> Self {
        Self {
            body: Body::new(SpriteKind::Water, pos, direction),
            distance_traveled: 0.0,
            alive: true,
        }
    }

    /// Total distance credited so far, including the step that expired it
    pub fn distance_traveled(&self) -> f32 {
        self.distance_traveled
    }

    /// Move and draw. Returns false once the shot has used up its range.
    ///
    /// The step that would carry the shot past `WATER_RANGE` is never applied.
    pub fn update(&mut self, dt: f32, canvas: &mut dyn Canvas) -> bool {
        if !self.alive {
            return false;
        }

        let step = self.body.heading() * (WATER_SPEED * dt);
        self.distance_traveled += step.length();

        if self.distance_traveled >= WATER_RANGE {
            self.alive = false;
            return false;
        }

        self.body.pos += step;
        self.body.draw(canvas);
        true
    }
}

impl Entity for Water {
    fn body(&self) -> &Body {
        &self.body
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Fixed-capacity sparse set of water shots
///
/// New shots always take the lowest empty slot.
#[derive(Debug, Clone, Default)]
pub struct WaterSlots {
    slots: [Option<Water>; WATER_CAPACITY],
}

impl WaterSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Place a shot in the first empty slot. Returns the slot used, or None
    /// (dropping the shot) when every slot is taken.
    pub fn spawn(&mut self, water: Water) -> Option<usize> {
        let index = self.first_free()?;
        self.slots[index] = Some(water);
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&Water> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn remove(&mut self, index: usize) -> Option<Water> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Water)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|w| (i, w)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every shot, emptying the slots of expired ones
    pub fn update(&mut self, dt: f32, canvas: &mut dyn Canvas) {
        for slot in &mut self.slots {
            let expired = slot
                .as_mut()
                .is_some_and(|water| !water.update(dt, canvas));
            if expired {
                *slot = None;
            }
        }
    }

    /// Empty every occupied slot whose shot overlaps `body`, returning how
    /// many were removed
    pub fn remove_overlapping(&mut self, body: &Body, collider: &dyn Collider) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            let hit = slot
                .as_ref()
                .is_some_and(|water| collider.overlaps(water.body(), body));
            if hit {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }
}

/// A fireball spat out by a fire
#[derive(Debug, Clone)]
pub struct Fireball {
    body: Body,
    alive: bool,
}

impl Fireball {
    pub fn new(pos: Vec2, direction: f32) -> Self {
        Self {
            body: Body::new(SpriteKind::Fireball, pos, direction),
            alive: true,
        }
    }

    /// True once the fireball is at least `FIREBALL_OFFSCREEN_MARGIN` outside
    /// the visible area on any side
    pub fn is_off_screen(&self, screen: Screen) -> bool {
        let Vec2 { x, y } = self.body.pos;
        let margin = FIREBALL_OFFSCREEN_MARGIN;
        x <= -margin
            || x >= screen.width as f32 + margin
            || y <= -margin
            || y >= screen.height as f32 + margin
    }

    pub fn update(&mut self, dt: f32, screen: Screen, canvas: &mut dyn Canvas) {
        if !self.alive {
            return;
        }
        if self.is_off_screen(screen) {
            self.alive = false;
            return;
        }

        self.body.advance(FIREBALL_SPEED * dt);
        self.body.draw(canvas);
    }

    /// Water and fireball destroy each other on contact. Every overlapping
    /// shot is consumed.
    pub fn handle_water_collisions(&mut self, water: &mut WaterSlots, collider: &dyn Collider) {
        if !self.alive {
            return;
        }
        if water.remove_overlapping(&self.body, collider) > 0 {
            self.alive = false;
        }
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

impl Entity for Fireball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
