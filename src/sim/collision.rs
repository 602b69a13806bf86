//! Bounds overlap test
//!
//! The exact overlap rule belongs to whoever owns the sprites. The simulation
//! only asks "do these two bodies touch?" through `Collider`.

use super::entity::Body;

pub trait Collider {
    fn overlaps(&self, a: &Body, b: &Body) -> bool;
}

/// Axis-aligned box test on the nominal sprite extents
///
/// Boxes that only share an edge do not overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbCollider;

impl Collider for AabbCollider {
    fn overlaps(&self, a: &Body, b: &Body) -> bool {
        let reach = a.kind.half_extents() + b.kind.half_extents();
        let delta = (a.pos - b.pos).abs();
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Circle test with a fixed radius per body
///
/// Handy where callers want overlap to depend on distance alone.
#[derive(Debug, Clone, Copy)]
pub struct RadiusCollider {
    pub radius: f32,
}

impl Collider for RadiusCollider {
    fn overlaps(&self, a: &Body, b: &Body) -> bool {
        a.pos.distance_squared(b.pos) < (2.0 * self.radius) * (2.0 * self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SpriteKind;
    use glam::Vec2;

    fn body(kind: SpriteKind, x: f32, y: f32) -> Body {
        Body::new(kind, Vec2::new(x, y), 0.0)
    }

    #[test]
    fn test_aabb_overlap() {
        // Water (8) + Fire (16 x 18)
        let fire = body(SpriteKind::Fire, 100.0, 100.0);
        assert!(AabbCollider.overlaps(&body(SpriteKind::Water, 120.0, 100.0), &fire));
        assert!(AabbCollider.overlaps(&fire, &body(SpriteKind::Water, 100.0, 125.0)));
    }

    #[test]
    fn test_aabb_touching_edges_miss() {
        let fire = body(SpriteKind::Fire, 100.0, 100.0);
        assert!(!AabbCollider.overlaps(&body(SpriteKind::Water, 124.0, 100.0), &fire));
        assert!(!AabbCollider.overlaps(&body(SpriteKind::Water, 100.0, 126.0), &fire));
    }

    #[test]
    fn test_radius_collider() {
        let collider = RadiusCollider { radius: 5.0 };
        let a = body(SpriteKind::Hero, 0.0, 0.0);
        assert!(collider.overlaps(&a, &body(SpriteKind::Fireball, 9.0, 0.0)));
        assert!(!collider.overlaps(&a, &body(SpriteKind::Fireball, 10.0, 0.0)));
    }
}
