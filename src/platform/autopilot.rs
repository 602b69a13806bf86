//! Demo input: plays the level without a human
//!
//! Each frame it looks at the level, dodges fireballs that are closing in,
//! otherwise walks toward the nearest fire and sprays it.

use glam::Vec2;

use super::input::{Key, ScriptedInput};
use crate::consts::*;
use crate::sim::{ControlScheme, Entity, Level};

/// Fireballs nearer than this, and heading our way, trigger a dodge
const DODGE_RADIUS: f32 = 90.0;
/// Keys are treated as "on axis" inside this window
const AXIS_SLACK: f32 = 8.0;
/// MouseFacing keeps this distance from its target
const STANDOFF: f32 = 120.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn plan(&self, level: &Level) -> ScriptedInput {
        let hero = level.hero().pos();

        if let Some(away) = self.threat(level) {
            let mut input = ScriptedInput::new().point_at(hero + away * 100.0);
            if level.hero().control() != Ok(ControlScheme::MouseSeek) {
                input = hold_toward(input, away);
            }
            return input;
        }

        let Some(target) = level
            .fires()
            .iter()
            .map(|f| f.pos())
            .min_by(|a, b| a.distance_squared(hero).total_cmp(&b.distance_squared(hero)))
        else {
            return ScriptedInput::new();
        };

        let delta = target - hero;
        let mut input = ScriptedInput::new().point_at(target);
        if delta.length() < WATER_RANGE {
            input = input.hold(Key::Mouse);
        }

        match level.hero().control() {
            Ok(ControlScheme::Direct) => {
                // Line up on the short axis first, then face down the long one
                let (minor, major) = if delta.x.abs() < delta.y.abs() {
                    (Vec2::new(delta.x, 0.0), Vec2::new(0.0, delta.y))
                } else {
                    (Vec2::new(0.0, delta.y), Vec2::new(delta.x, 0.0))
                };
                if minor.length() > AXIS_SLACK {
                    input = hold_toward(input, minor);
                } else {
                    input = hold_toward(input, major);
                }
            }
            Ok(ControlScheme::MouseFacing) => {
                if delta.length() > STANDOFF {
                    input = hold_toward(input, delta);
                }
            }
            // Seeking walks by itself
            Ok(ControlScheme::MouseSeek) | Err(_) => {}
        }

        input
    }

    /// Direction to run from the closest incoming fireball
    fn threat(&self, level: &Level) -> Option<Vec2> {
        let hero = level.hero().pos();
        level
            .fireballs()
            .iter()
            .filter(|f| {
                let to_hero = hero - f.pos();
                to_hero.length() < DODGE_RADIUS && f.body().heading().dot(to_hero) > 0.0
            })
            .min_by(|a, b| a.pos().distance_squared(hero).total_cmp(&b.pos().distance_squared(hero)))
            .map(|f| {
                // Step sideways off the fireball's line
                let heading = f.body().heading();
                let side = Vec2::new(-heading.y, heading.x);
                if side.dot(hero - f.pos()) >= 0.0 { side } else { -side }
            })
    }
}

/// Hold the WASD keys that move along `dir`
fn hold_toward(mut input: ScriptedInput, dir: Vec2) -> ScriptedInput {
    if dir.x > AXIS_SLACK * 0.1 {
        input = input.hold(Key::D);
    } else if dir.x < -AXIS_SLACK * 0.1 {
        input = input.hold(Key::A);
    }
    if dir.y > AXIS_SLACK * 0.1 {
        input = input.hold(Key::S);
    } else if dir.y < -AXIS_SLACK * 0.1 {
        input = input.hold(Key::W);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{NullCanvas, Screen};
    use crate::sim::{AabbCollider, Frame, Outcome};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn play(control: i32) -> Outcome {
        let text = format!("ControlType: {control}\nHERO @ 100, 300\nFIRE @ 260, 300\nPANT @ 700, 500\n");
        let mut level = Level::from_text(&text, 1, Pcg32::seed_from_u64(3), Screen::new(800, 600));
        let mut canvas = NullCanvas;

        for _ in 0..180 {
            let input = Autopilot.plan(&level);
            let mut frame = Frame::new(&input, &mut canvas, &AabbCollider);
            let outcome = level.update(&mut frame, 16);
            if outcome != Outcome::Continue {
                return outcome;
            }
        }
        Outcome::Continue
    }

    #[test]
    fn test_autopilot_clears_single_fire() {
        for control in 1..=3 {
            assert_eq!(play(control), Outcome::Advance, "control type {control}");
        }
    }

    #[test]
    fn test_autopilot_dodges_incoming_fireball() {
        let mut level = Level::from_text(
            "ControlType: 1\nHERO @ 100, 300\nFIRE @ 600, 100\nPANT @ 700, 500\n",
            1,
            Pcg32::seed_from_u64(3),
            Screen::new(800, 600),
        );
        let input = Autopilot.plan(&level);
        assert!(input.held.contains(&Key::Mouse) || input.held.contains(&Key::D) || input.held.contains(&Key::W));

        // Fireball below the hero flying straight up at it
        level.fireballs.push(crate::sim::Fireball::new(
            Vec2::new(100.0, 360.0),
            3.0 * std::f32::consts::FRAC_PI_2,
        ));
        let input = Autopilot.plan(&level);
        assert!(!input.held.contains(&Key::Mouse));
        assert!(input.held.contains(&Key::A) || input.held.contains(&Key::D));
    }
}
