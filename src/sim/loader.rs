//! Level descriptions
//!
//! Line-oriented text format:
//!
//! ```text
//! ControlType: 2
//! HERO @ 100, 100
//! FIRE @ 50, 50
//! PANT @ 10, 10
//! ```
//!
//! Anything that does not parse is skipped. A body of `RANDOM` asks for a
//! procedurally generated level instead.

use glam::Vec2;
use rand::Rng;

use super::hazard::{Fire, Pant};
use super::hero::{ControlScheme, Hero};
use crate::consts::*;
use crate::platform::Screen;

/// Sentinel body requesting a random level
pub const RANDOM_SENTINEL: &str = "RANDOM";

const CONTROL_TYPE_PREFIX: &str = "ControlType:";

/// Parsed contents of a level file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelDescription {
    /// Raw control type code (validated when the hero is built)
    pub control: Option<i32>,
    /// Last `HERO` line wins
    pub hero: Option<Vec2>,
    pub pants: Vec<Vec2>,
    pub fires: Vec<Vec2>,
}

impl LevelDescription {
    pub fn parse(text: &str) -> Self {
        let mut desc = Self::default();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(code) = line.strip_prefix(CONTROL_TYPE_PREFIX) {
                match code.trim().parse::<i32>() {
                    Ok(code) => desc.control = Some(code),
                    Err(_) => log::debug!("line {}: bad control type {:?}", line_no + 1, raw),
                }
                continue;
            }

            let Some((tag, coords)) = line.split_once('@') else {
                log::debug!("line {}: ignored {:?}", line_no + 1, raw);
                continue;
            };
            let Some(pos) = parse_coords(coords) else {
                log::debug!("line {}: bad coordinates {:?}", line_no + 1, raw);
                continue;
            };

            match tag.trim() {
                "HERO" => desc.hero = Some(pos),
                "PANT" => desc.pants.push(pos),
                "FIRE" => desc.fires.push(pos),
                _ => log::debug!("line {}: unknown entity {:?}", line_no + 1, raw),
            }
        }

        desc
    }
}

/// `"<x>, <y>"` as decimal floats
fn parse_coords(coords: &str) -> Option<Vec2> {
    let (x, y) = coords.split_once(',')?;
    let x = x.trim().parse::<f32>().ok()?;
    let y = y.trim().parse::<f32>().ok()?;
    Some(Vec2::new(x, y))
}

/// Where a level's entities come from
#[derive(Debug, Clone, PartialEq)]
pub enum LevelSource {
    Random,
    Description(LevelDescription),
}

impl LevelSource {
    pub fn parse(text: &str) -> Self {
        if text.trim() == RANDOM_SENTINEL {
            LevelSource::Random
        } else {
            LevelSource::Description(LevelDescription::parse(text))
        }
    }
}

/// Freshly built entities for a new level
#[derive(Debug, Clone)]
pub struct Population {
    pub hero: Hero,
    pub pants: Vec<Pant>,
    pub fires: Vec<Fire>,
}

/// Build the starting entities. Every random draw comes from `rng`, in a
/// fixed order, so a seed fully determines the result.
pub fn populate<R: Rng + ?Sized>(source: &LevelSource, rng: &mut R, screen: Screen) -> Population {
    match source {
        LevelSource::Random => populate_random(rng, screen),
        LevelSource::Description(desc) => {
            let control = ControlScheme::from_code(desc.control.unwrap_or(0));
            let hero_pos = desc.hero.unwrap_or_else(|| {
                log::warn!("level has no HERO line, placing hero at screen center");
                screen.center()
            });

            Population {
                hero: Hero::new(hero_pos, control),
                pants: desc.pants.iter().map(|&pos| Pant::new(pos)).collect(),
                fires: desc.fires.iter().map(|&pos| Fire::new(pos, rng)).collect(),
            }
        }
    }
}

fn populate_random<R: Rng + ?Sized>(rng: &mut R, screen: Screen) -> Population {
    let control = ControlScheme::from_code(rng.random_range(1..=3));
    let hero = Hero::new(screen.center(), control);

    let pants = (0..RANDOM_PANT_COUNT)
        .map(|_| Pant::new(random_pos(rng, screen)))
        .collect();
    let fires = (0..RANDOM_FIRE_COUNT)
        .map(|_| {
            let pos = random_pos(rng, screen);
            Fire::new(pos, rng)
        })
        .collect();

    Population { hero, pants, fires }
}

/// Integer-valued point inside the screen
fn random_pos<R: Rng + ?Sized>(rng: &mut R, screen: Screen) -> Vec2 {
    let x = rng.random_range(0..screen.width.max(1));
    let y = rng.random_range(0..screen.height.max(1));
    Vec2::new(x as f32, y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Entity;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_parse_reference_level() {
        let text = "ControlType: 2\nHERO @ 100, 100\nFIRE @ 50, 50\nPANT @ 10, 10\n";
        let mut rng = Pcg32::seed_from_u64(0);
        let population = populate(&LevelSource::parse(text), &mut rng, Screen::default());

        assert_eq!(population.hero.pos(), Vec2::new(100.0, 100.0));
        assert_eq!(population.hero.control(), Ok(ControlScheme::MouseFacing));
        assert_eq!(population.fires.len(), 1);
        assert_eq!(population.fires[0].pos(), Vec2::new(50.0, 50.0));
        assert_eq!(population.pants.len(), 1);
        assert_eq!(population.pants[0].pos(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_parse_is_permissive() {
        let text = "ControlType:3\r\n\
                    # a comment\n\
                    PANT@1.5,2.25\n\
                    PANT @ one, 2\n\
                    FIRE @ 4\n\
                    TREE @ 1, 1\n\
                    FIRE   @   -3.0 ,  7\n";
        let desc = LevelDescription::parse(text);
        assert_eq!(desc.control, Some(3));
        assert_eq!(desc.hero, None);
        assert_eq!(desc.pants, vec![Vec2::new(1.5, 2.25)]);
        assert_eq!(desc.fires, vec![Vec2::new(-3.0, 7.0)]);
    }

    #[test]
    fn test_missing_control_type_is_invalid() {
        let mut rng = Pcg32::seed_from_u64(0);
        let source = LevelSource::parse("HERO @ 1, 2\nPANT @ 3, 4\n");
        let population = populate(&source, &mut rng, Screen::default());
        assert!(population.hero.control().is_err());
    }

    #[test]
    fn test_random_sentinel() {
        assert_eq!(LevelSource::parse("RANDOM"), LevelSource::Random);
        assert_eq!(LevelSource::parse("  RANDOM\n"), LevelSource::Random);

        let mut rng = Pcg32::seed_from_u64(11);
        let screen = Screen::new(640, 480);
        let population = populate(&LevelSource::Random, &mut rng, screen);
        assert_eq!(population.pants.len(), RANDOM_PANT_COUNT);
        assert_eq!(population.fires.len(), RANDOM_FIRE_COUNT);
        assert_eq!(population.hero.pos(), Vec2::new(320.0, 240.0));
        assert!(population.hero.control().is_ok());
        for pant in &population.pants {
            let p = pant.pos();
            assert!(p.x >= 0.0 && p.x < 640.0 && p.y >= 0.0 && p.y < 480.0);
        }
    }

    proptest! {
        #[test]
        fn prop_random_levels_replay(seed in any::<u64>()) {
            let screen = Screen::new(800, 600);
            let a = populate(&LevelSource::Random, &mut Pcg32::seed_from_u64(seed), screen);
            let b = populate(&LevelSource::Random, &mut Pcg32::seed_from_u64(seed), screen);

            prop_assert_eq!(a.hero.control(), b.hero.control());
            let pants_a: Vec<Vec2> = a.pants.iter().map(|p| p.pos()).collect();
            let pants_b: Vec<Vec2> = b.pants.iter().map(|p| p.pos()).collect();
            prop_assert_eq!(pants_a, pants_b);
            for (fa, fb) in a.fires.iter().zip(&b.fires) {
                prop_assert_eq!(fa.pos(), fb.pos());
                prop_assert_eq!(fa.cooldown_ms(), fb.cooldown_ms());
            }
        }
    }
}
