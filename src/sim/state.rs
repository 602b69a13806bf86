//! Level state
//!
//! The level exclusively owns every entity and the RNG stream they draw from.

use rand_pcg::Pcg32;

use super::hazard::{Fire, Pant};
use super::hero::Hero;
use super::loader::{LevelSource, Population, populate};
use super::projectile::{Fireball, WaterSlots};
use crate::platform::Screen;

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep playing this level
    Continue,
    /// Every fire is out: load the next level
    Advance,
    /// Hero was hit or every pant burned
    Quit,
}

/// One level in play
#[derive(Debug, Clone)]
pub struct Level {
    /// 1-based level counter, bumped when the level is won
    pub(crate) number: u32,
    pub(crate) screen: Screen,
    pub(crate) rng: Pcg32,
    pub(crate) hero: Hero,
    pub(crate) water: WaterSlots,
    pub(crate) pants: Vec<Pant>,
    pub(crate) fireballs: Vec<Fireball>,
    pub(crate) fires: Vec<Fire>,
}

impl Level {
    /// Build a level from `source`, drawing all randomness from `rng`
    pub fn new(source: &LevelSource, number: u32, mut rng: Pcg32, screen: Screen) -> Self {
        let Population { hero, pants, fires } = populate(source, &mut rng, screen);

        let kind = match source {
            LevelSource::Random => "random",
            LevelSource::Description(_) => "custom",
        };
        log::info!(
            "Level {}: {} layout, {} pants, {} fires",
            number,
            kind,
            pants.len(),
            fires.len()
        );

        Self {
            number,
            screen,
            rng,
            hero,
            water: WaterSlots::new(),
            pants,
            fireballs: Vec::new(),
            fires,
        }
    }

    /// Parse a level file body (or the `RANDOM` sentinel) and build it
    pub fn from_text(text: &str, number: u32, rng: Pcg32, screen: Screen) -> Self {
        Self::new(&LevelSource::parse(text), number, rng, screen)
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn water(&self) -> &WaterSlots {
        &self.water
    }

    pub fn pants(&self) -> &[Pant] {
        &self.pants
    }

    pub fn fireballs(&self) -> &[Fireball] {
        &self.fireballs
    }

    pub fn fires(&self) -> &[Fire] {
        &self.fires
    }

    /// Text for the top-left corner of the screen
    pub fn hud_message(&self) -> String {
        format!(
            "Level: {}\nPants left: {}\nFires left: {}",
            self.number,
            self.pants.len(),
            self.fires.len()
        )
    }
}
