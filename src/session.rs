//! A run through several levels
//!
//! Custom level texts are played in order; once they run out every further
//! level is generated. The RNG stream and the level counter carry over from
//! one level to the next. The session ends on the first `Quit`.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::Screen;
use crate::sim::{Frame, Level, Outcome, RANDOM_SENTINEL};

pub struct GameSession {
    pending: VecDeque<String>,
    screen: Screen,
    level: Level,
    levels_cleared: u32,
    finished: bool,
}

impl GameSession {
    pub fn new(levels: Vec<String>, seed: u64, screen: Screen) -> Self {
        let mut pending: VecDeque<String> = levels.into();
        let first = pending.pop_front().unwrap_or_else(|| RANDOM_SENTINEL.to_string());
        let level = Level::from_text(&first, 1, Pcg32::seed_from_u64(seed), screen);

        Self {
            pending,
            screen,
            level,
            levels_cleared: 0,
            finished: false,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn hud_message(&self) -> String {
        self.level.hud_message()
    }

    /// Run one frame of the current level, loading the next one on a win
    pub fn update(&mut self, frame: &mut Frame<'_>, elapsed_ms: u32) -> Outcome {
        if self.finished {
            return Outcome::Quit;
        }

        let outcome = self.level.update(frame, elapsed_ms);
        match outcome {
            Outcome::Advance => {
                self.levels_cleared += 1;
                self.load_next();
            }
            Outcome::Quit => {
                log::info!("Game over after {} cleared level(s)", self.levels_cleared);
                self.finished = true;
            }
            Outcome::Continue => {}
        }
        outcome
    }

    fn load_next(&mut self) {
        let source = self
            .pending
            .pop_front()
            .unwrap_or_else(|| RANDOM_SENTINEL.to_string());
        // Continue the same stream where the finished level left it
        let rng = self.level.rng.clone();
        self.level = Level::from_text(&source, self.level.number(), rng, self.screen);
    }
}
