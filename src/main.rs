//! Pants on Fire entry point
//!
//! Headless native driver: loads settings and level files, then plays a
//! session at a fixed frame length with the demo autopilot (or an idle
//! player) and reports how it went.
//!
//! Usage: `pants-on-fire [--settings <file.json>] [level files...]`

use std::path::PathBuf;

use clap::Parser;
use pants_on_fire::platform::{Autopilot, NullCanvas, ScriptedInput};
use pants_on_fire::sim::{AabbCollider, Frame, Outcome};
use pants_on_fire::{GameSession, LoadError, Settings};

#[derive(Parser, Debug)]
#[command(name = "pants-on-fire", about = "Douse the fires before they burn all the pants")]
struct Args {
    #[arg(long, value_name = "FILE", help = "JSON settings file", value_hint = clap::ValueHint::FilePath)]
    settings: Option<PathBuf>,

    #[arg(value_name = "LEVEL", help = "Level files played in order before random levels")]
    levels: Vec<PathBuf>,
}

fn run(args: Args) -> Result<(), LoadError> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::debug!("Settings: {}", settings.to_json()?);

    let mut levels = Vec::with_capacity(args.levels.len());
    for path in &args.levels {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        levels.push(text);
    }
    log::info!(
        "Pants on Fire starting: {} custom level(s), seed {}",
        levels.len(),
        settings.seed
    );

    let mut session = GameSession::new(levels, settings.seed, settings.screen);
    let mut canvas = NullCanvas;
    let collider = AabbCollider;

    let mut frames = 0u64;
    while !session.is_finished() && frames < settings.max_frames {
        let input = if settings.autopilot {
            Autopilot.plan(session.level())
        } else {
            ScriptedInput::new()
        };
        let mut frame = Frame::new(&input, &mut canvas, &collider);
        if session.update(&mut frame, settings.frame_ms) == Outcome::Advance {
            log::info!("Level cleared after {} frames", frames + 1);
        }
        frames += 1;
    }

    if !session.is_finished() {
        log::info!("Frame limit reached");
    }
    println!(
        "{}\nLevels cleared: {}\nFrames: {}",
        session.hud_message(),
        session.levels_cleared(),
        frames
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
