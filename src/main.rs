//! Rock Splitter headless runner
//!
//! Plays the simulation with the autopilot at a fixed frame rate, logging
//! events as they happen, and prints the final snapshot summary as JSON.
//!
//! Usage: `rock-splitter [tuning.json] [--seed N] [--seconds S] [--scores FILE]`

use std::error::Error;
use std::path::PathBuf;

use rock_splitter::consts::SIM_DT;
use rock_splitter::sim::{FixedStep, GameEvent, GameState, autopilot, tick};
use rock_splitter::{HighScores, Tuning};

/// Frame time the runner pretends its display refreshes at
const FRAME_DT: f32 = 1.0 / 60.0;

struct Args {
    tuning: Option<PathBuf>,
    seed: u64,
    seconds: f32,
    scores: Option<PathBuf>,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        tuning: None,
        seed: 0x5eed,
        seconds: 120.0,
        scores: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => args.seed = it.next().ok_or("--seed needs a value")?.parse()?,
            "--seconds" => args.seconds = it.next().ok_or("--seconds needs a value")?.parse()?,
            "--scores" => args.scores = Some(it.next().ok_or("--scores needs a value")?.into()),
            other if other.starts_with("--") => return Err(format!("unknown flag {other}").into()),
            path => args.tuning = Some(path.into()),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Rock Splitter (headless) starting...");

    let args = parse_args()?;
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut state = GameState::new(args.seed, tuning);
    log::info!("Game initialized with seed: {}", args.seed);

    let mut stepper = FixedStep::new();
    let frames = (args.seconds / FRAME_DT).ceil() as u64;
    'frames: for _ in 0..frames {
        for _ in 0..stepper.advance(FRAME_DT) {
            let input = autopilot::input(&state);
            tick(&mut state, &input, SIM_DT);

            for event in state.drain_events() {
                match event {
                    GameEvent::LifeLost { remaining } => log::info!("Life lost, {} left", remaining),
                    GameEvent::GameOver { score } => log::info!("Final score {}", score),
                    other => log::debug!("{:?}", other),
                }
            }
            if state.is_game_over() {
                break 'frames;
            }
        }
    }

    if let Some(path) = &args.scores {
        let mut scores = HighScores::load(path)?;
        match scores.potential_rank(state.score) {
            Some(rank) => {
                log::info!("New high score! Rank {}", rank);
                scores.add_score(state.score, state.elapsed);
                scores.save(path)?;
            }
            None => log::info!("Score {} did not make the board", state.score),
        }
    }

    let snapshot = state.snapshot();
    let summary = serde_json::json!({
        "seed": args.seed,
        "phase": snapshot.phase,
        "score": snapshot.score,
        "lives": snapshot.lives,
        "survived_secs": state.elapsed,
        "asteroids": state.asteroids.len(),
        "shots": state.shots.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
