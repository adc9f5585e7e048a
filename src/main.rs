//! Runna entry point
//!
//! Headless native runner: plays one autopiloted run at 60 fps of simulated
//! frame time, submits the score through the leaderboard routes and prints
//! the resulting table.
//!
//! Environment:
//! - `RUNNA_TUNING`: path to a tuning JSON file
//! - `RUNNA_SEED`: run seed (defaults to the clock)
//! - `RUNNA_LEADERBOARD`: path to a JSON array used to seed the leaderboard
//!
//! The first argument, if any, is the name submitted with the score.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::time::{SystemTime, UNIX_EPOCH};

    use runna::leaderboard::routes::{self, LEADERBOARD, SCORES};
    use runna::sim::{GameEvent, GamePhase, InputEvent, Session, autopilot};
    use runna::{Leaderboard, Tuning};

    /// Give up on runs that outlast ten minutes of game time
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn load_tuning() -> Result<Tuning, Box<dyn Error>> {
        match std::env::var("RUNNA_TUNING") {
            Ok(path) => Ok(Tuning::load(path)?),
            Err(_) => Ok(Tuning::default()),
        }
    }

    fn load_leaderboard() -> Result<Leaderboard, Box<dyn Error>> {
        match std::env::var("RUNNA_LEADERBOARD") {
            Ok(path) => Ok(Leaderboard::from_json(&std::fs::read_to_string(path)?)?),
            Err(_) => Ok(Leaderboard::new()),
        }
    }

    fn seed() -> u64 {
        std::env::var("RUNNA_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0)
            })
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let tuning = load_tuning()?;
        let mut board = load_leaderboard()?;
        let name = std::env::args().nth(1).unwrap_or_else(|| "runner".to_string());
        let seed = seed();

        let mut session = Session::new(seed, tuning);
        log::info!("Game initialized with seed: {}", seed);

        let mut now = 0.0;
        session.input(InputEvent::Start);
        session.frame(now);

        for _ in 0..MAX_FRAMES {
            now += FRAME_MS;
            if autopilot::should_jump(session.state()) {
                session.input(InputEvent::Jump);
            }
            for event in session.frame(now) {
                match event {
                    GameEvent::DifficultyRaised {
                        level,
                        platform_speed,
                    } => log::info!("Level {level} ({platform_speed:.0}px/s)"),
                    GameEvent::RunLost { score } => log::info!("Final score: {score}"),
                    _ => {}
                }
            }
            if session.phase() == GamePhase::Lost {
                break;
            }
        }

        if session.phase() == GamePhase::Playing {
            log::warn!("Run still going after {MAX_FRAMES} frames, stopping");
        }

        let body = serde_json::to_string(&session.submission(name))?;
        let response = routes::handle(&mut board, "POST", SCORES, &body);
        log::info!("Submitted score: HTTP {}", response.status);

        let response = routes::handle(&mut board, "GET", LEADERBOARD, "");
        println!("{}", response.body);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Runna (headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
