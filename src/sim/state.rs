//! Game state and core simulation types
//!
//! One `GameState` owns everything a run mutates: the player, the platform
//! pool, the difficulty level and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Contact;
use super::platform::{Platform, generate_platforms, recycle_front};
use super::player::Player;
use super::ring::RecycleRing;
use crate::consts::MAX_PENDING_EVENTS;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a restart
    Lost,
}

/// Something that happened during a step, for presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted { run: u32 },
    Jumped { jumps_left: u8 },
    PlatformRecycled { id: u32 },
    Landed { platform_id: u32 },
    Contact { platform_id: u32, contact: Contact },
    DifficultyRaised { level: u32, platform_speed: f32 },
    RunLost { score: u64 },
}

/// Difficulty progress for the current run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Threshold crossings so far
    pub level: u32,
    /// Current platform scroll speed
    pub platform_speed: f32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            level: 0,
            platform_speed: tuning.platform_speed,
        }
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Platforms in spawn order (left to right)
    pub platforms: RecycleRing<Platform>,
    pub difficulty: Difficulty,
    /// Simulation steps this run
    pub time_ticks: u64,
    /// Best score across runs
    pub best_score: u64,
    /// Runs started so far
    pub runs: u32,
    events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create an idle game; nothing moves until a run starts
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            player: Player::new(&tuning),
            platforms: RecycleRing::new(),
            difficulty: Difficulty::new(&tuning),
            tuning,
            phase: GamePhase::Idle,
            time_ticks: 0,
            best_score: 0,
            runs: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reset the player, regenerate the pool and start playing
    pub fn start_run(&mut self) {
        self.player = Player::new(&self.tuning);
        self.platforms = generate_platforms(&mut self.rng, &self.tuning);
        self.difficulty = Difficulty::new(&self.tuning);
        self.time_ticks = 0;
        self.runs += 1;
        self.phase = GamePhase::Playing;
        self.push_event(GameEvent::RunStarted { run: self.runs });
        log::info!("Run {} started (seed {})", self.runs, self.seed);
    }

    /// End the current run
    pub fn lose(&mut self) {
        let score = self.player.score;
        self.best_score = self.best_score.max(score);
        self.phase = GamePhase::Lost;
        self.push_event(GameEvent::RunLost { score });
        log::info!(
            "Run {} lost after {} ticks (score {}, best {})",
            self.runs,
            self.time_ticks,
            score,
            self.best_score
        );
    }

    /// Platforms the renderer should draw, front to back
    pub fn visible_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().take(self.tuning.visible_platforms)
    }

    /// Record an event for the host. Hosts are expected to drain every frame;
    /// past `MAX_PENDING_EVENTS` the oldest undrained events are dropped.
    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move the front platform behind the last one using the run RNG
    pub fn recycle_front_platform(&mut self) -> Option<u32> {
        recycle_front(&mut self.platforms, &mut self.rng, &self.tuning)
    }
}
