//! Runna - a side-scrolling jump/run arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, platform recycling, collisions, run state)
//! - `tuning`: Data-driven game balance
//! - `leaderboard`: Score table and its HTTP-shaped request handling
//! - `error`: Validation and configuration errors

pub mod error;
pub mod leaderboard;
pub mod sim;
pub mod tuning;

pub use error::{TuningError, ValidationError};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Distances are pixels, times are seconds.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest frame fed to the accumulator (a stalled tab must not replay minutes)
    pub const MAX_FRAME_SECS: f32 = 0.25;
    /// Shortest timestep a tuning file may ask for
    pub const MIN_TIMESTEP: f32 = 1e-4;
    /// Most steps run for a single host frame
    pub const MAX_SUBSTEPS: u32 = 64;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 1024;

    /// Viewport
    pub const CANVAS_WIDTH: f32 = 500.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Player body and spawn point
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 30.0;

    /// Gravity (pixels/s²)
    pub const GRAVITY: f32 = 2000.0;
    /// Terminal fall speed (pixels/s, downward)
    pub const MAX_FALL_SPEED: f32 = 1000.0;
    /// Upward speed applied on jump
    pub const JUMP_SPEED: f32 = 600.0;
    /// Jumps available between ground contacts
    pub const MAX_JUMPS: u8 = 2;

    /// Horizontal impulse when a platform sweeps into the player from the right
    pub const KNOCKBACK_SPEED: f32 = -500.0;
    /// Downward impulse when the player hits a platform from below
    pub const BUMP_SPEED: f32 = 500.0;

    /// Platform pool
    pub const POOL_SIZE: usize = 30;
    pub const VISIBLE_PLATFORMS: usize = 5;
    pub const PLATFORM_HEIGHT: f32 = 50.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 70.0;
    pub const PLATFORM_SPEED: f32 = 400.0;
    /// Horizontal gap between consecutive platforms
    pub const SPAWN_GAP_MIN: f32 = 50.0;
    pub const SPAWN_GAP_MAX: f32 = 150.0;
    /// Platform tops spawn between these distances above the canvas bottom
    pub const SPAWN_BAND_HIGH: f32 = 200.0;
    pub const SPAWN_BAND_LOW: f32 = 50.0;

    /// Difficulty scaling
    pub const DIFFICULTY_THRESHOLD: u64 = 400;
    pub const DIFFICULTY_MAX_MULTIPLE: u64 = 4;
    pub const PLATFORM_SPEED_STEP: f32 = 70.0;

    /// Sprite animation
    pub const ANIMATION_SPEED: f32 = 0.4;
    pub const ANIMATION_SPEED_STEP: f32 = 0.1;
}
