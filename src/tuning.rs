//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON file. Missing fields
//! fall back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    /// Simulation timestep (seconds)
    pub timestep: f32,
    /// Longest host frame fed to the step accumulator (seconds)
    pub max_frame: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_speed: f32,
    pub max_jumps: u8,

    // === Contacts ===
    pub knockback_speed: f32,
    pub bump_speed: f32,

    // === Platforms ===
    pub pool_size: usize,
    pub visible_platforms: usize,
    pub platform_height: f32,
    pub platform_min_width: f32,
    pub platform_speed: f32,
    pub spawn_gap_min: f32,
    pub spawn_gap_max: f32,
    pub spawn_band_high: f32,
    pub spawn_band_low: f32,

    // === Difficulty ===
    pub difficulty_threshold: u64,
    pub difficulty_max_multiple: u64,
    pub platform_speed_step: f32,
    pub animation_speed: f32,
    pub animation_speed_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            timestep: SIM_DT,
            max_frame: MAX_FRAME_SECS,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            jump_speed: JUMP_SPEED,
            max_jumps: MAX_JUMPS,

            knockback_speed: KNOCKBACK_SPEED,
            bump_speed: BUMP_SPEED,

            pool_size: POOL_SIZE,
            visible_platforms: VISIBLE_PLATFORMS,
            platform_height: PLATFORM_HEIGHT,
            platform_min_width: PLATFORM_MIN_WIDTH,
            platform_speed: PLATFORM_SPEED,
            spawn_gap_min: SPAWN_GAP_MIN,
            spawn_gap_max: SPAWN_GAP_MAX,
            spawn_band_high: SPAWN_BAND_HIGH,
            spawn_band_low: SPAWN_BAND_LOW,

            difficulty_threshold: DIFFICULTY_THRESHOLD,
            difficulty_max_multiple: DIFFICULTY_MAX_MULTIPLE,
            platform_speed_step: PLATFORM_SPEED_STEP,
            animation_speed: ANIMATION_SPEED,
            animation_speed_step: ANIMATION_SPEED_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        // Out-of-range JSON numbers parse as infinity
        let floats = [
            ("timestep", self.timestep),
            ("max_frame", self.max_frame),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_start_x", self.player_start_x),
            ("player_start_y", self.player_start_y),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("jump_speed", self.jump_speed),
            ("knockback_speed", self.knockback_speed),
            ("bump_speed", self.bump_speed),
            ("platform_height", self.platform_height),
            ("platform_min_width", self.platform_min_width),
            ("platform_speed", self.platform_speed),
            ("spawn_gap_min", self.spawn_gap_min),
            ("spawn_gap_max", self.spawn_gap_max),
            ("spawn_band_high", self.spawn_band_high),
            ("spawn_band_low", self.spawn_band_low),
            ("platform_speed_step", self.platform_speed_step),
            ("animation_speed", self.animation_speed),
            ("animation_speed_step", self.animation_speed_step),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return Err(TuningError::NotFinite(*name));
        }

        if self.max_frame <= 0.0 {
            return Err(TuningError::Invalid("max_frame must be positive"));
        }
        if !(MIN_TIMESTEP..=self.max_frame).contains(&self.timestep) {
            return Err(TuningError::Invalid(
                "timestep must lie between the minimum step and max_frame",
            ));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(TuningError::Invalid("canvas must have a positive size"));
        }
        if !(self.player_width > 0.0 && self.player_height > 0.0) {
            return Err(TuningError::Invalid("player must have a positive size"));
        }
        if !(self.platform_height > 0.0 && self.platform_min_width > 0.0) {
            return Err(TuningError::Invalid("platforms must have a positive size"));
        }
        if self.platform_min_width > self.canvas_width {
            return Err(TuningError::Invalid(
                "minimum platform width exceeds canvas width",
            ));
        }
        // A zero gap would let recycled platforms touch their predecessor
        if !(self.spawn_gap_min > 0.0 && self.spawn_gap_min <= self.spawn_gap_max) {
            return Err(TuningError::Invalid("spawn gap range must be positive and ordered"));
        }
        if self.spawn_band_low > self.spawn_band_high {
            return Err(TuningError::Invalid("spawn band is inverted"));
        }
        let (high, low) = self.spawn_band();
        if !(high.is_finite() && low.is_finite() && (low - high).is_finite()) {
            return Err(TuningError::Invalid("spawn band is out of range"));
        }
        if self.visible_platforms == 0 || self.pool_size < self.visible_platforms {
            return Err(TuningError::Invalid(
                "pool must hold at least the visible platforms",
            ));
        }
        if self.pool_size < 2 {
            return Err(TuningError::Invalid("pool needs at least two platforms"));
        }
        if self.difficulty_threshold == 0 {
            return Err(TuningError::Invalid("difficulty threshold must be non-zero"));
        }
        if self
            .difficulty_threshold
            .checked_mul(self.difficulty_max_multiple)
            .is_none()
        {
            return Err(TuningError::Invalid("difficulty cap overflows"));
        }
        Ok(())
    }

    /// Score at which difficulty stops scaling
    pub fn difficulty_cap(&self) -> u64 {
        self.difficulty_threshold.saturating_mul(self.difficulty_max_multiple)
    }

    /// Top and bottom of the band platform tops spawn in, in screen y
    pub fn spawn_band(&self) -> (f32, f32) {
        (
            self.canvas_height - self.spawn_band_high,
            self.canvas_height - self.spawn_band_low,
        )
    }
}
