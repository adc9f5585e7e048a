//! Fixed timestep accumulator
//!
//! Converts host frame timestamps into a whole number of simulation steps.
//! Leftover time carries over to the next frame.

use crate::consts::{MAX_FRAME_SECS, MAX_SUBSTEPS};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    step: f32,
    max_frame: f32,
    accumulator: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            max_frame: MAX_FRAME_SECS,
            accumulator: 0.0,
            last_ms: None,
        }
    }

    /// Override the longest frame accepted in one go
    pub fn with_max_frame(mut self, max_frame: f32) -> Self {
        self.max_frame = max_frame;
        self
    }

    /// Forget timing history; the next frame only sets the reference time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_ms = None;
    }

    /// Feed a host timestamp in milliseconds. Returns how many steps to run.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let elapsed = match self.last_ms.replace(now_ms) {
            None => 0.0,
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
        };
        // Clamp to prevent a spiral of death after a stall
        self.accumulator += elapsed.min(self.max_frame);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            // Over the substep cap: drop the backlog
            self.accumulator %= self.step;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}
