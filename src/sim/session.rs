//! Host-facing game loop
//!
//! A `Session` is what a frame scheduler drives: discrete inputs arrive between
//! frames, each frame feeds its timestamp to the accumulator, and the session
//! runs as many fixed steps as the elapsed time allows. Once a run is lost no
//! more steps run until a start input arrives.

use super::clock::FrameClock;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::leaderboard::ScoreSubmission;
use crate::tuning::Tuning;

/// Discrete player inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Start,
    /// Single-button control: jump while playing, start otherwise
    Action,
}

pub struct Session {
    state: GameState,
    clock: FrameClock,
    /// One-shot inputs waiting for the next step
    pending: TickInput,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let clock = FrameClock::new(tuning.timestep).with_max_frame(tuning.max_frame);
        Self {
            state: GameState::new(seed, tuning),
            clock,
            pending: TickInput::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Queue an input for the next step. Inputs that make no sense in the
    /// current phase are dropped.
    pub fn input(&mut self, event: InputEvent) {
        let playing = self.state.phase == GamePhase::Playing;
        match event {
            InputEvent::Jump if playing => self.pending.jump = true,
            InputEvent::Start if !playing => self.pending.start = true,
            InputEvent::Action if playing => self.pending.jump = true,
            InputEvent::Action => self.pending.start = true,
            _ => {}
        }
    }

    /// Run one host frame at `now_ms`. Returns the events it produced.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.step();

        if self.pending.start && self.state.phase != GamePhase::Playing {
            let input = std::mem::take(&mut self.pending);
            tick(&mut self.state, &input, dt);
            // Timing restarts from this frame
            self.clock.reset();
        }

        if self.state.phase == GamePhase::Playing {
            let steps = self.clock.advance(now_ms);
            for _ in 0..steps {
                let input = std::mem::take(&mut self.pending);
                tick(&mut self.state, &input, dt);
                if self.state.phase != GamePhase::Playing {
                    break;
                }
            }
        }

        if self.state.phase == GamePhase::Playing {
            self.state.player.advance_animation();
        }

        self.state.drain_events()
    }

    /// Render interpolation factor for the current frame
    pub fn alpha(&self) -> f32 {
        self.clock.alpha()
    }

    /// Leaderboard submission for the best score so far, counting a run in progress
    pub fn submission(&self, name: impl Into<String>) -> ScoreSubmission {
        let score = self.state.best_score.max(self.state.player.score);
        ScoreSubmission::new(name, score)
    }
}
