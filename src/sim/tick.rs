//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one step. Order per step:
//! move player → scroll and recycle platforms → loss check → score →
//! collisions → difficulty.

use super::collision::{Contact, resolve_collisions};
use super::platform::advance_platforms;
use super::player::PlayerState;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (ignored unless playing)
    pub jump: bool,
    /// Start a new run (ignored while playing)
    pub start: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.start && state.phase != GamePhase::Playing {
        // Starting consumes the tick; the first step runs on the next one
        state.start_run();
        return;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    if input.jump && state.player.jump(&state.tuning) {
        let jumps_left = state.player.jumps;
        state.push_event(GameEvent::Jumped { jumps_left });
    }

    // 1. Movement
    state.player.integrate(&state.tuning, dt);
    recycle_platforms(state, dt);

    // 2. Loss check
    if state.player.is_out_of_bounds(&state.tuning) {
        state.lose();
        return;
    }

    // 3. Score
    state.player.score += 1;
    state.time_ticks += 1;

    // 4. Collisions
    handle_collisions(state);

    // 5. Difficulty
    scale_difficulty(state);
}

/// Scroll every platform, then recycle the ones that had left the screen
fn recycle_platforms(state: &mut GameState, dt: f32) {
    let recycle_count = advance_platforms(&mut state.platforms, dt);
    for _ in 0..recycle_count {
        if let Some(id) = state.recycle_front_platform() {
            log::trace!("Recycled platform {id}");
            state.push_event(GameEvent::PlatformRecycled { id });
        }
    }
}

fn handle_collisions(state: &mut GameState) {
    let was_grounded = state.player.state == PlayerState::Grounded;
    let Some(hit) = resolve_collisions(&mut state.player, &state.platforms, &state.tuning) else {
        return;
    };

    match hit.contact {
        Contact::Top => {
            if !was_grounded && state.player.state == PlayerState::Grounded {
                state.push_event(GameEvent::Landed {
                    platform_id: hit.platform_id,
                });
            }
        }
        contact => {
            log::debug!("{contact:?} contact with platform {}", hit.platform_id);
            state.push_event(GameEvent::Contact {
                platform_id: hit.platform_id,
                contact,
            });
        }
    }
}

/// Speed platforms up each time the score crosses a threshold, until the cap
fn scale_difficulty(state: &mut GameState) {
    let score = state.player.score;
    if score >= state.tuning.difficulty_cap() {
        return;
    }

    if score.checked_rem(state.tuning.difficulty_threshold) == Some(0) {
        let step = state.tuning.platform_speed_step;
        for platform in state.platforms.iter_mut() {
            platform.speed += step;
        }
        state.difficulty.level += 1;
        state.difficulty.platform_speed += step;

        let level = state.difficulty.level;
        let platform_speed = state.difficulty.platform_speed;
        log::debug!("Difficulty {level}: platforms at {platform_speed:.0}px/s");
        state.push_event(GameEvent::DifficultyRaised {
            level,
            platform_speed,
        });
    }
    state.player.animation_speed += state.tuning.animation_speed_step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ring::RecycleRing;
    use crate::tuning::Tuning;

    const START: TickInput = TickInput {
        jump: false,
        start: true,
    };
    const JUMP: TickInput = TickInput {
        jump: true,
        start: false,
    };

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default());
        let dt = state.tuning.timestep;
        tick(&mut state, &START, dt);
        state
    }

    #[test]
    fn test_idle_until_start() {
        let mut state = GameState::new(7, Tuning::default());
        let dt = state.tuning.timestep;
        tick(&mut state, &TickInput::default(), dt);
        tick(&mut state, &JUMP, dt);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &START, dt);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_counts_ticks() {
        let mut state = playing(7);
        let dt = state.tuning.timestep;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), dt);
        }
        assert_eq!(state.player.score, 10);
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = playing(7);
        let dt = state.tuning.timestep;
        tick(&mut state, &TickInput::default(), dt);
        tick(&mut state, &START, dt);
        assert_eq!(state.runs, 1);
        assert_eq!(state.player.score, 2);
    }

    #[test]
    fn test_falls_out_without_platforms() {
        let mut state = playing(7);
        state.platforms = RecycleRing::new();
        let dt = state.tuning.timestep;
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default(), dt);
            ticks += 1;
            assert!(ticks < 1000);
        }
        assert_eq!(state.phase, GamePhase::Lost);
        assert!(state.player.pos.y > state.tuning.canvas_height);
        assert_eq!(state.best_score, state.player.score);
        assert!(state.events().contains(&GameEvent::RunLost {
            score: state.player.score
        }));

        // Lost is terminal until restarted
        let score = state.player.score;
        tick(&mut state, &TickInput::default(), dt);
        assert_eq!(state.player.score, score);
    }

    #[test]
    fn test_lands_on_first_platform() {
        let mut state = playing(7);
        let dt = state.tuning.timestep;
        for platform in state.platforms.iter_mut() {
            platform.speed = 0.0;
        }
        // Keep the first platform under the spawn point
        let first = state.platforms.get_mut(0).unwrap();
        first.pos.x = 0.0;
        first.prev_x = 0.0;
        first.width = 400.0;
        let top = first.pos.y;

        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), dt);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.state, PlayerState::Grounded);
        assert_eq!(state.player.pos.y, top - state.player.height);
        assert!(
            state
                .events()
                .iter()
                .any(|e| matches!(e, GameEvent::Landed { platform_id: 0 }))
        );
    }

    #[test]
    fn test_jump_input() {
        let mut state = playing(7);
        let dt = state.tuning.timestep;
        tick(&mut state, &JUMP, dt);
        assert_eq!(state.player.jumps, state.tuning.max_jumps - 1);
        assert_eq!(state.player.state, PlayerState::Jumping);
        assert!(state.player.vel.y < 0.0);
    }

    #[test]
    fn test_off_screen_platform_is_recycled() {
        let mut state = playing(7);
        let dt = state.tuning.timestep;
        let front_id = state.platforms.front().unwrap().id;
        let last_right = state.platforms.back().unwrap().right();
        state.platforms.get_mut(0).unwrap().pos.x = -2000.0;

        tick(&mut state, &TickInput::default(), dt);
        assert_eq!(state.platforms.len(), state.tuning.pool_size);
        let back = state.platforms.back().unwrap();
        assert_eq!(back.id, front_id);
        // The old last platform scrolled one step before the recycle
        let scrolled = state.tuning.platform_speed * dt;
        assert!(back.pos.x > last_right - scrolled);
        assert!(
            state
                .events()
                .contains(&GameEvent::PlatformRecycled { id: front_id })
        );
    }

    #[test]
    fn test_difficulty_thresholds_and_cap() {
        let mut state = playing(7);
        let base_speed = state.tuning.platform_speed;
        let step = state.tuning.platform_speed_step;

        state.player.score = 399;
        scale_difficulty_at_next_score(&mut state);
        assert_eq!(state.difficulty.level, 1);
        assert!(state.platforms.iter().all(|p| p.speed == base_speed + step));

        state.player.score = 400;
        scale_difficulty_at_next_score(&mut state);
        assert_eq!(state.difficulty.level, 1);

        state.player.score = 1199;
        scale_difficulty_at_next_score(&mut state);
        assert_eq!(state.difficulty.level, 2);

        // 1600 is the cap: no more scaling, and animation stops speeding up
        state.player.score = 1599;
        let anim = state.player.animation_speed;
        scale_difficulty_at_next_score(&mut state);
        assert_eq!(state.difficulty.level, 2);
        assert_eq!(state.player.animation_speed, anim);
    }

    #[test]
    fn test_animation_speeds_up_below_cap() {
        let mut state = playing(7);
        let anim = state.player.animation_speed;
        state.player.score = 10;
        scale_difficulty_at_next_score(&mut state);
        assert!(state.player.animation_speed > anim);
    }

    fn scale_difficulty_at_next_score(state: &mut GameState) {
        state.player.score += 1;
        scale_difficulty(state);
    }

    #[test]
    fn test_unvalidated_difficulty_tuning_does_not_panic() {
        for (threshold, multiple) in [(u64::MAX / 2 + 1, 4), (0, 4)] {
            let mut state = playing(7);
            state.tuning.difficulty_threshold = threshold;
            state.tuning.difficulty_max_multiple = multiple;
            for _ in 0..3 {
                scale_difficulty_at_next_score(&mut state);
            }
            assert_eq!(state.difficulty.level, 0);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = playing(99999);
        let mut b = playing(99999);
        let dt = a.tuning.timestep;
        let inputs = [TickInput::default(), JUMP, TickInput::default(), JUMP];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input, dt);
                tick(&mut b, input, dt);
            }
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player, b.player);
        assert_eq!(a.platforms, b.platforms);
    }
}
