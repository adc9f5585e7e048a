//! Demo autopilot
//!
//! A simple jumper for idle/demo play: hop off the end of the current
//! platform, and spend the spare jump if a fall has nothing underneath.

use super::platform::Platform;
use super::player::{Player, PlayerState};
use super::state::{GamePhase, GameState};

/// Jump when the platform's right edge is this close to the player's
const EDGE_MARGIN: f32 = 12.0;
/// Spend the air jump once the feet drop this far below the spawn band top
const RESCUE_DEPTH: f32 = 40.0;

/// First platform (in queue order) spanning the player's horizontal extent
fn platform_under<'a>(
    player: &Player,
    platforms: impl IntoIterator<Item = &'a Platform>,
) -> Option<&'a Platform> {
    let left = player.pos.x;
    let right = player.pos.x + player.width;
    platforms
        .into_iter()
        .find(|p| p.pos.x < right && p.right() > left)
}

/// Whether the demo player should jump this step
pub fn should_jump(state: &GameState) -> bool {
    let player = &state.player;
    if state.phase != GamePhase::Playing || player.jumps == 0 {
        return false;
    }

    let under = platform_under(player, &state.platforms);
    match player.state {
        PlayerState::Grounded => {
            under.is_some_and(|p| p.right() - (player.pos.x + player.width) < EDGE_MARGIN)
        }
        PlayerState::Falling => {
            let feet = player.pos.y + player.height;
            let (band_top, _) = state.tuning.spawn_band();
            under.is_none() && feet > band_top + RESCUE_DEPTH
        }
        PlayerState::Jumping | PlayerState::CollidingLeft => false,
    }
}
