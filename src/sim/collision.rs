//! Player-vs-platform collision detection and response
//!
//! Platforms are checked in queue order and the first overlapping one wins;
//! only a single correction is applied per step even if several overlap.

use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::player::{Player, PlayerState};
use super::rect::aabb_overlap;
use crate::tuning::Tuning;

/// Which side of a platform the player touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// The platform swept left into the player's right side
    Left,
    /// The player came up into the platform's underside
    Below,
    /// The player landed on top
    Top,
}

/// Result of a collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    pub platform_id: u32,
    pub contact: Contact,
}

/// Classify the contact between the player and one platform, if they overlap.
///
/// Side tests run in priority order: left, then below, then top.
pub fn classify_contact(player: &Player, platform: &Platform) -> Option<Contact> {
    if !aabb_overlap(&player.rect(), &platform.rect()) {
        return None;
    }

    // The player's right edge was still left of where the platform started
    // this step, so the platform moved through the player's side
    if player.pos.x + player.width < platform.prev_x {
        return Some(Contact::Left);
    }

    // Last step the player was entirely below the platform
    if player.prev_pos.y > platform.pos.y + platform.height {
        return Some(Contact::Below);
    }

    Some(Contact::Top)
}

/// Apply the response for a classified contact
pub fn apply_contact(player: &mut Player, platform: &Platform, contact: Contact, tuning: &Tuning) {
    match contact {
        Contact::Left => {
            // Knockback only; no position correction
            player.vel.x = tuning.knockback_speed;
            player.state = PlayerState::CollidingLeft;
        }
        Contact::Below => {
            player.vel.y = tuning.bump_speed;
            player.state = PlayerState::Falling;
        }
        Contact::Top => {
            player.jumps = tuning.max_jumps;
            player.pos.y = platform.pos.y - player.height;
            // A rising jump keeps its momentum
            if !player.state.is_jumping() {
                player.vel.y = 0.0;
                player.state = PlayerState::Grounded;
            }
        }
    }
}

/// Resolve the player against platforms in queue order; first overlap wins.
pub fn resolve_collisions<'a, I>(
    player: &mut Player,
    platforms: I,
    tuning: &Tuning,
) -> Option<CollisionResult>
where
    I: IntoIterator<Item = &'a Platform>,
{
    let (platform, contact) = platforms
        .into_iter()
        .find_map(|platform| classify_contact(player, platform).map(|c| (platform, c)))?;

    apply_contact(player, platform, contact, tuning);

    Some(CollisionResult {
        platform_id: platform.id,
        contact,
    })
}
