//! Scrolling platforms: generation, motion and recycling
//!
//! Platforms spawn left to right with a random gap after the previous one, so
//! queue order is also screen order. A platform that has scrolled fully past
//! the left edge is moved behind the last one instead of being dropped.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::ring::RecycleRing;
use crate::tuning::Tuning;

/// A scrolling platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// X before the last motion step, used to tell side hits from landings
    pub prev_x: f32,
    pub width: f32,
    pub height: f32,
    /// Leftward scroll speed (pixels/s)
    pub speed: f32,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Fully past the left edge of the viewport
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Scroll one step. Returns true if the platform was already off screen
    /// before moving and should be recycled.
    pub fn advance(&mut self, dt: f32) -> bool {
        let needs_recycle = self.is_off_screen();
        self.prev_x = self.pos.x;
        self.pos.x -= self.speed * dt;
        needs_recycle
    }
}

/// Random gap between a platform and the one before it
fn spawn_gap<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.spawn_gap_min..=tuning.spawn_gap_max)
}

/// Random top edge inside the spawn band
fn spawn_y<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    let (high, low) = tuning.spawn_band();
    rng.random_range(high..=low)
}

/// Build a fresh pool laid out left to right.
///
/// Widths are rolled here once; recycling keeps them. The first platform sits
/// at mid-screen so a new run always has somewhere to land.
pub fn generate_platforms<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> RecycleRing<Platform> {
    let mut ring = RecycleRing::with_capacity(tuning.pool_size);
    let mut prev_right: Option<f32> = None;

    for id in 0..tuning.pool_size {
        let width = rng.random_range(tuning.platform_min_width..=tuning.canvas_width);
        let x = match prev_right {
            None => tuning.canvas_width / 2.0,
            Some(right) => right + spawn_gap(rng, tuning),
        };
        let y = spawn_y(rng, tuning);

        let platform = Platform {
            id: id as u32,
            pos: Vec2::new(x, y),
            prev_x: x,
            width,
            height: tuning.platform_height,
            speed: tuning.platform_speed,
        };
        prev_right = Some(platform.right());
        ring.enqueue(platform);
    }

    log::debug!(
        "Generated {} platforms spanning {:.0}px",
        ring.len(),
        prev_right.unwrap_or(0.0)
    );
    ring
}

/// Scroll every platform one step in queue order.
///
/// Returns how many platforms asked to be recycled. Spawn order keeps the
/// off-screen platforms at the front of the queue.
pub fn advance_platforms(platforms: &mut RecycleRing<Platform>, dt: f32) -> usize {
    platforms
        .iter_mut()
        .map(|platform| platform.advance(dt))
        .filter(|&needs_recycle| needs_recycle)
        .count()
}

/// Move the front platform behind the current last one.
///
/// Returns the recycled platform's id, or `None` for an empty pool.
pub fn recycle_front<R: Rng + ?Sized>(
    platforms: &mut RecycleRing<Platform>,
    rng: &mut R,
    tuning: &Tuning,
) -> Option<u32> {
    let last_right = platforms.back()?.right();
    let x = last_right + spawn_gap(rng, tuning);
    let y = spawn_y(rng, tuning);

    let platform = platforms.recycle_front()?;
    platform.pos = Vec2::new(x, y);
    platform.prev_x = x;
    Some(platform.id)
}
