//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platform queue order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod platform;
pub mod player;
pub mod rect;
pub mod ring;
pub mod session;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{CollisionResult, Contact, classify_contact, resolve_collisions};
pub use platform::{Platform, advance_platforms, generate_platforms, recycle_front};
pub use player::{Player, PlayerState};
pub use rect::{Rect, aabb_overlap};
pub use ring::RecycleRing;
pub use session::{InputEvent, Session};
pub use state::{Difficulty, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
